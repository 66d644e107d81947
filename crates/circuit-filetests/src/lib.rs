//! Shared helpers for tests that check circuit dumps.
//!
//! Expected text is a list of filecheck directives, one per line:
//!
//! ```text
//! check: $(phi=g\d+) = value_selector.i32 [$(merge=g\d+), $(a=g\d+), $(b=g\d+)]
//! nextln: return [$merge, $(dep=g\d+), $phi]
//! ```

pub mod filecheck;

pub use self::filecheck::{assert_filecheck, build_filechecker, match_filecheck};

//! Error types for finishing a stub.

use circuit_ir::VerifierError;
use thiserror::Error;

use crate::block::Block;

/// Result type for SSA construction operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Error reported when a stub body is handed over unfinished.
///
/// Misuse while building (reading an unsealed block that is not a loop
/// header, linking into a sealed block, and the like) is a bug in the stub
/// and panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{block} was never sealed ({pending} incomplete phis)")]
    UnsealedBlock { block: Block, pending: usize },

    #[error("{depth} sub-region(s) still open")]
    OpenRegion { depth: usize },

    #[error("circuit failed verification: {}", format_errors(.0))]
    Verification(Vec<VerifierError>),
}

fn format_errors(errors: &[VerifierError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

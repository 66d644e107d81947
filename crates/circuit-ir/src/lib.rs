//! Circuit intermediate representation.
//!
//! This crate defines the value graph that compiler stubs are built into:
//! - Gates (index handles into an append-only arena)
//! - Opcodes (control, selectors, depend tokens, values, memory)
//! - Machine and gate types
//! - Gate builder helpers
//! - Compilation target configuration
//! - A verifier, a text dump and a parser for it

mod builder;
mod circuit;
mod config;
mod display;
mod entity;
mod entity_map;
mod gate;
mod opcode;
mod parser;
mod types;
mod verifier;

pub use builder::{GateBuilder, GateBuilderBase};
pub use circuit::Circuit;
pub use config::{CompilationConfig, ConfigError, Triple};
pub use entity::{EntityRef, Gate};
pub use entity_map::PrimaryMap;
pub use gate::{GateData, Use};
pub use opcode::Opcode;
pub use parser::{parse_circuit, ParseError};
pub use types::{GateType, MachineType, VariableType};
pub use verifier::{verify, verify_integrity, verify_selectors, VerifierError};

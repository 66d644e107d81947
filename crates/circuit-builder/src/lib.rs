//! SSA construction for circuit stubs.
//!
//! Stub bodies are written against blocks and variables as if they were
//! imperative code; [`SSABuilder`] turns that into a pruned SSA circuit as
//! it goes, without building a CFG or dominator tree first:
//!
//! - [`SSABuilder::write_variable`] / [`SSABuilder::read_variable`] resolve
//!   variables to gates, creating selectors only where control merges
//! - [`SSABuilder::jump`], [`SSABuilder::branch`], [`SSABuilder::switch`],
//!   [`SSABuilder::loop_begin`], [`SSABuilder::loop_end`] and
//!   [`SSABuilder::bind`] shape the control flow
//! - [`SSABuilder::finish`] hands over the verified circuit

mod block;
mod control;
mod error;
mod ssa;
mod variable;

#[cfg(test)]
mod ssa_tests;

pub use block::Block;
pub use error::{BuildError, BuildResult};
pub use ssa::SSABuilder;
pub use variable::Variable;

pub use circuit_ir::{
    Circuit, CompilationConfig, Gate, GateBuilder, GateBuilderBase, GateType, MachineType,
    Opcode, VariableType,
};

//! Circuit verifier.

use thiserror::Error;

use crate::{circuit::Circuit, entity::Gate};

mod integrity;
mod selectors;

pub use integrity::verify_integrity;
pub use selectors::verify_selectors;

/// Verifier error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifierError {
    #[error("{gate}: input {index} refers to deleted gate {input}")]
    DeadInput { gate: Gate, index: usize, input: Gate },

    #[error("{gate}: input {index} ({input}) does not list it as a user")]
    MissingUse { gate: Gate, index: usize, input: Gate },

    #[error("{gate}: recorded use by {user} at input {index} does not exist")]
    StaleUse { gate: Gate, user: Gate, index: usize },

    #[error("{gate}: input {index} is empty")]
    EmptySlot { gate: Gate, index: usize },

    #[error("{gate}: selector control input {control} is not a control gate")]
    SelectorControl { gate: Gate, control: Gate },

    #[error("{gate}: selector has {found} values but its control has {expected} incoming edges")]
    SelectorArity {
        gate: Gate,
        expected: usize,
        found: usize,
    },
}

/// Verify a circuit is well-formed
///
/// Runs every check and returns `Ok(())` if the circuit is valid, or
/// `Err(errors)` with everything found.
pub fn verify(circuit: &Circuit) -> Result<(), Vec<VerifierError>> {
    let mut errors = Vec::new();

    verify_integrity(circuit, &mut errors);
    verify_selectors(circuit, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

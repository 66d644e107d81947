//! Selector checks.

use crate::{circuit::Circuit, VerifierError};

/// Verify every selector matches its control gate
///
/// Checks:
/// - Input 0 is a control gate
/// - The number of value inputs equals the control gate's incoming edges
///   (`Merge`: its input count, `LoopBegin`: 2, anything else: 1)
pub fn verify_selectors(circuit: &Circuit, errors: &mut Vec<VerifierError>) {
    for gate in circuit.gates().filter(|g| circuit.is_selector(*g)) {
        let Some(control) = circuit.in_gate(gate, 0) else {
            // Reported by the integrity pass.
            continue;
        };
        if !circuit.is_live(control) {
            continue;
        }
        let opcode = circuit.opcode(control);
        if !opcode.is_control() {
            errors.push(VerifierError::SelectorControl { gate, control });
            continue;
        }
        let expected = opcode.state_count(circuit.ins(control).len());
        let found = circuit.ins(gate).len() - 1;
        if expected != found {
            errors.push(VerifierError::SelectorArity {
                gate,
                expected,
                found,
            });
        }
    }
}

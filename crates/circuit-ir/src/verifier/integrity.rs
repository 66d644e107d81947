//! Data integrity checks: inputs and use lists agree and point at live gates.

use crate::{circuit::Circuit, gate::Use, VerifierError};

/// Verify data integrity
///
/// Checks:
/// - No live gate reads a deleted gate
/// - No live gate has an empty input slot
/// - Every input is mirrored by a use on the operand, and every recorded use
///   is backed by an input
pub fn verify_integrity(circuit: &Circuit, errors: &mut Vec<VerifierError>) {
    for gate in circuit.gates() {
        for (index, input) in circuit.ins(gate).iter().enumerate() {
            let Some(input) = *input else {
                errors.push(VerifierError::EmptySlot { gate, index });
                continue;
            };
            if !circuit.is_live(input) {
                errors.push(VerifierError::DeadInput { gate, index, input });
                continue;
            }
            if !circuit.uses(input).contains(&Use { user: gate, index }) {
                errors.push(VerifierError::MissingUse { gate, index, input });
            }
        }

        for u in circuit.uses(gate) {
            if circuit.in_gate(u.user, u.index) != Some(gate) || !circuit.is_live(u.user) {
                errors.push(VerifierError::StaleUse {
                    gate,
                    user: u.user,
                    index: u.index,
                });
            }
        }
    }
}

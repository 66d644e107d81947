//! Parser for the circuit text dump.
//!
//! Reads back what `Display for Circuit` writes. Gates are renumbered in
//! line order, so a dump with holes left by deleted gates parses into a
//! dense circuit. Blank lines and lines starting with `;` are skipped.

mod error;
mod line;
mod primitives;

use std::collections::BTreeMap;

pub use error::ParseError;
use line::{parse_gate_line, GateLine};
use tracing::debug;

use crate::{circuit::Circuit, entity::Gate, opcode::Opcode};

/// Parse a complete circuit from its text dump.
pub fn parse_circuit(input: &str) -> Result<Circuit, ParseError> {
    let mut lines = Vec::new();
    for (index, text) in input.lines().enumerate() {
        let text = text.trim();
        if text.is_empty() || text.starts_with(';') {
            continue;
        }
        let line = index + 1;
        match parse_gate_line(text) {
            Ok(("", gate)) => lines.push((line, gate)),
            Ok((remaining, _)) => {
                return Err(ParseError::new(
                    line,
                    format!("unexpected input remaining: {}", remaining),
                ))
            }
            Err(e) => return Err(ParseError::new(line, format!("malformed gate: {:?}", e))),
        }
    }
    build(&lines)
}

fn build(lines: &[(usize, GateLine)]) -> Result<Circuit, ParseError> {
    let mut circuit = Circuit::new();
    let mut ids: BTreeMap<u32, Gate> = BTreeMap::new();

    // Create every gate with empty inputs so forward references resolve.
    for (line, gate) in lines {
        let created = match gate.opcode {
            Opcode::StateEntry => circuit.state_entry(),
            Opcode::DependEntry => circuit.depend_entry(),
            _ => circuit.new_gate(
                gate.opcode,
                gate.machine_type,
                gate.gate_type,
                gate.bitfield,
                &vec![None; gate.ins.len()],
            ),
        };
        let slots = circuit.ins(created).len();
        if gate.ins.len() != slots {
            return Err(ParseError::new(
                *line,
                format!(
                    "{} takes {} inputs, found {}",
                    gate.opcode,
                    slots,
                    gate.ins.len()
                ),
            ));
        }
        if ids.values().any(|g| *g == created) {
            return Err(ParseError::new(*line, format!("duplicate {}", gate.opcode)));
        }
        if ids.insert(gate.id, created).is_some() {
            return Err(ParseError::new(
                *line,
                format!("g{} is defined twice", gate.id),
            ));
        }
    }

    for (line, gate) in lines {
        let user = ids[&gate.id];
        for (index, slot) in gate.ins.iter().enumerate() {
            let Some(id) = slot else { continue };
            let input = match ids.get(id) {
                Some(input) => *input,
                None => return Err(ParseError::new(*line, format!("undefined gate g{}", id))),
            };
            circuit.new_in(user, index, input);
        }
    }

    debug!(gates = circuit.gate_count(), "parsed circuit");
    Ok(circuit)
}

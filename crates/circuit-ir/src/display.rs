//! Text dump of a circuit.
//!
//! One live gate per line, in creation order:
//!
//! ```text
//! g0 = state_entry
//! g4 = constant.i32 10
//! g9 = value_selector.i32 [g7, g4, g8]
//! ```
//!
//! The machine type follows the opcode when the gate carries a value; a
//! gate type other than the usual one for that machine type is appended
//! after a colon (`.i64:tagged`). Empty input slots print as `_`.

use core::fmt;

use crate::{circuit::Circuit, entity::Gate, opcode::Opcode, types::GateType};

impl Circuit {
    /// Format a single gate as it appears in the dump.
    pub fn display_gate(&self, gate: Gate) -> String {
        let mut line = format!("{} = {}", gate, self.opcode(gate));
        let machine_type = self.machine_type(gate);
        let gate_type = self.gate_type(gate);
        let plain = gate_type == GateType::default_for(machine_type);
        if machine_type.has_value() || !plain {
            line.push_str(&format!(".{}", machine_type));
        }
        if !plain {
            line.push_str(&format!(":{}", gate_type));
        }
        match self.opcode(gate) {
            Opcode::Constant | Opcode::Arg | Opcode::SwitchBranch => {
                line.push_str(&format!(" {}", self.bitfield(gate)));
            }
            Opcode::SwitchCase => {
                line.push_str(&format!(" {}", self.bitfield(gate) as i64));
            }
            _ => {}
        }
        let ins = self.ins(gate);
        if !ins.is_empty() {
            let operands: Vec<String> = ins
                .iter()
                .map(|input| match input {
                    Some(g) => g.to_string(),
                    None => "_".to_string(),
                })
                .collect();
            line.push_str(&format!(" [{}]", operands.join(", ")));
        }
        line
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gate in self.gates() {
            writeln!(f, "{}", self.display_gate(gate))?;
        }
        Ok(())
    }
}

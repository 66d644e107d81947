//! Gate data.

use crate::{
    entity::Gate,
    opcode::Opcode,
    types::{GateType, MachineType},
};

/// One use of a gate: `user` reads it through input slot `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Use {
    pub user: Gate,
    pub index: usize,
}

/// Gate data stored in the circuit arena.
///
/// An input slot is `None` while its operand is still unknown; selectors are
/// created this way and filled in once their block is sealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateData {
    pub opcode: Opcode,
    pub machine_type: MachineType,
    pub gate_type: GateType,
    /// Immediate payload: constant bits, switch key, case count or argument index
    pub bitfield: u64,
    pub(crate) ins: Vec<Option<Gate>>,
    pub(crate) uses: Vec<Use>,
    pub(crate) dead: bool,
}

impl GateData {
    pub(crate) fn new(
        opcode: Opcode,
        machine_type: MachineType,
        gate_type: GateType,
        bitfield: u64,
        ins: Vec<Option<Gate>>,
    ) -> Self {
        Self {
            opcode,
            machine_type,
            gate_type,
            bitfield,
            ins,
            uses: Vec::new(),
            dead: false,
        }
    }

    /// Input slots in order.
    pub fn ins(&self) -> &[Option<Gate>] {
        &self.ins
    }

    /// Gates reading this one.
    pub fn uses(&self) -> &[Use] {
        &self.uses
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Check if any input slot is still empty.
    pub fn has_empty_slot(&self) -> bool {
        self.ins.iter().any(Option::is_none)
    }
}

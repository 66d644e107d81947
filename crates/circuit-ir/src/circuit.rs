//! The circuit: an append-only arena of gates with use lists.

use tracing::trace;

use crate::{
    entity::Gate,
    entity_map::PrimaryMap,
    gate::{GateData, Use},
    opcode::Opcode,
    types::{GateType, MachineType},
};

/// A sea-of-nodes value graph.
///
/// Gates are never removed from the arena. Deleting a gate marks its slot
/// dead and detaches it from its inputs; the handle stays valid for
/// [`Circuit::is_live`] queries so stale references can be detected.
///
/// Two root gates exist from construction: the entry control token
/// ([`Circuit::state_entry`]) and the entry depend token
/// ([`Circuit::depend_entry`]).
#[derive(Debug, Clone)]
pub struct Circuit {
    gates: PrimaryMap<Gate, GateData>,
    state_entry: Gate,
    depend_entry: Gate,
}

impl Circuit {
    pub fn new() -> Self {
        let mut gates = PrimaryMap::new();
        let state_entry = gates.push(GateData::new(
            Opcode::StateEntry,
            MachineType::NoValue,
            GateType::Empty,
            0,
            Vec::new(),
        ));
        let depend_entry = gates.push(GateData::new(
            Opcode::DependEntry,
            MachineType::NoValue,
            GateType::Empty,
            0,
            Vec::new(),
        ));
        Self {
            gates,
            state_entry,
            depend_entry,
        }
    }

    pub fn state_entry(&self) -> Gate {
        self.state_entry
    }

    pub fn depend_entry(&self) -> Gate {
        self.depend_entry
    }

    /// Create a gate. `None` inputs are placeholders to be filled by
    /// [`Circuit::new_in`].
    pub fn new_gate(
        &mut self,
        opcode: Opcode,
        machine_type: MachineType,
        gate_type: GateType,
        bitfield: u64,
        ins: &[Option<Gate>],
    ) -> Gate {
        for input in ins.iter().flatten() {
            self.assert_live(*input);
        }
        let gate = self.gates.push(GateData::new(
            opcode,
            machine_type,
            gate_type,
            bitfield,
            ins.to_vec(),
        ));
        for (index, input) in ins.iter().enumerate() {
            if let Some(input) = input {
                self.gates[*input].uses.push(Use { user: gate, index });
            }
        }
        trace!(%gate, %opcode, "new gate");
        gate
    }

    /// Fill the empty input slot `index` of `gate`.
    ///
    /// Panics if the slot is already occupied; use [`Circuit::replace_in`]
    /// to change an existing operand.
    pub fn new_in(&mut self, gate: Gate, index: usize, input: Gate) {
        self.assert_live(gate);
        self.assert_live(input);
        assert!(
            self.gates[gate].ins[index].is_none(),
            "input {} of {} is already set",
            index,
            gate
        );
        self.gates[gate].ins[index] = Some(input);
        self.gates[input].uses.push(Use { user: gate, index });
    }

    /// Point input slot `index` of `gate` at `input`, detaching the previous
    /// operand if any.
    pub fn replace_in(&mut self, gate: Gate, index: usize, input: Gate) {
        self.assert_live(gate);
        self.assert_live(input);
        if let Some(old) = self.gates[gate].ins[index] {
            self.remove_use(old, Use { user: gate, index });
        }
        self.gates[gate].ins[index] = Some(input);
        self.gates[input].uses.push(Use { user: gate, index });
    }

    /// Reroute every use of `old` to `new`, except uses by `old` itself.
    pub fn replace_uses(&mut self, old: Gate, new: Gate) {
        let uses: Vec<Use> = self.gates[old]
            .uses
            .iter()
            .copied()
            .filter(|u| u.user != old)
            .collect();
        for u in uses {
            self.replace_in(u.user, u.index, new);
        }
    }

    /// Delete a gate.
    ///
    /// The gate must have no users other than itself. Its inputs are
    /// detached and the slot is marked dead.
    pub fn delete_gate(&mut self, gate: Gate) {
        self.assert_live(gate);
        assert!(
            self.gates[gate].uses.iter().all(|u| u.user == gate),
            "deleting {} which still has users",
            gate
        );
        let ins = core::mem::take(&mut self.gates[gate].ins);
        for (index, input) in ins.into_iter().enumerate() {
            if let Some(input) = input {
                if input != gate {
                    self.remove_use(input, Use { user: gate, index });
                }
            }
        }
        let data = &mut self.gates[gate];
        data.uses.clear();
        data.dead = true;
        trace!(%gate, "deleted gate");
    }

    pub fn in_gate(&self, gate: Gate, index: usize) -> Option<Gate> {
        self.gates[gate].ins.get(index).copied().flatten()
    }

    pub fn ins(&self, gate: Gate) -> &[Option<Gate>] {
        &self.gates[gate].ins
    }

    pub fn uses(&self, gate: Gate) -> &[Use] {
        &self.gates[gate].uses
    }

    pub fn is_live(&self, gate: Gate) -> bool {
        self.gates.get(gate).is_some_and(|d| !d.dead)
    }

    pub fn is_selector(&self, gate: Gate) -> bool {
        self.gates[gate].opcode.is_selector()
    }

    pub fn opcode(&self, gate: Gate) -> Opcode {
        self.gates[gate].opcode
    }

    pub fn machine_type(&self, gate: Gate) -> MachineType {
        self.gates[gate].machine_type
    }

    pub fn gate_type(&self, gate: Gate) -> GateType {
        self.gates[gate].gate_type
    }

    pub fn bitfield(&self, gate: Gate) -> u64 {
        self.gates[gate].bitfield
    }

    pub fn gate_data(&self, gate: Gate) -> Option<&GateData> {
        self.gates.get(gate)
    }

    /// Iterate over live gates in creation order.
    pub fn gates(&self) -> impl Iterator<Item = Gate> + '_ {
        self.gates
            .iter()
            .filter(|(_, data)| !data.dead)
            .map(|(gate, _)| gate)
    }

    /// Total number of gate slots, dead ones included.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    fn remove_use(&mut self, gate: Gate, u: Use) {
        let uses = &mut self.gates[gate].uses;
        if let Some(pos) = uses.iter().position(|x| *x == u) {
            uses.remove(pos);
        }
    }

    fn assert_live(&self, gate: Gate) {
        assert!(self.is_live(gate), "{} is not a live gate", gate);
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

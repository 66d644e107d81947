//! Trait-based gate builders.
//!
//! Anything that can hand out a `&mut Circuit` implements [`GateBuilderBase`]
//! and gets every typed constructor of [`GateBuilder`] for free.

use crate::{
    circuit::Circuit,
    entity::Gate,
    opcode::Opcode,
    types::{GateType, MachineType, VariableType},
};

/// Base trait for gate builders.
///
/// Only provides access to the circuit being built. Use the methods of
/// [`GateBuilder`] instead of calling these directly.
pub trait GateBuilderBase {
    fn circuit(&self) -> &Circuit;

    fn circuit_mut(&mut self) -> &mut Circuit;
}

impl GateBuilderBase for Circuit {
    fn circuit(&self) -> &Circuit {
        self
    }

    fn circuit_mut(&mut self) -> &mut Circuit {
        self
    }
}

/// Gate builder trait with one method per gate shape.
pub trait GateBuilder: GateBuilderBase {
    // Constants

    fn int32(&mut self, value: i32) -> Gate {
        self.constant(VariableType::int32(), value as u32 as u64)
    }

    fn int64(&mut self, value: i64) -> Gate {
        self.constant(VariableType::int64(), value as u64)
    }

    fn boolean(&mut self, value: bool) -> Gate {
        self.constant(VariableType::bool(), value as u64)
    }

    fn double(&mut self, value: f64) -> Gate {
        self.constant(VariableType::float64(), value.to_bits())
    }

    /// Constant with raw payload bits.
    fn constant(&mut self, ty: VariableType, bits: u64) -> Gate {
        self.circuit_mut().new_gate(
            Opcode::Constant,
            ty.machine_type(),
            ty.gate_type(),
            bits,
            &[],
        )
    }

    /// A fresh `Undefined` gate. Callers wanting one per type should cache it.
    fn undefined(&mut self, ty: VariableType) -> Gate {
        self.circuit_mut().new_gate(
            Opcode::Undefined,
            ty.machine_type(),
            ty.gate_type(),
            0,
            &[],
        )
    }

    fn argument(&mut self, index: usize, ty: VariableType) -> Gate {
        self.circuit_mut().new_gate(
            Opcode::Arg,
            ty.machine_type(),
            ty.gate_type(),
            index as u64,
            &[],
        )
    }

    // Arithmetic

    /// Binary operation whose result has the type of `lhs`.
    fn binary(&mut self, opcode: Opcode, lhs: Gate, rhs: Gate) -> Gate {
        let circuit = self.circuit();
        let machine_type = circuit.machine_type(lhs);
        let gate_type = circuit.gate_type(lhs);
        self.circuit_mut()
            .new_gate(opcode, machine_type, gate_type, 0, &[Some(lhs), Some(rhs)])
    }

    fn add(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.binary(Opcode::Add, lhs, rhs)
    }

    fn sub(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.binary(Opcode::Sub, lhs, rhs)
    }

    fn mul(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.binary(Opcode::Mul, lhs, rhs)
    }

    fn and(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.binary(Opcode::And, lhs, rhs)
    }

    fn or(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.binary(Opcode::Or, lhs, rhs)
    }

    fn xor(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.binary(Opcode::Xor, lhs, rhs)
    }

    // Comparisons produce `i1`

    fn compare(&mut self, opcode: Opcode, lhs: Gate, rhs: Gate) -> Gate {
        self.circuit_mut().new_gate(
            opcode,
            MachineType::I1,
            GateType::CValue,
            0,
            &[Some(lhs), Some(rhs)],
        )
    }

    fn equal(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.compare(Opcode::Eq, lhs, rhs)
    }

    fn not_equal(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.compare(Opcode::Ne, lhs, rhs)
    }

    fn less_than(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.compare(Opcode::Slt, lhs, rhs)
    }

    fn greater_than(&mut self, lhs: Gate, rhs: Gate) -> Gate {
        self.compare(Opcode::Sgt, lhs, rhs)
    }

    // Control

    fn control_gate(&mut self, opcode: Opcode, bitfield: u64, ins: &[Option<Gate>]) -> Gate {
        self.circuit_mut()
            .new_gate(opcode, MachineType::NoValue, GateType::Empty, bitfield, ins)
    }

    fn goto(&mut self, control: Gate) -> Gate {
        self.control_gate(Opcode::Goto, 0, &[Some(control)])
    }

    fn if_branch(&mut self, control: Gate, condition: Gate) -> Gate {
        self.control_gate(Opcode::IfBranch, 0, &[Some(control), Some(condition)])
    }

    fn if_true(&mut self, branch: Gate) -> Gate {
        self.control_gate(Opcode::IfTrue, 0, &[Some(branch)])
    }

    fn if_false(&mut self, branch: Gate) -> Gate {
        self.control_gate(Opcode::IfFalse, 0, &[Some(branch)])
    }

    fn switch_branch(&mut self, control: Gate, index: Gate, case_count: usize) -> Gate {
        self.control_gate(
            Opcode::SwitchBranch,
            case_count as u64,
            &[Some(control), Some(index)],
        )
    }

    fn switch_case(&mut self, switch: Gate, key: i64) -> Gate {
        self.control_gate(Opcode::SwitchCase, key as u64, &[Some(switch)])
    }

    fn default_case(&mut self, switch: Gate) -> Gate {
        self.control_gate(Opcode::DefaultCase, 0, &[Some(switch)])
    }

    fn merge(&mut self, controls: &[Gate]) -> Gate {
        let ins: Vec<Option<Gate>> = controls.iter().copied().map(Some).collect();
        self.control_gate(Opcode::Merge, 0, &ins)
    }

    /// Loop header whose back-edge input is filled in later.
    fn loop_begin(&mut self, forward: Gate) -> Gate {
        self.control_gate(Opcode::LoopBegin, 0, &[Some(forward), None])
    }

    fn loop_back(&mut self, control: Gate) -> Gate {
        self.control_gate(Opcode::LoopBack, 0, &[Some(control)])
    }

    fn return_value(&mut self, control: Gate, depend: Gate, value: Gate) -> Gate {
        self.control_gate(
            Opcode::Return,
            0,
            &[Some(control), Some(depend), Some(value)],
        )
    }

    fn return_void(&mut self, control: Gate, depend: Gate) -> Gate {
        self.control_gate(Opcode::ReturnVoid, 0, &[Some(control), Some(depend)])
    }

    // Selectors and depend tokens

    /// Selector with `arity` empty value slots after its control input.
    fn selector(&mut self, control: Gate, ty: VariableType, arity: usize) -> Gate {
        let opcode = if ty.machine_type().has_value() {
            Opcode::ValueSelector
        } else {
            Opcode::DependSelector
        };
        let mut ins = vec![None; arity + 1];
        ins[0] = Some(control);
        self.circuit_mut()
            .new_gate(opcode, ty.machine_type(), ty.gate_type(), 0, &ins)
    }

    fn depend_selector(&mut self, control: Gate, depends: &[Gate]) -> Gate {
        let mut ins = vec![Some(control)];
        ins.extend(depends.iter().copied().map(Some));
        self.control_gate(Opcode::DependSelector, 0, &ins)
    }

    fn depend_relay(&mut self, control: Gate, depend: Gate) -> Gate {
        self.control_gate(Opcode::DependRelay, 0, &[Some(control), Some(depend)])
    }

    fn depend_and(&mut self, a: Gate, b: Gate) -> Gate {
        self.control_gate(Opcode::DependAnd, 0, &[Some(a), Some(b)])
    }

    // Memory

    fn load(&mut self, control: Gate, depend: Gate, ty: VariableType, address: Gate) -> Gate {
        self.circuit_mut().new_gate(
            Opcode::Load,
            ty.machine_type(),
            ty.gate_type(),
            0,
            &[Some(control), Some(depend), Some(address)],
        )
    }

    fn store(&mut self, control: Gate, depend: Gate, address: Gate, value: Gate) -> Gate {
        self.control_gate(
            Opcode::Store,
            0,
            &[Some(control), Some(depend), Some(address), Some(value)],
        )
    }
}

impl<T: GateBuilderBase> GateBuilder for T {}

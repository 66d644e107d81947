//! Type system for the circuit.

use core::fmt;

/// Machine-level representation of a gate's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MachineType {
    /// The gate produces no value (control and depend tokens)
    NoValue,
    /// Any value; used for operands whose width is decided by the producer
    AnyValue,
    /// Pointer-sized integer, resolved by [`crate::CompilationConfig`]
    Arch,
    /// 1-bit boolean
    I1,
    /// 8-bit integer
    I8,
    /// 16-bit integer
    I16,
    /// 32-bit integer
    I32,
    /// 64-bit integer
    I64,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
}

impl MachineType {
    /// Check if this is an integer type (including booleans and `Arch`).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            MachineType::I1
                | MachineType::I8
                | MachineType::I16
                | MachineType::I32
                | MachineType::I64
                | MachineType::Arch
        )
    }

    /// Check if this is a floating point type.
    pub fn is_float(&self) -> bool {
        matches!(self, MachineType::F32 | MachineType::F64)
    }

    /// Check if gates of this type carry a value at all.
    pub fn has_value(&self) -> bool {
        !matches!(self, MachineType::NoValue)
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MachineType::NoValue => "novalue",
            MachineType::AnyValue => "any",
            MachineType::Arch => "arch",
            MachineType::I1 => "i1",
            MachineType::I8 => "i8",
            MachineType::I16 => "i16",
            MachineType::I32 => "i32",
            MachineType::I64 => "i64",
            MachineType::F32 => "f32",
            MachineType::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Language-level classification of a gate's value.
///
/// The machine type says how wide a value is; the gate type says how the
/// engine interprets it (raw machine value versus tagged JS value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GateType {
    /// No value
    Empty,
    /// Raw machine value
    CValue,
    /// Tagged JS value (number, pointer or special)
    TaggedValue,
    /// Tagged value known to be a heap pointer
    TaggedPointer,
}

impl GateType {
    /// The gate type a gate of `machine_type` has unless stated otherwise.
    pub fn default_for(machine_type: MachineType) -> Self {
        if machine_type.has_value() {
            GateType::CValue
        } else {
            GateType::Empty
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateType::Empty => "empty",
            GateType::CValue => "c",
            GateType::TaggedValue => "tagged",
            GateType::TaggedPointer => "tagged_ptr",
        };
        f.write_str(name)
    }
}

/// The type carried by a stub variable: a machine type plus a gate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableType {
    machine_type: MachineType,
    gate_type: GateType,
}

impl VariableType {
    /// Create a variable type from its parts.
    pub const fn new(machine_type: MachineType, gate_type: GateType) -> Self {
        Self {
            machine_type,
            gate_type,
        }
    }

    pub const fn void() -> Self {
        Self::new(MachineType::NoValue, GateType::Empty)
    }

    pub const fn bool() -> Self {
        Self::new(MachineType::I1, GateType::CValue)
    }

    pub const fn int8() -> Self {
        Self::new(MachineType::I8, GateType::CValue)
    }

    pub const fn int16() -> Self {
        Self::new(MachineType::I16, GateType::CValue)
    }

    pub const fn int32() -> Self {
        Self::new(MachineType::I32, GateType::CValue)
    }

    pub const fn int64() -> Self {
        Self::new(MachineType::I64, GateType::CValue)
    }

    pub const fn float64() -> Self {
        Self::new(MachineType::F64, GateType::CValue)
    }

    pub const fn pointer() -> Self {
        Self::new(MachineType::Arch, GateType::CValue)
    }

    /// Any JS value: a tagged 64-bit word.
    pub const fn js_any() -> Self {
        Self::new(MachineType::I64, GateType::TaggedValue)
    }

    /// A JS heap object: a tagged 64-bit pointer.
    pub const fn js_pointer() -> Self {
        Self::new(MachineType::I64, GateType::TaggedPointer)
    }

    pub fn machine_type(&self) -> MachineType {
        self.machine_type
    }

    pub fn gate_type(&self) -> GateType {
        self.gate_type
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.machine_type, self.gate_type)
    }
}

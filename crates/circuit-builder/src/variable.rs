//! Stub variables.

use core::fmt;

use circuit_ir::{EntityRef, VariableType};

/// Variable entity reference
///
/// A variable has no storage of its own. Blocks map it to the gate holding
/// its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(u32);

impl EntityRef for Variable {
    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        Variable(index as u32)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VariableData {
    pub(crate) ty: VariableType,
}

//! Entity reference system for type-safe entity IDs.
//!
//! Entities are plain index handles into an arena. The circuit never reuses
//! a slot, so a handle to a deleted gate stays distinguishable from every
//! live gate for the lifetime of the circuit.

use core::fmt;

/// Base trait for entity references.
///
/// Entities are type-safe identifiers for IR elements. They provide O(1)
/// conversion to/from indices while preventing different kinds of handles
/// from being mixed up.
pub trait EntityRef: Copy + Clone + PartialEq + Eq + core::hash::Hash + fmt::Debug {
    /// Get the index of this entity
    fn index(self) -> usize;

    /// Create an entity from an index
    fn from_index(index: usize) -> Self;
}

/// Gate entity reference
///
/// A gate is one node of the circuit: a constant, an operation, a control
/// token or a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gate(u32);

impl Gate {
    /// Create a new gate entity with the given index
    pub fn new(index: u32) -> Self {
        Gate(index)
    }

    /// Get the raw index of this gate
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl EntityRef for Gate {
    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        Gate(index as u32)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

//! Blocks under construction.

use core::fmt;
use std::collections::BTreeMap;

use circuit_ir::{EntityRef, Gate};

use crate::variable::Variable;

/// Block entity reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Block(u32);

impl EntityRef for Block {
    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        Block(index as u32)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block{}", self.0)
    }
}

/// Per-block SSA state.
///
/// `pre_control` starts as the first incoming control edge and becomes the
/// `Merge` or `LoopBegin` gate once the block is bound; selectors created in
/// this block hang off it. Further incoming edges wait in
/// `other_pre_controls` until the merge is built.
#[derive(Debug, Clone, Default)]
pub(crate) struct BlockData {
    pub(crate) predecessors: Vec<Block>,
    pub(crate) control: Option<Gate>,
    pub(crate) pre_control: Option<Gate>,
    pub(crate) other_pre_controls: Vec<Gate>,
    pub(crate) depend: Option<Gate>,
    /// Depend selector of a loop header; its back-edge slot is filled by `loop_end`
    pub(crate) loop_depend: Option<Gate>,
    pub(crate) local_defs: BTreeMap<Variable, Gate>,
    pub(crate) incomplete_phis: BTreeMap<Variable, Gate>,
    pub(crate) bound: bool,
    pub(crate) sealed: bool,
    /// Closed for writes and control: a terminator was emitted or the block
    /// was suspended by `push_region`
    pub(crate) terminated: bool,
}

impl BlockData {
    /// A block that starts out bound and sealed with the given state, such as
    /// the entry block or a region boundary.
    pub(crate) fn sealed(predecessors: Vec<Block>, control: Gate, depend: Gate) -> Self {
        Self {
            predecessors,
            control: Some(control),
            pre_control: Some(control),
            depend: Some(depend),
            bound: true,
            sealed: true,
            ..Self::default()
        }
    }
}

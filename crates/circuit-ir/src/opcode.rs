//! Gate opcodes.

use core::fmt;

/// Gate opcode
///
/// The opcode says what a gate computes. Operands live in the gate's input
/// list; immediates (constant payloads, switch keys, case counts, argument
/// indices) live in the gate's bitfield.
///
/// Input conventions:
///
/// - control gates take their incoming control token(s) first
/// - selectors take their control gate at input 0, then one value per
///   incoming control edge
/// - side-effecting gates take `(control, depend, operands...)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    // Roots
    /// Entry control token of the circuit
    StateEntry,
    /// Entry depend token of the circuit
    DependEntry,

    // Control
    /// Return a value: (control, depend, value)
    Return,
    /// Return without value: (control, depend)
    ReturnVoid,
    /// Unconditional edge to an ordinary block
    Goto,
    /// Two-way branch: (control, condition)
    IfBranch,
    /// Taken successor of an `IfBranch`
    IfTrue,
    /// Not-taken successor of an `IfBranch`
    IfFalse,
    /// Multi-way branch: (control, index); bitfield = number of cases
    SwitchBranch,
    /// Successor of a `SwitchBranch` for one key; bitfield = key
    SwitchCase,
    /// Fallback successor of a `SwitchBranch`
    DefaultCase,
    /// Join of N control edges
    Merge,
    /// Loop header: (forward control, back-edge control)
    LoopBegin,
    /// Back edge into a loop header
    LoopBack,

    // Selectors
    /// Phi over values: (control, v1..vN)
    ValueSelector,
    /// Phi over depend tokens: (control, d1..dN)
    DependSelector,
    /// Ties a depend token to a control case: (control, depend)
    DependRelay,
    /// Joins two depend tokens
    DependAnd,

    // Values
    /// Constant; bitfield = raw bits
    Constant,
    /// Value of an unreachable or never-written variable
    Undefined,
    /// Stub argument; bitfield = index
    Arg,

    // Arithmetic
    /// Integer add: result = arg1 + arg2
    Add,
    /// Integer subtract: result = arg1 - arg2
    Sub,
    /// Integer multiply: result = arg1 * arg2
    Mul,
    /// Bitwise and
    And,
    /// Bitwise or
    Or,
    /// Bitwise xor
    Xor,

    // Comparisons
    /// result = (arg1 == arg2)
    Eq,
    /// result = (arg1 != arg2)
    Ne,
    /// Signed less than
    Slt,
    /// Signed greater than
    Sgt,

    // Memory
    /// Load: (control, depend, address)
    Load,
    /// Store: (control, depend, address, value)
    Store,
}

impl Opcode {
    /// Every opcode, in declaration order.
    pub const ALL: [Opcode; 33] = [
        Opcode::StateEntry,
        Opcode::DependEntry,
        Opcode::Return,
        Opcode::ReturnVoid,
        Opcode::Goto,
        Opcode::IfBranch,
        Opcode::IfTrue,
        Opcode::IfFalse,
        Opcode::SwitchBranch,
        Opcode::SwitchCase,
        Opcode::DefaultCase,
        Opcode::Merge,
        Opcode::LoopBegin,
        Opcode::LoopBack,
        Opcode::ValueSelector,
        Opcode::DependSelector,
        Opcode::DependRelay,
        Opcode::DependAnd,
        Opcode::Constant,
        Opcode::Undefined,
        Opcode::Arg,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Eq,
        Opcode::Ne,
        Opcode::Slt,
        Opcode::Sgt,
        Opcode::Load,
        Opcode::Store,
    ];

    /// Look an opcode up by its dump name.
    pub fn from_name(name: &str) -> Option<Opcode> {
        Opcode::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Selectors are the phis of the circuit.
    pub fn is_selector(self) -> bool {
        matches!(self, Opcode::ValueSelector | Opcode::DependSelector)
    }

    /// Check if this gate produces a control token.
    pub fn is_control(self) -> bool {
        matches!(
            self,
            Opcode::StateEntry
                | Opcode::Return
                | Opcode::ReturnVoid
                | Opcode::Goto
                | Opcode::IfBranch
                | Opcode::IfTrue
                | Opcode::IfFalse
                | Opcode::SwitchBranch
                | Opcode::SwitchCase
                | Opcode::DefaultCase
                | Opcode::Merge
                | Opcode::LoopBegin
                | Opcode::LoopBack
        )
    }

    pub fn is_loop_head(self) -> bool {
        matches!(self, Opcode::LoopBegin)
    }

    /// One successor of a conditional control split.
    pub fn is_control_case(self) -> bool {
        matches!(
            self,
            Opcode::IfTrue | Opcode::IfFalse | Opcode::SwitchCase | Opcode::DefaultCase
        )
    }

    /// Gates that end a block.
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            Opcode::Return
                | Opcode::ReturnVoid
                | Opcode::Goto
                | Opcode::IfBranch
                | Opcode::SwitchBranch
                | Opcode::LoopBack
        )
    }

    /// Number of incoming control edges a selector hanging off a gate with
    /// this opcode must cover, given the gate's input count.
    pub fn state_count(self, num_ins: usize) -> usize {
        match self {
            Opcode::Merge => num_ins,
            Opcode::LoopBegin => 2,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::StateEntry => "state_entry",
            Opcode::DependEntry => "depend_entry",
            Opcode::Return => "return",
            Opcode::ReturnVoid => "return_void",
            Opcode::Goto => "goto",
            Opcode::IfBranch => "if_branch",
            Opcode::IfTrue => "if_true",
            Opcode::IfFalse => "if_false",
            Opcode::SwitchBranch => "switch_branch",
            Opcode::SwitchCase => "switch_case",
            Opcode::DefaultCase => "default_case",
            Opcode::Merge => "merge",
            Opcode::LoopBegin => "loop_begin",
            Opcode::LoopBack => "loop_back",
            Opcode::ValueSelector => "value_selector",
            Opcode::DependSelector => "depend_selector",
            Opcode::DependRelay => "depend_relay",
            Opcode::DependAnd => "depend_and",
            Opcode::Constant => "constant",
            Opcode::Undefined => "undefined",
            Opcode::Arg => "arg",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Eq => "eq",
            Opcode::Ne => "ne",
            Opcode::Slt => "slt",
            Opcode::Sgt => "sgt",
            Opcode::Load => "load",
            Opcode::Store => "store",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

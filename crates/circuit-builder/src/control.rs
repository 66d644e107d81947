//! Control operators.
//!
//! Every operator takes the block it emits from explicitly. Emitting a
//! terminator closes that block; successors receive the new control edge
//! and the source block as a predecessor, in call order.

use circuit_ir::{Gate, GateBuilder, Opcode, VariableType};
use tracing::debug;

use crate::{
    block::{Block, BlockData},
    ssa::SSABuilder,
};

impl SSABuilder {
    /// Unconditional jump from `from` to `to`.
    pub fn jump(&mut self, from: Block, to: Block) -> Gate {
        let control = self.open_control(from);
        let goto = self.circuit.goto(control);
        self.terminate(from, goto);
        self.link(from, to, goto);
        goto
    }

    /// Two-way branch on `condition`.
    pub fn branch(&mut self, from: Block, condition: Gate, if_true: Block, if_false: Block) -> Gate {
        let control = self.open_control(from);
        let branch = self.circuit.if_branch(control, condition);
        self.terminate(from, branch);

        let taken = self.circuit.if_true(branch);
        self.link(from, if_true, taken);
        let not_taken = self.circuit.if_false(branch);
        self.link(from, if_false, not_taken);
        branch
    }

    /// Multi-way branch on `index`, one successor per `(key, block)` case plus
    /// the default.
    pub fn switch(&mut self, from: Block, index: Gate, default: Block, cases: &[(i64, Block)]) -> Gate {
        let control = self.open_control(from);
        let switch = self.circuit.switch_branch(control, index, cases.len());
        self.terminate(from, switch);

        for (key, target) in cases {
            let case = self.circuit.switch_case(switch, *key);
            self.link(from, *target, case);
        }
        let default_case = self.circuit.default_case(switch);
        self.link(from, default, default_case);
        switch
    }

    /// Open `header` as a loop header.
    ///
    /// The header must have exactly its forward predecessor. It is bound but
    /// stays unsealed until [`SSABuilder::loop_end`] adds the back edge.
    pub fn loop_begin(&mut self, header: Block) -> Gate {
        let data = &self.blocks[header];
        assert_eq!(
            data.predecessors.len(),
            1,
            "loop header {} must have exactly one forward predecessor",
            header
        );
        assert!(!data.bound, "{} is already bound", header);

        let forward = self.pre_control(header);
        let loop_begin = self.circuit.loop_begin(forward);
        let data = &mut self.blocks[header];
        data.control = Some(loop_begin);
        data.pre_control = Some(loop_begin);
        self.bind(header);
        loop_begin
    }

    /// Close the loop opened at `header` with a back edge from `back_edge`.
    pub fn loop_end(&mut self, header: Block, back_edge: Block) -> Gate {
        assert!(
            self.is_loop_head(header),
            "loop_end on {}, which is not a loop header",
            header
        );
        let control = self.open_control(back_edge);
        let loop_back = self.circuit.loop_back(control);
        self.terminate(back_edge, loop_back);
        self.link(back_edge, header, loop_back);

        self.seal(header);
        self.merge_all_control(header);
        self.merge_all_depend(header);
        loop_back
    }

    /// Make `block` ready for emission once all of its forward edges exist.
    ///
    /// Ordinary blocks are sealed here and get their `Merge` and depend
    /// selector. Loop headers are bound by [`SSABuilder::loop_begin`].
    pub fn bind(&mut self, block: Block) {
        let data = &self.blocks[block];
        assert!(
            !data.predecessors.is_empty(),
            "bind of {}, which has no predecessors",
            block
        );

        if self.is_loop_head(block) {
            let pre_control = self.pre_control(block);
            let forward_depend = self.depend_of(data.predecessors[0]);
            // The back-edge depend is filled in by `loop_end`.
            let loop_depend = self.circuit.selector(pre_control, VariableType::void(), 2);
            self.circuit.new_in(loop_depend, 1, forward_depend);
            let data = &mut self.blocks[block];
            data.loop_depend = Some(loop_depend);
            data.depend = Some(loop_depend);
        }

        self.blocks[block].bound = true;
        if self.needs_seal(block) {
            self.seal(block);
            self.merge_all_control(block);
            self.merge_all_depend(block);
        }
    }

    /// Return `value` from the stub.
    pub fn ret(&mut self, block: Block, value: Gate) -> Gate {
        let control = self.open_control(block);
        let depend = self.depend_of(block);
        let ret = self.circuit.return_value(control, depend, value);
        self.terminate(block, ret);
        ret
    }

    pub fn ret_void(&mut self, block: Block) -> Gate {
        let control = self.open_control(block);
        let depend = self.depend_of(block);
        let ret = self.circuit.return_void(control, depend);
        self.terminate(block, ret);
        ret
    }

    /// Load from `address`, ordered after the block's previous side effects.
    pub fn load(&mut self, block: Block, ty: VariableType, address: Gate) -> Gate {
        let control = self.open_control(block);
        let depend = self.depend_of(block);
        let ty = VariableType::new(self.config.resolve(ty.machine_type()), ty.gate_type());
        let load = self.circuit.load(control, depend, ty, address);
        self.blocks[block].depend = Some(load);
        load
    }

    pub fn store(&mut self, block: Block, address: Gate, value: Gate) -> Gate {
        let control = self.open_control(block);
        let depend = self.depend_of(block);
        let store = self.circuit.store(control, depend, address, value);
        self.blocks[block].depend = Some(store);
        store
    }

    /// Suspend `outer` and open a nested region continuing from it.
    ///
    /// The returned block inherits `outer`'s control and depend tokens and
    /// sees its variables. Close the region with [`SSABuilder::pop_region`].
    pub fn push_region(&mut self, outer: Block) -> Block {
        let control = self.open_control(outer);
        let depend = self.depend_of(outer);
        self.blocks[outer].terminated = true;
        self.regions.push(outer);
        let inner = self
            .blocks
            .push(BlockData::sealed(vec![outer], control, depend));
        debug!(%outer, %inner, depth = self.regions.len(), "pushed region");
        inner
    }

    /// Close the innermost region at `exit` and return the block that
    /// continues after it.
    pub fn pop_region(&mut self, exit: Block) -> Block {
        let outer = match self.regions.pop() {
            Some(outer) => outer,
            None => panic!("pop_region at {} without an open region", exit),
        };
        assert_ne!(exit, outer, "region exit {} is the suspended block", exit);
        let control = self.open_control(exit);
        let depend = self.depend_of(exit);
        self.blocks[exit].terminated = true;
        let next = self
            .blocks
            .push(BlockData::sealed(vec![exit], control, depend));
        debug!(%outer, %exit, %next, depth = self.regions.len(), "popped region");
        next
    }

    /// Control token of a block that can still emit gates.
    fn open_control(&self, block: Block) -> Gate {
        let data = &self.blocks[block];
        assert!(!data.terminated, "{} is already terminated", block);
        assert!(data.bound, "{} is not bound", block);
        match data.control {
            Some(control) => control,
            None => panic!("{} has no control token", block),
        }
    }

    fn depend_of(&self, block: Block) -> Gate {
        match self.blocks[block].depend {
            Some(depend) => depend,
            None => panic!("{} has no depend token", block),
        }
    }

    fn terminate(&mut self, block: Block, control: Gate) {
        debug_assert!(self.circuit.opcode(control).is_terminator());
        let data = &mut self.blocks[block];
        data.control = Some(control);
        data.terminated = true;
    }

    /// Add `from` as the next predecessor of `to`, arriving over `control`.
    fn link(&mut self, from: Block, to: Block, control: Gate) {
        let loop_head = self.is_loop_head(to);
        let data = &mut self.blocks[to];
        assert!(
            !data.sealed,
            "cannot add predecessor {} to {}, which is already sealed",
            from, to
        );
        if loop_head {
            assert!(
                data.predecessors.len() < 2,
                "loop header {} cannot take a third predecessor {}",
                to,
                from
            );
        }
        data.predecessors.push(from);
        if data.pre_control.is_none() {
            data.pre_control = Some(control);
            data.control = Some(control);
        } else {
            data.other_pre_controls.push(control);
        }
    }

    /// A block can be sealed once it has as many predecessors as its
    /// incoming control gate has edges.
    fn needs_seal(&self, block: Block) -> bool {
        let pre_control = self.pre_control(block);
        let state_count = self
            .circuit
            .opcode(pre_control)
            .state_count(self.circuit.ins(pre_control).len());
        self.blocks[block].predecessors.len() >= state_count
    }

    fn merge_all_control(&mut self, block: Block) {
        let data = &self.blocks[block];
        if data.predecessors.len() < 2 {
            return;
        }
        let pre_control = self.pre_control(block);

        if self.is_loop_head(block) {
            assert_eq!(data.predecessors.len(), 2);
            assert_eq!(data.other_pre_controls.len(), 1);
            let back = data.other_pre_controls[0];
            self.circuit.new_in(pre_control, 1, back);
            return;
        }

        let mut controls = Vec::with_capacity(data.predecessors.len());
        controls.push(pre_control);
        controls.extend(data.other_pre_controls.iter().copied());
        let merge = self.circuit.merge(&controls);
        debug!(%block, %merge, edges = controls.len(), "merged control");

        let data = &mut self.blocks[block];
        data.pre_control = Some(merge);
        data.control = Some(merge);
    }

    fn merge_all_depend(&mut self, block: Block) {
        let pre_control = self.pre_control(block);
        let relay = if self.is_control_case(block) {
            let depend_entry = self.circuit.depend_entry();
            Some(self.circuit.depend_relay(pre_control, depend_entry))
        } else {
            None
        };

        let preds = self.blocks[block].predecessors.clone();
        if preds.len() < 2 {
            let mut depend = self.depend_of(preds[0]);
            if let Some(relay) = relay {
                depend = self.circuit.depend_and(depend, relay);
            }
            self.blocks[block].depend = Some(depend);
            return;
        }

        if self.is_loop_head(block) {
            let loop_depend = match self.blocks[block].loop_depend {
                Some(loop_depend) => loop_depend,
                None => panic!("loop header {} has no depend selector", block),
            };
            let back_depend = self.depend_of(preds[1]);
            self.circuit.new_in(loop_depend, 2, back_depend);
            return;
        }

        let depends: Vec<Gate> = preds.iter().map(|p| self.depend_of(*p)).collect();
        let selector = self.circuit.depend_selector(pre_control, &depends);
        debug_assert_eq!(self.circuit.opcode(pre_control), Opcode::Merge);
        self.blocks[block].depend = Some(selector);
    }
}

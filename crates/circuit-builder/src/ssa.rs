//! On-the-fly SSA construction.
//!
//! Variables are resolved to gates with local value numbering per block and
//! a lazy walk over predecessors, creating selectors only where control
//! flow actually merges. Loop headers stay unsealed until their back edge is
//! known; reads there produce incomplete selectors that are completed when
//! the header is sealed. Selectors that turn out to merge a single value are
//! removed again, and the removal is propagated to selectors reading them.

use std::collections::BTreeMap;

use circuit_ir::{
    CompilationConfig, Circuit, Gate, GateBuilder, GateBuilderBase, PrimaryMap, VariableType,
};
use tracing::{debug, trace};

use crate::{
    block::{Block, BlockData},
    error::{BuildError, BuildResult},
    variable::{Variable, VariableData},
};

/// Builder for one stub body.
///
/// Owns the circuit under construction, every block and variable, and the
/// bookkeeping that ties selectors back to the block that created them.
/// Control operators live in [`crate::control`].
#[derive(Debug)]
pub struct SSABuilder {
    pub(crate) circuit: Circuit,
    pub(crate) config: CompilationConfig,
    pub(crate) blocks: PrimaryMap<Block, BlockData>,
    variables: PrimaryMap<Variable, VariableData>,
    /// Block whose predecessors supply each variable selector's operands
    phi_owner: BTreeMap<Gate, Block>,
    /// Removed selector -> gate that replaced it
    substitutes: BTreeMap<Gate, Gate>,
    undefined: BTreeMap<VariableType, Gate>,
    arguments: Vec<Gate>,
    /// Blocks suspended by `push_region`, innermost last
    pub(crate) regions: Vec<Block>,
    entry: Block,
}

impl SSABuilder {
    /// Create a builder for a stub taking `params`, targeting x86-64.
    pub fn new(params: &[VariableType]) -> Self {
        Self::with_config(CompilationConfig::default(), params)
    }

    pub fn with_config(config: CompilationConfig, params: &[VariableType]) -> Self {
        let mut circuit = Circuit::new();
        let state_entry = circuit.state_entry();
        let depend_entry = circuit.depend_entry();
        let arguments = params
            .iter()
            .enumerate()
            .map(|(i, ty)| circuit.argument(i, resolve_type(&config, *ty)))
            .collect();

        let mut blocks = PrimaryMap::new();
        let entry = blocks.push(BlockData::sealed(Vec::new(), state_entry, depend_entry));

        Self {
            circuit,
            config,
            blocks,
            variables: PrimaryMap::new(),
            phi_owner: BTreeMap::new(),
            substitutes: BTreeMap::new(),
            undefined: BTreeMap::new(),
            arguments,
            regions: Vec::new(),
            entry,
        }
    }

    /// The entry block. It is bound and sealed from the start.
    pub fn entry_block(&self) -> Block {
        self.entry
    }

    /// Create a block with no predecessors. Link edges into it, then bind it.
    pub fn new_block(&mut self) -> Block {
        self.blocks.push(BlockData::default())
    }

    pub fn argument(&self, index: usize) -> Gate {
        self.arguments[index]
    }

    pub fn config(&self) -> &CompilationConfig {
        &self.config
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn predecessors(&self, block: Block) -> &[Block] {
        &self.blocks[block].predecessors
    }

    pub fn is_sealed(&self, block: Block) -> bool {
        self.blocks[block].sealed
    }

    /// Current control token of `block`.
    pub fn control(&self, block: Block) -> Option<Gate> {
        self.blocks[block].control
    }

    /// Current depend token of `block`.
    pub fn depend(&self, block: Block) -> Option<Gate> {
        self.blocks[block].depend
    }

    pub fn variable_type(&self, var: Variable) -> VariableType {
        self.variables[var].ty
    }

    /// Declare a variable. `Arch` widths are resolved for the target.
    pub fn declare_variable(&mut self, ty: VariableType) -> Variable {
        let ty = resolve_type(&self.config, ty);
        self.variables.push(VariableData { ty })
    }

    /// Declare a variable and give it an initial value in `block`.
    pub fn define_variable(&mut self, block: Block, ty: VariableType, initial: Gate) -> Variable {
        let var = self.declare_variable(ty);
        self.write_variable(block, var, initial);
        var
    }

    /// Record `value` as the current value of `var` in `block`.
    pub fn write_variable(&mut self, block: Block, var: Variable, value: Gate) {
        let data = &mut self.blocks[block];
        assert!(
            !data.terminated,
            "write of {} into {}, which is already terminated",
            var, block
        );
        data.local_defs.insert(var, value);
    }

    /// Current value of `var` in `block`.
    ///
    /// Returns the local definition if there is one. Otherwise the value is
    /// looked up through the predecessors, creating a selector where they
    /// disagree, and memoized in `block`.
    pub fn read_variable(&mut self, block: Block, var: Variable) -> Gate {
        if let Some(def) = self.blocks[block].local_defs.get(&var).copied() {
            let live = self.resolve(def);
            if live != def {
                self.blocks[block].local_defs.insert(var, live);
            }
            return live;
        }
        self.read_variable_recursive(block, var)
    }

    fn read_variable_recursive(&mut self, block: Block, var: Variable) -> Gate {
        let ty = self.variables[var].ty;
        let data = &self.blocks[block];
        let num_preds = data.predecessors.len();

        let value = if !data.sealed {
            assert!(
                self.is_loop_head(block),
                "read of {} in unsealed {}, which is not a loop header",
                var,
                block
            );
            // One slot per predecessor plus the back edge still to come.
            let phi = self.new_phi(block, ty, num_preds + 1);
            self.blocks[block].incomplete_phis.insert(var, phi);
            phi
        } else if num_preds == 1 {
            let pred = data.predecessors[0];
            self.read_variable(pred, var)
        } else {
            let phi = self.new_phi(block, ty, num_preds);
            // Cache before filling operands so cycles through this block
            // terminate on the phi itself.
            self.blocks[block].local_defs.insert(var, phi);
            self.add_phi_operands(var, phi)
        };

        self.blocks[block].local_defs.insert(var, value);
        value
    }

    fn new_phi(&mut self, block: Block, ty: VariableType, arity: usize) -> Gate {
        let control = self.pre_control(block);
        let phi = self.circuit.selector(control, ty, arity);
        self.phi_owner.insert(phi, block);
        trace!(%phi, %block, arity, "created phi");
        phi
    }

    /// Fill every value slot of `phi` from the owner's predecessors, in
    /// predecessor order, then try to remove it.
    fn add_phi_operands(&mut self, var: Variable, phi: Gate) -> Gate {
        let owner = self.phi_owner[&phi];
        let preds = self.blocks[owner].predecessors.clone();
        for (i, pred) in preds.into_iter().enumerate() {
            let value = self.read_variable(pred, var);
            self.circuit.new_in(phi, i + 1, value);
        }
        self.try_remove_trivial_phi(phi)
    }

    /// Remove `phi` if it merges at most one distinct value besides itself,
    /// then revisit every selector that read it.
    ///
    /// Returns the gate now standing for `phi`: `phi` itself if it was kept.
    pub(crate) fn try_remove_trivial_phi(&mut self, phi: Gate) -> Gate {
        let mut worklist = vec![phi];

        while let Some(candidate) = worklist.pop() {
            let Some(data) = self.circuit.gate_data(candidate) else {
                continue;
            };
            // Skip removed gates and selectors still being filled in.
            if data.is_dead()
                || !self.phi_owner.contains_key(&candidate)
                || data.has_empty_slot()
            {
                continue;
            }
            let ins = data.ins();

            let mut same = None;
            let mut trivial = true;
            for op in ins[1..].iter().flatten().copied() {
                if Some(op) == same || op == candidate {
                    continue;
                }
                if same.is_some() {
                    trivial = false;
                    break;
                }
                same = Some(op);
            }
            if !trivial {
                continue;
            }

            let same = match same {
                Some(same) => same,
                // Unreachable, or read in the entry block before any write.
                None => {
                    let ty = VariableType::new(
                        self.circuit.machine_type(candidate),
                        self.circuit.gate_type(candidate),
                    );
                    self.undefined_constant(ty)
                }
            };

            let users: Vec<Gate> = self
                .circuit
                .uses(candidate)
                .iter()
                .map(|u| u.user)
                .filter(|user| *user != candidate)
                .collect();
            self.circuit.replace_uses(candidate, same);
            self.circuit.delete_gate(candidate);
            self.phi_owner.remove(&candidate);
            self.substitutes.insert(candidate, same);
            debug!(phi = %candidate, %same, "removed trivial phi");

            worklist.extend(users.into_iter().filter(|u| self.phi_owner.contains_key(u)));
        }

        self.resolve(phi)
    }

    /// Follow the substitution chain from `gate` to a live gate.
    pub(crate) fn resolve(&self, mut gate: Gate) -> Gate {
        while !self.circuit.is_live(gate) {
            match self.substitutes.get(&gate) {
                Some(next) => gate = *next,
                None => panic!("{} was deleted without a substitute", gate),
            }
        }
        gate
    }

    /// The `Undefined` gate for `ty`, created once per type.
    pub fn undefined_constant(&mut self, ty: VariableType) -> Gate {
        if let Some(gate) = self.undefined.get(&ty) {
            return *gate;
        }
        let gate = self.circuit.undefined(ty);
        self.undefined.insert(ty, gate);
        gate
    }

    /// Declare that `block` has all of its predecessors and complete the
    /// selectors read there while it was open.
    pub fn seal(&mut self, block: Block) {
        assert!(!self.blocks[block].sealed, "{} is already sealed", block);
        let num_preds = self.blocks[block].predecessors.len();
        debug!(%block, num_preds, pending = self.blocks[block].incomplete_phis.len(), "sealing");

        while let Some((var, phi)) = self.blocks[block].incomplete_phis.pop_first() {
            let arity = self.circuit.ins(phi).len() - 1;
            assert_eq!(
                arity, num_preds,
                "incomplete phi {} for {} in {} has {} slots but the block has {} predecessors",
                phi, var, block, arity, num_preds
            );
            self.add_phi_operands(var, phi);
        }
        self.blocks[block].sealed = true;
    }

    pub(crate) fn pre_control(&self, block: Block) -> Gate {
        match self.blocks[block].pre_control {
            Some(control) => control,
            None => panic!("{} has no incoming control", block),
        }
    }

    pub(crate) fn is_loop_head(&self, block: Block) -> bool {
        self.blocks[block]
            .pre_control
            .is_some_and(|c| self.circuit.opcode(c).is_loop_head())
    }

    pub(crate) fn is_control_case(&self, block: Block) -> bool {
        self.blocks[block]
            .pre_control
            .is_some_and(|c| self.circuit.opcode(c).is_control_case())
    }

    /// Hand over the finished circuit.
    ///
    /// Fails if a region is still open or a reachable block was never
    /// sealed. With the `verify-on-finish` feature the circuit is verified
    /// as well.
    pub fn finish(self) -> BuildResult<Circuit> {
        if !self.regions.is_empty() {
            return Err(BuildError::OpenRegion {
                depth: self.regions.len(),
            });
        }
        for (block, data) in self.blocks.iter() {
            if !data.sealed && !data.predecessors.is_empty() {
                return Err(BuildError::UnsealedBlock {
                    block,
                    pending: data.incomplete_phis.len(),
                });
            }
        }

        #[cfg(feature = "verify-on-finish")]
        circuit_ir::verify(&self.circuit).map_err(BuildError::Verification)?;

        debug!(gates = self.circuit.gates().count(), "finished stub");
        Ok(self.circuit)
    }
}

impl GateBuilderBase for SSABuilder {
    fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }
}

fn resolve_type(config: &CompilationConfig, ty: VariableType) -> VariableType {
    VariableType::new(config.resolve(ty.machine_type()), ty.gate_type())
}

//! Tests for on-the-fly SSA construction and the control operators.

use circuit_ir::{Circuit, Gate, GateBuilder, MachineType, Opcode, VariableType};

use crate::{BuildError, SSABuilder};

fn gates_with(circuit: &Circuit, opcode: Opcode) -> Vec<Gate> {
    circuit
        .gates()
        .filter(|g| circuit.opcode(*g) == opcode)
        .collect()
}

fn values(circuit: &Circuit, selector: Gate) -> Vec<Gate> {
    circuit.ins(selector)[1..].iter().flatten().copied().collect()
}

#[test]
fn test_single_predecessor_creates_no_phi() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let one = ssa.int32(1);
    let x = ssa.define_variable(entry, VariableType::int32(), one);

    let next = ssa.new_block();
    ssa.jump(entry, next);
    ssa.bind(next);

    assert_eq!(ssa.read_variable(next, x), one);
    assert!(gates_with(ssa.circuit(), Opcode::ValueSelector).is_empty());
}

#[test]
fn test_diamond_merge() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let one = ssa.int32(1);
    let x = ssa.define_variable(entry, VariableType::int32(), one);

    let then_block = ssa.new_block();
    let else_block = ssa.new_block();
    let merge_block = ssa.new_block();
    ssa.branch(entry, cond, then_block, else_block);

    ssa.bind(then_block);
    let two = ssa.int32(2);
    ssa.write_variable(then_block, x, two);
    let then_jump = ssa.jump(then_block, merge_block);

    ssa.bind(else_block);
    let three = ssa.int32(3);
    ssa.write_variable(else_block, x, three);
    let else_jump = ssa.jump(else_block, merge_block);

    ssa.bind(merge_block);
    let phi = ssa.read_variable(merge_block, x);

    let circuit = ssa.circuit();
    assert_eq!(circuit.opcode(phi), Opcode::ValueSelector);
    assert_eq!(values(circuit, phi), vec![two, three]);

    let merge = circuit.in_gate(phi, 0).unwrap();
    assert_eq!(circuit.opcode(merge), Opcode::Merge);
    assert_eq!(circuit.ins(merge), &[Some(then_jump), Some(else_jump)]);
    assert_eq!(ssa.control(merge_block), Some(merge));

    ssa.finish().unwrap();
}

#[test]
fn test_read_through_single_entry_chain_after_diamond() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let zero = ssa.int32(0);
    let x = ssa.define_variable(entry, VariableType::int32(), zero);

    let then_block = ssa.new_block();
    let else_block = ssa.new_block();
    let merge_block = ssa.new_block();
    ssa.branch(entry, cond, then_block, else_block);

    ssa.bind(then_block);
    let one = ssa.int32(1);
    ssa.write_variable(then_block, x, one);
    ssa.jump(then_block, merge_block);

    ssa.bind(else_block);
    let two = ssa.int32(2);
    ssa.write_variable(else_block, x, two);
    ssa.jump(else_block, merge_block);
    ssa.bind(merge_block);
    let merge = ssa.control(merge_block);

    let mut last = merge_block;
    for _ in 0..3 {
        let next = ssa.new_block();
        ssa.jump(last, next);
        ssa.bind(next);
        last = next;
    }

    let value = ssa.read_variable(last, x);
    let circuit = ssa.circuit();
    assert_eq!(gates_with(circuit, Opcode::ValueSelector), vec![value]);
    assert_eq!(values(circuit, value), vec![one, two]);
    assert_eq!(circuit.in_gate(value, 0), merge);
    assert_eq!(ssa.read_variable(merge_block, x), value);

    ssa.ret(last, value);
    ssa.finish().unwrap();
}

#[test]
fn test_phi_operands_follow_predecessor_order() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let x = ssa.declare_variable(VariableType::int64());

    let left = ssa.new_block();
    let right = ssa.new_block();
    let merge_block = ssa.new_block();
    ssa.branch(entry, cond, left, right);

    // Right reaches the merge first.
    ssa.bind(right);
    let r = ssa.int64(20);
    ssa.write_variable(right, x, r);
    ssa.jump(right, merge_block);

    ssa.bind(left);
    let l = ssa.int64(10);
    ssa.write_variable(left, x, l);
    ssa.jump(left, merge_block);

    ssa.bind(merge_block);
    assert_eq!(ssa.predecessors(merge_block), &[right, left]);
    let phi = ssa.read_variable(merge_block, x);
    assert_eq!(values(ssa.circuit(), phi), vec![r, l]);
}

#[test]
fn test_read_is_idempotent() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let x = ssa.declare_variable(VariableType::int32());

    let a = ssa.new_block();
    let b = ssa.new_block();
    let join = ssa.new_block();
    ssa.branch(entry, cond, a, b);
    ssa.bind(a);
    let va = ssa.int32(1);
    ssa.write_variable(a, x, va);
    ssa.jump(a, join);
    ssa.bind(b);
    let vb = ssa.int32(2);
    ssa.write_variable(b, x, vb);
    ssa.jump(b, join);
    ssa.bind(join);

    let first = ssa.read_variable(join, x);
    let gate_count = ssa.circuit().gate_count();
    let second = ssa.read_variable(join, x);

    assert_eq!(first, second);
    assert_eq!(ssa.circuit().gate_count(), gate_count);
}

#[test]
fn test_single_write_passes_through_diamond() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let seven = ssa.int32(7);
    let x = ssa.define_variable(entry, VariableType::int32(), seven);

    let a = ssa.new_block();
    let b = ssa.new_block();
    let join = ssa.new_block();
    ssa.branch(entry, cond, a, b);
    ssa.bind(a);
    ssa.jump(a, join);
    ssa.bind(b);
    ssa.jump(b, join);
    ssa.bind(join);

    assert_eq!(ssa.read_variable(join, x), seven);
    assert!(gates_with(ssa.circuit(), Opcode::ValueSelector).is_empty());
    ssa.finish().unwrap();
}

#[test]
fn test_loop_carried_variable() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let zero = ssa.int32(0);
    let i = ssa.define_variable(entry, VariableType::int32(), zero);

    let header = ssa.new_block();
    let body = ssa.new_block();
    let exit = ssa.new_block();
    let forward = ssa.jump(entry, header);
    let loop_begin = ssa.loop_begin(header);
    assert!(!ssa.is_sealed(header));

    let phi = ssa.read_variable(header, i);
    assert_eq!(ssa.circuit().ins(phi), &[Some(loop_begin), None, None]);
    let limit = ssa.int32(10);
    let cond = ssa.less_than(phi, limit);
    ssa.branch(header, cond, body, exit);

    ssa.bind(body);
    let current = ssa.read_variable(body, i);
    assert_eq!(current, phi);
    let one = ssa.int32(1);
    let next = ssa.add(current, one);
    ssa.write_variable(body, i, next);
    let back = ssa.loop_end(header, body);

    ssa.bind(exit);
    assert_eq!(ssa.read_variable(exit, i), phi);

    let circuit = ssa.circuit();
    assert!(ssa.is_sealed(header));
    assert_eq!(values(circuit, phi), vec![zero, next]);
    assert_eq!(circuit.ins(loop_begin), &[Some(forward), Some(back)]);

    let circuit = ssa.finish().unwrap();
    assert_eq!(gates_with(&circuit, Opcode::ValueSelector), vec![phi]);
}

#[test]
fn test_unmodified_loop_variable_removes_phi() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let n = ssa.int32(5);
    let x = ssa.define_variable(entry, VariableType::int32(), n);

    let header = ssa.new_block();
    let body = ssa.new_block();
    let exit = ssa.new_block();
    ssa.jump(entry, header);
    ssa.loop_begin(header);

    let phi = ssa.read_variable(header, x);
    let limit = ssa.int32(3);
    let cond = ssa.greater_than(phi, limit);
    ssa.branch(header, cond, body, exit);
    ssa.bind(body);
    ssa.loop_end(header, body);
    ssa.bind(exit);

    assert!(!ssa.circuit().is_live(phi));
    assert_eq!(ssa.read_variable(exit, x), n);
    assert_eq!(ssa.read_variable(header, x), n);
    assert_eq!(ssa.circuit().in_gate(cond, 0), Some(n));
    ssa.finish().unwrap();
}

#[test]
fn test_trivial_removal_cascades_to_users() {
    // The merge phi is built while the loop phi is still incomplete and
    // only becomes trivial once the loop phi is removed.
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let c = ssa.int32(42);
    let x = ssa.define_variable(entry, VariableType::int32(), c);

    let header = ssa.new_block();
    let body = ssa.new_block();
    let exit = ssa.new_block();
    let then_block = ssa.new_block();
    let else_block = ssa.new_block();
    let join = ssa.new_block();

    ssa.jump(entry, header);
    ssa.loop_begin(header);
    ssa.branch(header, cond, body, exit);

    ssa.bind(exit);
    ssa.branch(exit, cond, then_block, else_block);
    ssa.bind(then_block);
    ssa.write_variable(then_block, x, c);
    ssa.jump(then_block, join);
    ssa.bind(else_block);
    ssa.jump(else_block, join);
    ssa.bind(join);

    let merged = ssa.read_variable(join, x);
    let loop_phi = ssa.circuit().in_gate(merged, 2).unwrap();
    assert_eq!(ssa.circuit().opcode(merged), Opcode::ValueSelector);
    assert_eq!(ssa.circuit().opcode(loop_phi), Opcode::ValueSelector);
    let user = ssa.add(merged, c);

    ssa.bind(body);
    ssa.loop_end(header, body);

    assert!(!ssa.circuit().is_live(loop_phi));
    assert!(!ssa.circuit().is_live(merged));
    assert_eq!(ssa.read_variable(join, x), c);
    assert_eq!(ssa.circuit().ins(user), &[Some(c), Some(c)]);
    assert!(gates_with(ssa.circuit(), Opcode::ValueSelector).is_empty());
    ssa.finish().unwrap();
}

#[test]
fn test_nested_loops_resolve_through_substitutes() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let c = ssa.int32(1);
    let x = ssa.define_variable(entry, VariableType::int32(), c);

    let outer = ssa.new_block();
    let inner = ssa.new_block();
    let inner_body = ssa.new_block();
    let inner_exit = ssa.new_block();
    let outer_exit = ssa.new_block();

    ssa.jump(entry, outer);
    ssa.loop_begin(outer);
    ssa.jump(outer, inner);
    ssa.loop_begin(inner);

    let inner_phi = ssa.read_variable(inner, x);
    let doubled = ssa.add(inner_phi, inner_phi);
    ssa.branch(inner, cond, inner_body, inner_exit);
    ssa.bind(inner_body);
    ssa.loop_end(inner, inner_body);

    // The inner phi collapsed onto the still incomplete outer phi.
    assert!(!ssa.circuit().is_live(inner_phi));
    let outer_phi = ssa.circuit().in_gate(doubled, 0).unwrap();
    assert_eq!(ssa.circuit().opcode(outer_phi), Opcode::ValueSelector);
    assert_eq!(ssa.circuit().in_gate(outer_phi, 2), None);

    ssa.bind(inner_exit);
    ssa.branch(inner_exit, cond, outer_exit, outer_exit);
    ssa.bind(outer_exit);
    let after = ssa.new_block();
    ssa.jump(outer_exit, after);
    ssa.bind(after);
    assert_eq!(ssa.read_variable(after, x), outer_phi);

    let latch = ssa.new_block();
    let back_edge = ssa.new_block();
    ssa.branch(after, cond, latch, back_edge);
    ssa.bind(latch);
    ssa.ret_void(latch);
    ssa.bind(back_edge);
    ssa.loop_end(outer, back_edge);

    assert!(!ssa.circuit().is_live(outer_phi));
    assert_eq!(ssa.circuit().ins(doubled), &[Some(c), Some(c)]);
    assert_eq!(ssa.read_variable(inner, x), c);
    ssa.finish().unwrap();
}

#[test]
fn test_diamond_feeding_loop_header() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let x = ssa.declare_variable(VariableType::int32());

    let a = ssa.new_block();
    let b = ssa.new_block();
    let pre = ssa.new_block();
    let header = ssa.new_block();
    let body = ssa.new_block();
    let exit = ssa.new_block();

    ssa.branch(entry, cond, a, b);
    ssa.bind(a);
    let one = ssa.int32(1);
    ssa.write_variable(a, x, one);
    ssa.jump(a, pre);
    ssa.bind(b);
    let two = ssa.int32(2);
    ssa.write_variable(b, x, two);
    ssa.jump(b, pre);
    ssa.bind(pre);
    ssa.jump(pre, header);

    ssa.loop_begin(header);
    let loop_phi = ssa.read_variable(header, x);
    ssa.branch(header, cond, body, exit);
    ssa.bind(body);
    let v = ssa.read_variable(body, x);
    let inc = ssa.add(v, one);
    ssa.write_variable(body, x, inc);
    ssa.loop_end(header, body);
    ssa.bind(exit);

    let circuit = ssa.circuit();
    let entry_phi = circuit.in_gate(loop_phi, 1).unwrap();
    assert_eq!(circuit.opcode(entry_phi), Opcode::ValueSelector);
    assert_eq!(values(circuit, entry_phi), vec![one, two]);
    assert_eq!(values(circuit, loop_phi), vec![entry_phi, inc]);
    ssa.finish().unwrap();
}

#[test]
fn test_switch_merge() {
    let mut ssa = SSABuilder::new(&[VariableType::int32()]);
    let entry = ssa.entry_block();
    let index = ssa.argument(0);
    let x = ssa.declare_variable(VariableType::int32());

    let cases: Vec<_> = (0..3).map(|_| ssa.new_block()).collect();
    let default = ssa.new_block();
    let join = ssa.new_block();
    let switch = ssa.switch(
        entry,
        index,
        default,
        &[(1, cases[0]), (5, cases[1]), (-2, cases[2])],
    );
    assert_eq!(ssa.circuit().bitfield(switch), 3);

    let mut expected = Vec::new();
    for (n, block) in cases.iter().chain([&default]).enumerate() {
        ssa.bind(*block);
        let value = ssa.int32(n as i32 * 10);
        ssa.write_variable(*block, x, value);
        ssa.jump(*block, join);
        expected.push(value);
    }
    ssa.bind(join);

    let phi = ssa.read_variable(join, x);
    let circuit = ssa.circuit();
    assert_eq!(values(circuit, phi), expected);

    let case = ssa.control(cases[1]).unwrap();
    let case = circuit.in_gate(case, 0).unwrap();
    assert_eq!(circuit.opcode(case), Opcode::SwitchCase);
    assert_eq!(circuit.bitfield(case) as i64, 5);
    assert_eq!(gates_with(circuit, Opcode::DefaultCase).len(), 1);

    let merge_depend = ssa.depend(join).unwrap();
    assert_eq!(circuit.opcode(merge_depend), Opcode::DependSelector);
    assert_eq!(circuit.ins(merge_depend).len(), 5);
    ssa.finish().unwrap();
}

#[test]
fn test_control_case_relays_depend() {
    let mut ssa = SSABuilder::new(&[VariableType::bool(), VariableType::pointer()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let address = ssa.argument(1);

    let load = ssa.load(entry, VariableType::int32(), address);
    assert_eq!(ssa.depend(entry), Some(load));
    assert_eq!(ssa.circuit().machine_type(load), MachineType::I32);

    let t = ssa.new_block();
    let f = ssa.new_block();
    ssa.branch(entry, cond, t, f);
    ssa.bind(t);

    let circuit = ssa.circuit();
    let depend = ssa.depend(t).unwrap();
    assert_eq!(circuit.opcode(depend), Opcode::DependAnd);
    assert_eq!(circuit.in_gate(depend, 0), Some(load));
    let relay = circuit.in_gate(depend, 1).unwrap();
    assert_eq!(circuit.opcode(relay), Opcode::DependRelay);
    assert_eq!(circuit.opcode(circuit.in_gate(relay, 0).unwrap()), Opcode::IfTrue);

    let zero = ssa.int32(0);
    let store = ssa.store(t, address, zero);
    assert_eq!(ssa.circuit().in_gate(store, 1), Some(depend));
    ssa.ret_void(t);
    ssa.bind(f);
    ssa.ret(f, load);
    ssa.finish().unwrap();
}

#[test]
fn test_loop_depend_selector() {
    let mut ssa = SSABuilder::new(&[VariableType::pointer()]);
    let entry = ssa.entry_block();
    let address = ssa.argument(0);
    let header = ssa.new_block();
    let body = ssa.new_block();
    let exit = ssa.new_block();

    ssa.jump(entry, header);
    let loop_begin = ssa.loop_begin(header);
    let loop_depend = ssa.depend(header).unwrap();
    let depend_entry = ssa.circuit().depend_entry();
    assert_eq!(
        ssa.circuit().ins(loop_depend),
        &[Some(loop_begin), Some(depend_entry), None]
    );

    let flag = ssa.load(header, VariableType::bool(), address);
    ssa.branch(header, flag, body, exit);
    ssa.bind(body);
    let one = ssa.int64(1);
    let store = ssa.store(body, address, one);
    ssa.loop_end(header, body);

    assert_eq!(ssa.circuit().in_gate(loop_depend, 2), Some(store));
    ssa.bind(exit);
    ssa.ret_void(exit);
    ssa.finish().unwrap();
}

#[test]
fn test_unreachable_read_is_undefined() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let x = ssa.declare_variable(VariableType::int32());
    let y = ssa.declare_variable(VariableType::int32());
    let z = ssa.declare_variable(VariableType::js_any());

    let undef = ssa.read_variable(entry, x);
    let circuit = ssa.circuit();
    assert_eq!(circuit.opcode(undef), Opcode::Undefined);
    assert_eq!(circuit.machine_type(undef), MachineType::I32);

    assert_eq!(ssa.read_variable(entry, y), undef);
    let other = ssa.read_variable(entry, z);
    assert_ne!(other, undef);
    assert_eq!(ssa.circuit().machine_type(other), MachineType::I64);
    assert!(gates_with(ssa.circuit(), Opcode::ValueSelector).is_empty());
}

#[test]
fn test_loop_over_unwritten_variable_is_undefined() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let x = ssa.declare_variable(VariableType::int32());

    let header = ssa.new_block();
    let body = ssa.new_block();
    let exit = ssa.new_block();
    ssa.jump(entry, header);
    ssa.loop_begin(header);
    let incomplete = ssa.read_variable(header, x);
    assert_eq!(ssa.circuit().opcode(incomplete), Opcode::ValueSelector);
    ssa.branch(header, cond, body, exit);

    ssa.bind(body);
    ssa.loop_end(header, body);
    assert!(!ssa.circuit().is_live(incomplete));

    ssa.bind(exit);
    let value = ssa.read_variable(exit, x);
    assert_eq!(ssa.circuit().opcode(value), Opcode::Undefined);
    assert_eq!(ssa.circuit().machine_type(value), MachineType::I32);
    assert_eq!(ssa.read_variable(header, x), value);
    assert!(gates_with(ssa.circuit(), Opcode::ValueSelector).is_empty());

    ssa.ret(exit, value);
    ssa.finish().unwrap();
}

#[test]
fn test_regions_inherit_and_return_state() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let one = ssa.int32(1);
    let x = ssa.define_variable(entry, VariableType::int32(), one);

    let inner = ssa.push_region(entry);
    assert_eq!(ssa.control(inner), ssa.control(entry));
    assert_eq!(ssa.read_variable(inner, x), one);
    let two = ssa.int32(2);
    ssa.write_variable(inner, x, two);

    let next = ssa.pop_region(inner);
    assert_eq!(ssa.read_variable(next, x), two);
    assert_eq!(ssa.depend(next), ssa.depend(entry));
    ssa.ret(next, two);
    ssa.finish().unwrap();
}

#[test]
fn test_arch_type_follows_config() {
    let config = circuit_ir::CompilationConfig::new("arm-unknown-linux-gnu").unwrap();
    let mut ssa = SSABuilder::with_config(config, &[VariableType::pointer()]);
    assert_eq!(ssa.circuit().machine_type(ssa.argument(0)), MachineType::I32);
    assert_eq!(ssa.circuit().bitfield(ssa.argument(0)), 0);

    let p = ssa.declare_variable(VariableType::pointer());
    assert_eq!(ssa.variable_type(p).machine_type(), MachineType::I32);
}

#[test]
fn test_finish_rejects_open_loop() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let x = ssa.declare_variable(VariableType::int32());
    let header = ssa.new_block();
    ssa.jump(entry, header);
    ssa.loop_begin(header);
    ssa.read_variable(header, x);

    assert_eq!(
        ssa.finish().unwrap_err(),
        BuildError::UnsealedBlock {
            block: header,
            pending: 1
        }
    );
}

#[test]
fn test_finish_rejects_open_region() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    ssa.push_region(entry);
    assert_eq!(ssa.finish().unwrap_err(), BuildError::OpenRegion { depth: 1 });
}

#[test]
#[should_panic(expected = "not a loop header")]
fn test_read_in_unbound_block_panics() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let x = ssa.declare_variable(VariableType::int32());
    let next = ssa.new_block();
    ssa.jump(entry, next);
    ssa.read_variable(next, x);
}

#[test]
#[should_panic(expected = "already sealed")]
fn test_link_into_sealed_block_panics() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let a = ssa.new_block();
    let b = ssa.new_block();
    ssa.branch(entry, cond, a, b);
    ssa.bind(a);
    ssa.bind(b);
    ssa.jump(b, a);
}

#[test]
#[should_panic(expected = "third predecessor")]
fn test_third_loop_predecessor_panics() {
    let mut ssa = SSABuilder::new(&[VariableType::bool()]);
    let entry = ssa.entry_block();
    let cond = ssa.argument(0);
    let pre = ssa.new_block();
    let header = ssa.new_block();
    let a = ssa.new_block();
    let b = ssa.new_block();
    ssa.jump(entry, pre);
    ssa.bind(pre);
    ssa.jump(pre, header);
    ssa.loop_begin(header);
    ssa.branch(header, cond, a, b);
    ssa.bind(a);
    ssa.bind(b);
    ssa.jump(a, header);
    ssa.jump(b, header);
}

#[test]
#[should_panic(expected = "already terminated")]
fn test_write_after_terminator_panics() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    let x = ssa.declare_variable(VariableType::int32());
    let zero = ssa.int32(0);
    ssa.ret(entry, zero);
    ssa.write_variable(entry, x, zero);
}

#[test]
#[should_panic(expected = "already sealed")]
fn test_double_seal_panics() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    ssa.seal(entry);
}

#[test]
#[should_panic(expected = "no predecessors")]
fn test_bind_without_predecessors_panics() {
    let mut ssa = SSABuilder::new(&[]);
    let orphan = ssa.new_block();
    ssa.bind(orphan);
}

#[test]
#[should_panic(expected = "without an open region")]
fn test_unbalanced_pop_region_panics() {
    let mut ssa = SSABuilder::new(&[]);
    let entry = ssa.entry_block();
    ssa.pop_region(entry);
}

//! Parser for a single gate line.

use nom::{
    character::complete::{char, space0, space1},
    combinator::opt,
    multi::separated_list0,
    sequence::{delimited, preceded, tuple},
    IResult,
};

use super::primitives::{
    immediate, parse_gate_ref, parse_gate_type, parse_machine_type, parse_opcode, parse_slot,
};
use crate::{
    opcode::Opcode,
    types::{GateType, MachineType},
};

/// A gate as written in the dump, before its inputs are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GateLine {
    pub id: u32,
    pub opcode: Opcode,
    pub machine_type: MachineType,
    pub gate_type: GateType,
    pub bitfield: u64,
    pub ins: Vec<Option<u32>>,
}

/// Parse `gN = opcode[.mt][:gt] [imm] [[ins]]`
pub(crate) fn parse_gate_line(input: &str) -> IResult<&str, GateLine> {
    let (input, (id, _, _, _, opcode)) =
        tuple((parse_gate_ref, space0, char('='), space0, parse_opcode))(input)?;
    let (input, machine_type) = opt(preceded(char('.'), parse_machine_type))(input)?;
    let (input, gate_type) = opt(preceded(char(':'), parse_gate_type))(input)?;
    let (input, bitfield) = opt(preceded(space1, immediate))(input)?;
    let (input, ins) = opt(preceded(
        space0,
        delimited(
            char('['),
            separated_list0(tuple((space0, char(','), space0)), parse_slot),
            char(']'),
        ),
    ))(input)?;
    let (input, _) = space0(input)?;

    let machine_type = machine_type.unwrap_or(MachineType::NoValue);
    Ok((
        input,
        GateLine {
            id,
            opcode,
            machine_type,
            gate_type: gate_type.unwrap_or_else(|| GateType::default_for(machine_type)),
            bitfield: bitfield.unwrap_or(0),
            ins: ins.unwrap_or_default(),
        },
    ))
}

//! Primitive parsers for gate references, opcodes, types and literals.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{map, map_opt, map_res, opt, recognize, value},
    sequence::{pair, preceded},
    IResult,
};

use crate::{
    opcode::Opcode,
    types::{GateType, MachineType},
};

fn digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit())(input)
}

/// Parse a signed integer literal
pub(crate) fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digits)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Parse a bitfield immediate. Negative keys are stored two's complement.
pub(crate) fn immediate(input: &str) -> IResult<&str, u64> {
    alt((
        map(integer, |v| v as u64),
        map_res(digits, |s: &str| s.parse::<u64>()),
    ))(input)
}

/// Parse a gate reference (g0, g1, etc.)
pub(crate) fn parse_gate_ref(input: &str) -> IResult<&str, u32> {
    map_res(preceded(char('g'), digits), |s: &str| s.parse::<u32>())(input)
}

/// Parse an input slot: a gate reference or `_` for an empty slot
pub(crate) fn parse_slot(input: &str) -> IResult<&str, Option<u32>> {
    alt((map(parse_gate_ref, Some), value(None, char('_'))))(input)
}

pub(crate) fn parse_opcode(input: &str) -> IResult<&str, Opcode> {
    map_opt(
        take_while1(|c: char| c.is_ascii_lowercase() || c == '_'),
        Opcode::from_name,
    )(input)
}

pub(crate) fn parse_machine_type(input: &str) -> IResult<&str, MachineType> {
    alt((
        value(MachineType::NoValue, tag("novalue")),
        value(MachineType::AnyValue, tag("any")),
        value(MachineType::Arch, tag("arch")),
        value(MachineType::I16, tag("i16")),
        value(MachineType::I1, tag("i1")),
        value(MachineType::I8, tag("i8")),
        value(MachineType::I32, tag("i32")),
        value(MachineType::I64, tag("i64")),
        value(MachineType::F32, tag("f32")),
        value(MachineType::F64, tag("f64")),
    ))(input)
}

pub(crate) fn parse_gate_type(input: &str) -> IResult<&str, GateType> {
    alt((
        value(GateType::TaggedPointer, tag("tagged_ptr")),
        value(GateType::TaggedValue, tag("tagged")),
        value(GateType::Empty, tag("empty")),
        value(GateType::CValue, tag("c")),
    ))(input)
}

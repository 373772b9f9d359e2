//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each takes the current operand value and returns the shifted result; the
//! dispatcher writes it back to the accumulator or to memory.
//!
//! Flags affected: C (bit shifted out), Z, N

use crate::{Registers, Status};

pub(crate) fn asl(regs: &mut Registers, value: u8) -> u8 {
    regs.set_flag(Status::CARRY, value & 0x80 != 0);
    let result = value << 1;
    regs.set_zn(result);
    result
}

pub(crate) fn lsr(regs: &mut Registers, value: u8) -> u8 {
    regs.set_flag(Status::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    regs.set_zn(result);
    result
}

pub(crate) fn rol(regs: &mut Registers, value: u8) -> u8 {
    let carry_in = regs.carry();
    regs.set_flag(Status::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    regs.set_zn(result);
    result
}

pub(crate) fn ror(regs: &mut Registers, value: u8) -> u8 {
    let carry_in = regs.carry() << 7;
    regs.set_flag(Status::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | carry_in;
    regs.set_zn(result);
    result
}

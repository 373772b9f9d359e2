//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Memory increment/decrement (value returned for write-back)
//! - INX, INY, DEX, DEY: Index register increment/decrement
//!
//! All arithmetic wraps modulo 256.
//!
//! Flags affected: Z, N

use crate::Registers;

pub(crate) fn inc(regs: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    regs.set_zn(result);
    result
}

pub(crate) fn dec(regs: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    regs.set_zn(result);
    result
}

pub(crate) fn inx(regs: &mut Registers) {
    regs.x = regs.x.wrapping_add(1);
    regs.set_zn(regs.x);
}

pub(crate) fn iny(regs: &mut Registers) {
    regs.y = regs.y.wrapping_add(1);
    regs.set_zn(regs.y);
}

pub(crate) fn dex(regs: &mut Registers) {
    regs.x = regs.x.wrapping_sub(1);
    regs.set_zn(regs.x);
}

pub(crate) fn dey(regs: &mut Registers) {
    regs.y = regs.y.wrapping_sub(1);
    regs.set_zn(regs.y);
}

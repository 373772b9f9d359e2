//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry (binary and NMOS decimal mode)
//! - SBC: Subtract with Carry (binary and NMOS decimal mode)
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register comparison
//! - BIT: Bit test
//!
//! Every function here is a pure transition on the register file; the caller has
//! already fetched the operand value.

use crate::{Registers, Status};

/// ADC: A <- A + M + C.
///
/// Carry and overflow are derived from the pre-update accumulator before A is
/// overwritten. When `decimal` is true (D flag set and BCD enabled) the NMOS decimal
/// adder is emulated.
///
/// Flags affected: C, Z, V, N
pub(crate) fn adc(regs: &mut Registers, value: u8, decimal: bool) {
    if decimal {
        adc_decimal(regs, value);
        return;
    }

    let a = regs.a;
    let sum = a as u16 + value as u16 + regs.carry() as u16;
    let result = sum as u8;

    regs.set_flag(Status::CARRY, sum > 0xFF);
    // Overflow: both inputs share a sign and the result's sign differs
    regs.set_flag(Status::OVERFLOW, !(a ^ value) & (a ^ result) & 0x80 != 0);

    regs.a = result;
    regs.set_zn(result);
}

/// NMOS decimal-mode addition.
///
/// Z follows the binary sum; N and V follow the intermediate value after the low
/// nibble has been adjusted but before the high nibble is.
fn adc_decimal(regs: &mut Registers, value: u8) {
    let a = regs.a;
    let carry = regs.carry() as u16;

    let binary = (a as u16 + value as u16 + carry) as u8;

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry;
    if lo >= 0x0A {
        lo = ((lo + 0x06) & 0x0F) + 0x10;
    }
    let mut sum = (a & 0xF0) as u16 + (value & 0xF0) as u16 + lo;

    regs.set_flag(Status::ZERO, binary == 0);
    regs.set_flag(Status::NEGATIVE, sum & 0x80 != 0);
    regs.set_flag(Status::OVERFLOW, !(a ^ value) & (a ^ sum as u8) & 0x80 != 0);

    if sum >= 0xA0 {
        sum += 0x60;
    }
    regs.set_flag(Status::CARRY, sum >= 0x100);
    regs.a = sum as u8;
}

/// SBC: A <- A - M - (1 - C).
///
/// In binary mode this is ADC of the one's complement. In decimal mode every flag
/// still comes from the binary difference, only the accumulator is BCD-adjusted.
///
/// Flags affected: C, Z, V, N
pub(crate) fn sbc(regs: &mut Registers, value: u8, decimal: bool) {
    let a = regs.a;
    let borrow_in = 1 - regs.carry() as i16;

    adc(regs, !value, false);

    if decimal {
        let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow_in;
        if lo < 0 {
            lo = ((lo - 0x06) & 0x0F) - 0x10;
        }
        let mut diff = (a & 0xF0) as i16 - (value & 0xF0) as i16 + lo;
        if diff < 0 {
            diff -= 0x60;
        }
        regs.a = diff as u8;
    }
}

/// AND: A <- A & M.
///
/// Flags affected: Z, N
pub(crate) fn and(regs: &mut Registers, value: u8) {
    regs.a &= value;
    regs.set_zn(regs.a);
}

/// ORA: A <- A | M.
///
/// Flags affected: Z, N
pub(crate) fn ora(regs: &mut Registers, value: u8) {
    regs.a |= value;
    regs.set_zn(regs.a);
}

/// EOR: A <- A ^ M.
///
/// Flags affected: Z, N
pub(crate) fn eor(regs: &mut Registers, value: u8) {
    regs.a ^= value;
    regs.set_zn(regs.a);
}

/// CMP/CPX/CPY: computes `register - M`, sets flags, discards the difference.
///
/// Flags affected: C (register >= M), Z (equal), N (bit 7 of the difference)
pub(crate) fn compare(regs: &mut Registers, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    regs.set_flag(Status::CARRY, register >= value);
    regs.set_zn(diff);
}

/// BIT: tests A & M without storing it.
///
/// Flags affected: Z (A & M == 0), V (M bit 6), N (M bit 7)
pub(crate) fn bit(regs: &mut Registers, value: u8) {
    regs.set_flag(Status::ZERO, regs.a & value == 0);
    regs.set_flag(Status::OVERFLOW, value & 0x40 != 0);
    regs.set_flag(Status::NEGATIVE, value & 0x80 != 0);
}

//! # Stack Operations
//!
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status (B and bit 5 set in the pushed copy)
//! - PLA: Pull Accumulator (Z, N affected)
//! - PLP: Pull Processor Status (B discarded, bit 5 forced)
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward. A push writes to
//! 0x0100 | SP then decrements SP; a pull increments SP then reads. SP wraps within
//! the page.

use crate::{MemoryBus, Registers, Status};

pub(crate) fn push<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &mut M, value: u8) {
    memory.write(regs.stack_addr(), value);
    regs.sp = regs.sp.wrapping_sub(1);
}

pub(crate) fn pull<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &M) -> u8 {
    regs.sp = regs.sp.wrapping_add(1);
    memory.read(regs.stack_addr())
}

/// Pushes high byte first, so the word sits little-endian in memory.
pub(crate) fn push_word<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &mut M, value: u16) {
    push(regs, memory, (value >> 8) as u8);
    push(regs, memory, value as u8);
}

pub(crate) fn pull_word<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &M) -> u16 {
    let lo = pull(regs, memory) as u16;
    let hi = pull(regs, memory) as u16;
    (hi << 8) | lo
}

/// Status byte as seen on the stack after PHP/BRK.
pub(crate) fn pushed_status(regs: &Registers, brk: bool) -> u8 {
    let mut status = regs.p | Status::UNUSED;
    status.set(Status::BREAK, brk);
    status.bits()
}

/// Loads P from a pulled byte: B does not exist in the register, bit 5 reads as 1.
pub(crate) fn restore_status(regs: &mut Registers, value: u8) {
    regs.set_status(value & !Status::BREAK.bits());
}

pub(crate) fn pha<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &mut M) {
    let value = regs.a;
    push(regs, memory, value);
}

pub(crate) fn php<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &mut M) {
    let status = pushed_status(regs, true);
    push(regs, memory, status);
}

pub(crate) fn pla<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &M) {
    regs.a = pull(regs, memory);
    regs.set_zn(regs.a);
}

pub(crate) fn plp<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &M) {
    let value = pull(regs, memory);
    restore_status(regs, value);
}

//! # Control Flow Instructions
//!
//! - JMP: Jump (absolute, or indirect through the resolver's page-wrap pointer read)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - Hardware interrupt entry shared by IRQ and NMI
//!
//! JSR pushes the address of its own last byte (return address - 1); RTS pulls it and
//! adds one. BRK is a one-byte opcode followed by a padding byte, so it pushes
//! PC + 2 relative to the opcode.

use super::stack::{pull_word, push, push_word, pushed_status, restore_status};
use crate::{MemoryBus, Registers, Status};

/// NMI vector (0xFFFA/0xFFFB).
pub(crate) const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (0xFFFC/0xFFFD).
pub(crate) const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (0xFFFE/0xFFFF).
pub(crate) const IRQ_VECTOR: u16 = 0xFFFE;

pub(crate) fn jmp(regs: &mut Registers, target: u16) {
    regs.pc = target;
}

/// `regs.pc` already points past the two operand bytes.
pub(crate) fn jsr<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &mut M, target: u16) {
    let return_addr = regs.pc.wrapping_sub(1);
    push_word(regs, memory, return_addr);
    regs.pc = target;
}

pub(crate) fn rts<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &M) {
    regs.pc = pull_word(regs, memory).wrapping_add(1);
}

/// `regs.pc` points at the padding byte after the BRK opcode.
pub(crate) fn brk<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &mut M) {
    regs.pc = regs.pc.wrapping_add(1);
    enter_interrupt(regs, memory, IRQ_VECTOR, true);
}

pub(crate) fn rti<M: MemoryBus + ?Sized>(regs: &mut Registers, memory: &M) {
    let status = super::stack::pull(regs, memory);
    restore_status(regs, status);
    regs.pc = pull_word(regs, memory);
}

/// Pushes PC and P, masks IRQs, and jumps through `vector`.
///
/// `brk` selects the B bit in the pushed status byte: set for BRK, clear for
/// hardware interrupts.
pub(crate) fn enter_interrupt<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    memory: &mut M,
    vector: u16,
    brk: bool,
) {
    let pc = regs.pc;
    push_word(regs, memory, pc);
    let status = pushed_status(regs, brk);
    push(regs, memory, status);
    regs.set_flag(Status::INTERRUPT_DISABLE, true);
    regs.pc = memory.read_word(vector);
}

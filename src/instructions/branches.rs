//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS branch on a single flag using a signed
//! 8-bit relative offset. The resolver has already computed the target and whether
//! it lies on another page than the following instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::opcodes::Operation;
use crate::{Registers, Status};

/// Evaluates the branch condition of `operation` against the current flags.
pub(crate) fn condition(regs: &Registers, operation: Operation) -> bool {
    match operation {
        Operation::Bcc => !regs.get_flag(Status::CARRY),
        Operation::Bcs => regs.get_flag(Status::CARRY),
        Operation::Bne => !regs.get_flag(Status::ZERO),
        Operation::Beq => regs.get_flag(Status::ZERO),
        Operation::Bpl => !regs.get_flag(Status::NEGATIVE),
        Operation::Bmi => regs.get_flag(Status::NEGATIVE),
        Operation::Bvc => !regs.get_flag(Status::OVERFLOW),
        Operation::Bvs => regs.get_flag(Status::OVERFLOW),
        _ => false,
    }
}

/// Takes the branch if its condition holds. Returns the cycles added on top of the
/// 2-cycle base.
pub(crate) fn branch(
    regs: &mut Registers,
    operation: Operation,
    target: u16,
    page_crossed: bool,
) -> u8 {
    if !condition(regs, operation) {
        return 0;
    }
    regs.pc = target;
    1 + page_crossed as u8
}

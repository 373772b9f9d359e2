//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED each set or clear exactly one flag. They use
//! implied addressing and execute in 2 cycles.

use crate::opcodes::Operation;
use crate::{Registers, Status};

/// The flag an instruction targets and the value it writes, if it is a flag
/// instruction at all.
pub(crate) fn flag_update(operation: Operation) -> Option<(Status, bool)> {
    let update = match operation {
        Operation::Clc => (Status::CARRY, false),
        Operation::Sec => (Status::CARRY, true),
        Operation::Cli => (Status::INTERRUPT_DISABLE, false),
        Operation::Sei => (Status::INTERRUPT_DISABLE, true),
        Operation::Clv => (Status::OVERFLOW, false),
        Operation::Cld => (Status::DECIMAL, false),
        Operation::Sed => (Status::DECIMAL, true),
        _ => return None,
    };
    Some(update)
}

pub(crate) fn apply(regs: &mut Registers, operation: Operation) {
    if let Some((flag, value)) = flag_update(operation) {
        regs.set_flag(flag, value);
    }
}

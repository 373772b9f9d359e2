//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: Load a register from the operand (Z, N affected)
//! - STA, STX, STY: Store a register to the effective address (no flags)

use crate::opcodes::Operation;
use crate::Registers;

pub(crate) fn lda(regs: &mut Registers, value: u8) {
    regs.a = value;
    regs.set_zn(value);
}

pub(crate) fn ldx(regs: &mut Registers, value: u8) {
    regs.x = value;
    regs.set_zn(value);
}

pub(crate) fn ldy(regs: &mut Registers, value: u8) {
    regs.y = value;
    regs.set_zn(value);
}

/// The register a store instruction writes out.
pub(crate) fn store_source(regs: &Registers, operation: Operation) -> u8 {
    match operation {
        Operation::Stx => regs.x,
        Operation::Sty => regs.y,
        _ => regs.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_loads_set_zn() {
        let mut r = Registers::power_on(0);
        lda(&mut r, 0x80);
        assert!(r.get_flag(Status::NEGATIVE));
        ldx(&mut r, 0x00);
        assert!(r.get_flag(Status::ZERO));
        ldy(&mut r, 0x7F);
        assert!(!r.get_flag(Status::ZERO) && !r.get_flag(Status::NEGATIVE));
        assert_eq!((r.a, r.x, r.y), (0x80, 0x00, 0x7F));
    }

    #[test]
    fn test_store_source() {
        let mut r = Registers::power_on(0);
        r.a = 1;
        r.x = 2;
        r.y = 3;
        assert_eq!(store_source(&r, Operation::Sta), 1);
        assert_eq!(store_source(&r, Operation::Stx), 2);
        assert_eq!(store_source(&r, Operation::Sty), 3);
    }
}

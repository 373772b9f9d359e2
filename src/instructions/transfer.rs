//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA, TSX: Copy between registers (Z, N affected)
//! - TXS: Transfer X to Stack Pointer (no flags)

use crate::Registers;

pub(crate) fn tax(regs: &mut Registers) {
    regs.x = regs.a;
    regs.set_zn(regs.x);
}

pub(crate) fn tay(regs: &mut Registers) {
    regs.y = regs.a;
    regs.set_zn(regs.y);
}

pub(crate) fn txa(regs: &mut Registers) {
    regs.a = regs.x;
    regs.set_zn(regs.a);
}

pub(crate) fn tya(regs: &mut Registers) {
    regs.a = regs.y;
    regs.set_zn(regs.a);
}

pub(crate) fn tsx(regs: &mut Registers) {
    regs.x = regs.sp;
    regs.set_zn(regs.x);
}

/// Unlike the other transfers, TXS leaves the flags alone.
pub(crate) fn txs(regs: &mut Registers) {
    regs.sp = regs.x;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_txs_does_not_touch_flags() {
        let mut r = Registers::power_on(0);
        r.x = 0x00;
        let before = r.p;
        txs(&mut r);
        assert_eq!(r.sp, 0x00);
        assert_eq!(r.p, before);
    }

    #[test]
    fn test_tsx_sets_flags() {
        let mut r = Registers::power_on(0);
        tsx(&mut r);
        assert_eq!(r.x, 0xFD);
        assert!(r.get_flag(Status::NEGATIVE));
    }
}

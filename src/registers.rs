//! # Processor Registers and Status Flags
//!
//! The 6502 register file: accumulator (A), index registers (X, Y), stack pointer
//! (SP), program counter (PC) and the packed status register (P).
//!
//! Status bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// Packed 6502 status register.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry: unsigned overflow/underflow, shifted-out bit
        const CARRY = 1 << 0;
        /// Zero: result was zero
        const ZERO = 1 << 1;
        /// Interrupt disable: masks IRQ
        const INTERRUPT_DISABLE = 1 << 2;
        /// Decimal: BCD arithmetic for ADC/SBC
        const DECIMAL = 1 << 3;
        /// Break: only meaningful in pushed copies of P
        const BREAK = 1 << 4;
        /// Unused: reads back as 1
        const UNUSED = 1 << 5;
        /// Overflow: signed overflow
        const OVERFLOW = 1 << 6;
        /// Negative: bit 7 of the result
        const NEGATIVE = 1 << 7;
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// The 6502 register file.
///
/// Instruction semantics operate on this struct alone (plus memory for the families
/// that touch it), which keeps them independent of the bus type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Program counter (address of next byte to fetch)
    pub pc: u16,

    /// Status register
    pub p: Status,
}

impl Registers {
    /// Register state produced by a reset that loaded `pc` from the vector.
    pub fn power_on(pc: u16) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            pc,
            p: Status::UNUSED,
        }
    }

    /// Returns true if every bit of `flag` is set.
    #[inline]
    pub fn get_flag(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    /// Sets or clears `flag`, leaving all other bits unchanged.
    #[inline]
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.p.set(flag, value);
    }

    /// Replaces the status byte. The unused bit always reads back as 1.
    #[inline]
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_bits_retain(value) | Status::UNUSED;
    }

    /// Updates Z and N from `value`.
    #[inline]
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.p.set(Status::ZERO, value == 0);
        self.p.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Carry as an integer, for arithmetic.
    #[inline]
    pub(crate) fn carry(&self) -> u8 {
        self.p.contains(Status::CARRY) as u8
    }

    /// Current top-of-stack address (where the next push lands).
    #[inline]
    pub(crate) fn stack_addr(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let regs = Registers::power_on(0x8000);
        assert_eq!(regs.pc, 0x8000);
        assert_eq!(regs.sp, 0xFD);
        assert_eq!((regs.a, regs.x, regs.y), (0, 0, 0));
        assert_eq!(regs.p.bits(), 0b0010_0000);
    }

    #[test]
    fn test_set_flag_leaves_other_bits() {
        let mut regs = Registers::power_on(0);
        regs.set_flag(Status::CARRY, true);
        regs.set_flag(Status::NEGATIVE, true);
        assert_eq!(regs.p.bits(), 0b1010_0001);

        regs.set_flag(Status::CARRY, false);
        assert!(!regs.get_flag(Status::CARRY));
        assert!(regs.get_flag(Status::NEGATIVE));
        assert!(regs.get_flag(Status::UNUSED));
    }

    #[test]
    fn test_set_status_forces_unused_bit() {
        let mut regs = Registers::default();
        regs.set_status(0x00);
        assert_eq!(regs.p.bits(), 0x20);
        regs.set_status(0xFF);
        assert_eq!(regs.p.bits(), 0xFF);
    }

    #[test]
    fn test_set_zn() {
        let mut regs = Registers::power_on(0);
        regs.set_zn(0x00);
        assert!(regs.get_flag(Status::ZERO));
        assert!(!regs.get_flag(Status::NEGATIVE));

        regs.set_zn(0x80);
        assert!(!regs.get_flag(Status::ZERO));
        assert!(regs.get_flag(Status::NEGATIVE));
    }
}

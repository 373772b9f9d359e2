//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver that
//! turns an instruction's operand bytes into an immediate value or an effective
//! address.
//!
//! Resolution is a pure function of the register file and memory: it reads the
//! operand bytes at `regs.pc` (the byte after the opcode) and reports the program
//! counter the instruction continues from, rather than mutating any CPU state.

use crate::{MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// What an addressing mode resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator is the operand.
    Accumulator,
    /// An 8-bit constant taken from the instruction stream.
    Immediate(u8),
    /// An effective memory address (or branch/jump target).
    Address(u16),
}

/// Result of resolving one instruction's operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// The resolved operand.
    pub operand: Operand,

    /// Program counter after the operand bytes were consumed.
    pub next_pc: u16,

    /// True when indexing (or a relative branch) moved the address to another page.
    pub page_crossed: bool,
}

#[inline]
fn crosses_page(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

/// Reads a pointer stored in zero page. The high byte wraps within page zero.
#[inline]
fn read_zp_pointer<M: MemoryBus + ?Sized>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Resolves the operand of an instruction whose operand bytes start at `regs.pc`.
///
/// # Examples
///
/// ```
/// use scpu::{resolve, AddressingMode, FlatMemory, MemoryBus, Operand, Registers};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x8001, 0xF0); // operand of LDA $F0,X
///
/// let mut regs = Registers::power_on(0x8001);
/// regs.x = 0x20;
///
/// let r = resolve(AddressingMode::ZeroPageX, &regs, &mem);
/// assert_eq!(r.operand, Operand::Address(0x0010)); // wrapped inside zero page
/// assert_eq!(r.next_pc, 0x8002);
/// assert!(!r.page_crossed);
/// ```
pub fn resolve<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    regs: &Registers,
    memory: &M,
) -> Resolved {
    let pc = regs.pc;
    let next_pc = pc.wrapping_add(mode.operand_bytes() as u16);

    let (operand, page_crossed) = match mode {
        AddressingMode::Implicit => (Operand::Implied, false),
        AddressingMode::Accumulator => (Operand::Accumulator, false),
        AddressingMode::Immediate => (Operand::Immediate(memory.read(pc)), false),
        AddressingMode::ZeroPage => (Operand::Address(memory.read(pc) as u16), false),
        AddressingMode::ZeroPageX => {
            let addr = memory.read(pc).wrapping_add(regs.x);
            (Operand::Address(addr as u16), false)
        }
        AddressingMode::ZeroPageY => {
            let addr = memory.read(pc).wrapping_add(regs.y);
            (Operand::Address(addr as u16), false)
        }
        AddressingMode::Relative => {
            let offset = memory.read(pc) as i8;
            let target = next_pc.wrapping_add_signed(offset as i16);
            (Operand::Address(target), crosses_page(next_pc, target))
        }
        AddressingMode::Absolute => (Operand::Address(memory.read_word(pc)), false),
        AddressingMode::AbsoluteX => {
            let base = memory.read_word(pc);
            let addr = base.wrapping_add(regs.x as u16);
            (Operand::Address(addr), crosses_page(base, addr))
        }
        AddressingMode::AbsoluteY => {
            let base = memory.read_word(pc);
            let addr = base.wrapping_add(regs.y as u16);
            (Operand::Address(addr), crosses_page(base, addr))
        }
        AddressingMode::Indirect => {
            let ptr = memory.read_word(pc);
            // NMOS bug: the pointer's high byte never carries into the next page.
            let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let lo = memory.read(ptr) as u16;
            let hi = memory.read(hi_addr) as u16;
            (Operand::Address((hi << 8) | lo), false)
        }
        AddressingMode::IndirectX => {
            let ptr = memory.read(pc).wrapping_add(regs.x);
            (Operand::Address(read_zp_pointer(memory, ptr)), false)
        }
        AddressingMode::IndirectY => {
            let base = read_zp_pointer(memory, memory.read(pc));
            let addr = base.wrapping_add(regs.y as u16);
            (Operand::Address(addr), crosses_page(base, addr))
        }
    };

    Resolved {
        operand,
        next_pc,
        page_crossed,
    }
}

//! # Instruction Table
//!
//! The 256-entry dispatch table that maps every opcode byte to plain data: the
//! semantic family to run, the addressing mode that feeds it, the encoded length,
//! and the base cycle cost.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - `Operation::Illegal`, "???" mnemonic
//!
//! The table is built in a `const fn` and never mutated. Each `CPU` holds a
//! `&'static InstructionTable`, so any number of CPUs can share it.

use crate::addressing::AddressingMode;

/// Semantic family of an instruction.
///
/// Several opcodes share a family (ADC exists in 8 addressing modes); the
/// `Instruction` entry supplies the mode, length and timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add with carry
    Adc,
    /// Bitwise AND with accumulator
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if plus (N clear)
    Bpl,
    /// Software interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X register
    Cpx,
    /// Compare Y register
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR with accumulator
    Eor,
    /// Increment memory
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X register
    Ldx,
    /// Load Y register
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Bitwise OR with accumulator
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left through carry
    Rol,
    /// Rotate right through carry
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store accumulator
    Sta,
    /// Store X register
    Stx,
    /// Store Y register
    Sty,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to A
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to A
    Tya,
    /// Undocumented opcode; handled by `IllegalOpcodePolicy`.
    Illegal,
}

impl Operation {
    /// Three-letter assembler mnemonic ("???" for illegal opcodes).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }
}

/// Descriptor for a single opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction name, diagnostic only
/// - `operation`: Semantic family dispatched by the CPU
/// - `mode`: How the operand bytes are interpreted
/// - `size`: Total instruction size including opcode and operands (1-3 bytes)
/// - `cycles`: Base cycle cost (page-crossing and branch penalties added dynamically)
/// - `page_penalty`: Whether a page crossing in `mode` costs one extra cycle
///
/// # Examples
///
/// ```
/// use scpu::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_abs_x = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda_abs_x.mnemonic, "LDA");
/// assert_eq!(lda_abs_x.operation, Operation::Lda);
/// assert_eq!(lda_abs_x.mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda_abs_x.cycles, 4);
/// assert_eq!(lda_abs_x.size, 3);
/// assert!(lda_abs_x.page_penalty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Semantic family.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size: u8,

    /// Base cycle cost (before page crossing and branch penalties).
    pub cycles: u8,

    /// True for read instructions whose indexed address costs +1 cycle across a page.
    ///
    /// Stores and read-modify-write instructions always take the fixed cost instead.
    pub page_penalty: bool,
}

impl Instruction {
    /// Returns true for the 105 undocumented opcodes.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.operation, Operation::Illegal)
    }
}

const ILLEGAL: Instruction = Instruction {
    mnemonic: "???",
    operation: Operation::Illegal,
    mode: AddressingMode::Implicit,
    size: 1,
    cycles: 0,
    page_penalty: false,
};

const fn op(operation: Operation, mode: AddressingMode, cycles: u8) -> Instruction {
    Instruction {
        mnemonic: operation.mnemonic(),
        operation,
        mode,
        size: 1 + mode.operand_bytes(),
        cycles,
        page_penalty: false,
    }
}

/// Like `op`, for instructions that pay one extra cycle on a page crossing.
const fn op_p(operation: Operation, mode: AddressingMode, cycles: u8) -> Instruction {
    let mut instruction = op(operation, mode, cycles);
    instruction.page_penalty = true;
    instruction
}

/// Immutable opcode-indexed dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTable {
    entries: [Instruction; 256],
}

impl InstructionTable {
    /// Builds the documented NMOS 6502 instruction set.
    pub const fn nmos() -> Self {
        let mut t = [ILLEGAL; 256];

        t[0x00] = op(Operation::Brk, AddressingMode::Implicit, 7);
        t[0x01] = op(Operation::Ora, AddressingMode::IndirectX, 6);
        t[0x05] = op(Operation::Ora, AddressingMode::ZeroPage, 3);
        t[0x06] = op(Operation::Asl, AddressingMode::ZeroPage, 5);
        t[0x08] = op(Operation::Php, AddressingMode::Implicit, 3);
        t[0x09] = op(Operation::Ora, AddressingMode::Immediate, 2);
        t[0x0A] = op(Operation::Asl, AddressingMode::Accumulator, 2);
        t[0x0D] = op(Operation::Ora, AddressingMode::Absolute, 4);
        t[0x0E] = op(Operation::Asl, AddressingMode::Absolute, 6);
        t[0x10] = op(Operation::Bpl, AddressingMode::Relative, 2);
        t[0x11] = op_p(Operation::Ora, AddressingMode::IndirectY, 5);
        t[0x15] = op(Operation::Ora, AddressingMode::ZeroPageX, 4);
        t[0x16] = op(Operation::Asl, AddressingMode::ZeroPageX, 6);
        t[0x18] = op(Operation::Clc, AddressingMode::Implicit, 2);
        t[0x19] = op_p(Operation::Ora, AddressingMode::AbsoluteY, 4);
        t[0x1D] = op_p(Operation::Ora, AddressingMode::AbsoluteX, 4);
        t[0x1E] = op(Operation::Asl, AddressingMode::AbsoluteX, 7);
        t[0x20] = op(Operation::Jsr, AddressingMode::Absolute, 6);
        t[0x21] = op(Operation::And, AddressingMode::IndirectX, 6);
        t[0x24] = op(Operation::Bit, AddressingMode::ZeroPage, 3);
        t[0x25] = op(Operation::And, AddressingMode::ZeroPage, 3);
        t[0x26] = op(Operation::Rol, AddressingMode::ZeroPage, 5);
        t[0x28] = op(Operation::Plp, AddressingMode::Implicit, 4);
        t[0x29] = op(Operation::And, AddressingMode::Immediate, 2);
        t[0x2A] = op(Operation::Rol, AddressingMode::Accumulator, 2);
        t[0x2C] = op(Operation::Bit, AddressingMode::Absolute, 4);
        t[0x2D] = op(Operation::And, AddressingMode::Absolute, 4);
        t[0x2E] = op(Operation::Rol, AddressingMode::Absolute, 6);
        t[0x30] = op(Operation::Bmi, AddressingMode::Relative, 2);
        t[0x31] = op_p(Operation::And, AddressingMode::IndirectY, 5);
        t[0x35] = op(Operation::And, AddressingMode::ZeroPageX, 4);
        t[0x36] = op(Operation::Rol, AddressingMode::ZeroPageX, 6);
        t[0x38] = op(Operation::Sec, AddressingMode::Implicit, 2);
        t[0x39] = op_p(Operation::And, AddressingMode::AbsoluteY, 4);
        t[0x3D] = op_p(Operation::And, AddressingMode::AbsoluteX, 4);
        t[0x3E] = op(Operation::Rol, AddressingMode::AbsoluteX, 7);
        t[0x40] = op(Operation::Rti, AddressingMode::Implicit, 6);
        t[0x41] = op(Operation::Eor, AddressingMode::IndirectX, 6);
        t[0x45] = op(Operation::Eor, AddressingMode::ZeroPage, 3);
        t[0x46] = op(Operation::Lsr, AddressingMode::ZeroPage, 5);
        t[0x48] = op(Operation::Pha, AddressingMode::Implicit, 3);
        t[0x49] = op(Operation::Eor, AddressingMode::Immediate, 2);
        t[0x4A] = op(Operation::Lsr, AddressingMode::Accumulator, 2);
        t[0x4C] = op(Operation::Jmp, AddressingMode::Absolute, 3);
        t[0x4D] = op(Operation::Eor, AddressingMode::Absolute, 4);
        t[0x4E] = op(Operation::Lsr, AddressingMode::Absolute, 6);
        t[0x50] = op(Operation::Bvc, AddressingMode::Relative, 2);
        t[0x51] = op_p(Operation::Eor, AddressingMode::IndirectY, 5);
        t[0x55] = op(Operation::Eor, AddressingMode::ZeroPageX, 4);
        t[0x56] = op(Operation::Lsr, AddressingMode::ZeroPageX, 6);
        t[0x58] = op(Operation::Cli, AddressingMode::Implicit, 2);
        t[0x59] = op_p(Operation::Eor, AddressingMode::AbsoluteY, 4);
        t[0x5D] = op_p(Operation::Eor, AddressingMode::AbsoluteX, 4);
        t[0x5E] = op(Operation::Lsr, AddressingMode::AbsoluteX, 7);
        t[0x60] = op(Operation::Rts, AddressingMode::Implicit, 6);
        t[0x61] = op(Operation::Adc, AddressingMode::IndirectX, 6);
        t[0x65] = op(Operation::Adc, AddressingMode::ZeroPage, 3);
        t[0x66] = op(Operation::Ror, AddressingMode::ZeroPage, 5);
        t[0x68] = op(Operation::Pla, AddressingMode::Implicit, 4);
        t[0x69] = op(Operation::Adc, AddressingMode::Immediate, 2);
        t[0x6A] = op(Operation::Ror, AddressingMode::Accumulator, 2);
        t[0x6C] = op(Operation::Jmp, AddressingMode::Indirect, 5);
        t[0x6D] = op(Operation::Adc, AddressingMode::Absolute, 4);
        t[0x6E] = op(Operation::Ror, AddressingMode::Absolute, 6);
        t[0x70] = op(Operation::Bvs, AddressingMode::Relative, 2);
        t[0x71] = op_p(Operation::Adc, AddressingMode::IndirectY, 5);
        t[0x75] = op(Operation::Adc, AddressingMode::ZeroPageX, 4);
        t[0x76] = op(Operation::Ror, AddressingMode::ZeroPageX, 6);
        t[0x78] = op(Operation::Sei, AddressingMode::Implicit, 2);
        t[0x79] = op_p(Operation::Adc, AddressingMode::AbsoluteY, 4);
        t[0x7D] = op_p(Operation::Adc, AddressingMode::AbsoluteX, 4);
        t[0x7E] = op(Operation::Ror, AddressingMode::AbsoluteX, 7);
        t[0x81] = op(Operation::Sta, AddressingMode::IndirectX, 6);
        t[0x84] = op(Operation::Sty, AddressingMode::ZeroPage, 3);
        t[0x85] = op(Operation::Sta, AddressingMode::ZeroPage, 3);
        t[0x86] = op(Operation::Stx, AddressingMode::ZeroPage, 3);
        t[0x88] = op(Operation::Dey, AddressingMode::Implicit, 2);
        t[0x8A] = op(Operation::Txa, AddressingMode::Implicit, 2);
        t[0x8C] = op(Operation::Sty, AddressingMode::Absolute, 4);
        t[0x8D] = op(Operation::Sta, AddressingMode::Absolute, 4);
        t[0x8E] = op(Operation::Stx, AddressingMode::Absolute, 4);
        t[0x90] = op(Operation::Bcc, AddressingMode::Relative, 2);
        t[0x91] = op(Operation::Sta, AddressingMode::IndirectY, 6);
        t[0x94] = op(Operation::Sty, AddressingMode::ZeroPageX, 4);
        t[0x95] = op(Operation::Sta, AddressingMode::ZeroPageX, 4);
        t[0x96] = op(Operation::Stx, AddressingMode::ZeroPageY, 4);
        t[0x98] = op(Operation::Tya, AddressingMode::Implicit, 2);
        t[0x99] = op(Operation::Sta, AddressingMode::AbsoluteY, 5);
        t[0x9A] = op(Operation::Txs, AddressingMode::Implicit, 2);
        t[0x9D] = op(Operation::Sta, AddressingMode::AbsoluteX, 5);
        t[0xA0] = op(Operation::Ldy, AddressingMode::Immediate, 2);
        t[0xA1] = op(Operation::Lda, AddressingMode::IndirectX, 6);
        t[0xA2] = op(Operation::Ldx, AddressingMode::Immediate, 2);
        t[0xA4] = op(Operation::Ldy, AddressingMode::ZeroPage, 3);
        t[0xA5] = op(Operation::Lda, AddressingMode::ZeroPage, 3);
        t[0xA6] = op(Operation::Ldx, AddressingMode::ZeroPage, 3);
        t[0xA8] = op(Operation::Tay, AddressingMode::Implicit, 2);
        t[0xA9] = op(Operation::Lda, AddressingMode::Immediate, 2);
        t[0xAA] = op(Operation::Tax, AddressingMode::Implicit, 2);
        t[0xAC] = op(Operation::Ldy, AddressingMode::Absolute, 4);
        t[0xAD] = op(Operation::Lda, AddressingMode::Absolute, 4);
        t[0xAE] = op(Operation::Ldx, AddressingMode::Absolute, 4);
        t[0xB0] = op(Operation::Bcs, AddressingMode::Relative, 2);
        t[0xB1] = op_p(Operation::Lda, AddressingMode::IndirectY, 5);
        t[0xB4] = op(Operation::Ldy, AddressingMode::ZeroPageX, 4);
        t[0xB5] = op(Operation::Lda, AddressingMode::ZeroPageX, 4);
        t[0xB6] = op(Operation::Ldx, AddressingMode::ZeroPageY, 4);
        t[0xB8] = op(Operation::Clv, AddressingMode::Implicit, 2);
        t[0xB9] = op_p(Operation::Lda, AddressingMode::AbsoluteY, 4);
        t[0xBA] = op(Operation::Tsx, AddressingMode::Implicit, 2);
        t[0xBC] = op_p(Operation::Ldy, AddressingMode::AbsoluteX, 4);
        t[0xBD] = op_p(Operation::Lda, AddressingMode::AbsoluteX, 4);
        t[0xBE] = op_p(Operation::Ldx, AddressingMode::AbsoluteY, 4);
        t[0xC0] = op(Operation::Cpy, AddressingMode::Immediate, 2);
        t[0xC1] = op(Operation::Cmp, AddressingMode::IndirectX, 6);
        t[0xC4] = op(Operation::Cpy, AddressingMode::ZeroPage, 3);
        t[0xC5] = op(Operation::Cmp, AddressingMode::ZeroPage, 3);
        t[0xC6] = op(Operation::Dec, AddressingMode::ZeroPage, 5);
        t[0xC8] = op(Operation::Iny, AddressingMode::Implicit, 2);
        t[0xC9] = op(Operation::Cmp, AddressingMode::Immediate, 2);
        t[0xCA] = op(Operation::Dex, AddressingMode::Implicit, 2);
        t[0xCC] = op(Operation::Cpy, AddressingMode::Absolute, 4);
        t[0xCD] = op(Operation::Cmp, AddressingMode::Absolute, 4);
        t[0xCE] = op(Operation::Dec, AddressingMode::Absolute, 6);
        t[0xD0] = op(Operation::Bne, AddressingMode::Relative, 2);
        t[0xD1] = op_p(Operation::Cmp, AddressingMode::IndirectY, 5);
        t[0xD5] = op(Operation::Cmp, AddressingMode::ZeroPageX, 4);
        t[0xD6] = op(Operation::Dec, AddressingMode::ZeroPageX, 6);
        t[0xD8] = op(Operation::Cld, AddressingMode::Implicit, 2);
        t[0xD9] = op_p(Operation::Cmp, AddressingMode::AbsoluteY, 4);
        t[0xDD] = op_p(Operation::Cmp, AddressingMode::AbsoluteX, 4);
        t[0xDE] = op(Operation::Dec, AddressingMode::AbsoluteX, 7);
        t[0xE0] = op(Operation::Cpx, AddressingMode::Immediate, 2);
        t[0xE1] = op(Operation::Sbc, AddressingMode::IndirectX, 6);
        t[0xE4] = op(Operation::Cpx, AddressingMode::ZeroPage, 3);
        t[0xE5] = op(Operation::Sbc, AddressingMode::ZeroPage, 3);
        t[0xE6] = op(Operation::Inc, AddressingMode::ZeroPage, 5);
        t[0xE8] = op(Operation::Inx, AddressingMode::Implicit, 2);
        t[0xE9] = op(Operation::Sbc, AddressingMode::Immediate, 2);
        t[0xEA] = op(Operation::Nop, AddressingMode::Implicit, 2);
        t[0xEC] = op(Operation::Cpx, AddressingMode::Absolute, 4);
        t[0xED] = op(Operation::Sbc, AddressingMode::Absolute, 4);
        t[0xEE] = op(Operation::Inc, AddressingMode::Absolute, 6);
        t[0xF0] = op(Operation::Beq, AddressingMode::Relative, 2);
        t[0xF1] = op_p(Operation::Sbc, AddressingMode::IndirectY, 5);
        t[0xF5] = op(Operation::Sbc, AddressingMode::ZeroPageX, 4);
        t[0xF6] = op(Operation::Inc, AddressingMode::ZeroPageX, 6);
        t[0xF8] = op(Operation::Sed, AddressingMode::Implicit, 2);
        t[0xF9] = op_p(Operation::Sbc, AddressingMode::AbsoluteY, 4);
        t[0xFD] = op_p(Operation::Sbc, AddressingMode::AbsoluteX, 4);
        t[0xFE] = op(Operation::Inc, AddressingMode::AbsoluteX, 7);

        Self { entries: t }
    }

    /// Returns the descriptor for `opcode`.
    #[inline]
    pub fn get(&self, opcode: u8) -> &Instruction {
        &self.entries[opcode as usize]
    }

    /// Iterates over all 256 descriptors in opcode order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.entries.iter()
    }
}

impl std::ops::Index<usize> for InstructionTable {
    type Output = Instruction;

    fn index(&self, opcode: usize) -> &Instruction {
        &self.entries[opcode]
    }
}

/// The documented NMOS 6502 instruction table.
///
/// # Examples
///
/// ```
/// use scpu::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!((brk.mnemonic, brk.cycles, brk.size), ("BRK", 7, 1));
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(illegal.is_illegal());
/// ```
pub static OPCODE_TABLE: InstructionTable = InstructionTable::nmos();

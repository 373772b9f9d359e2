//! # 6502 Instruction Implementations
//!
//! Instruction semantics, organized by category. Each semantic function is a
//! transition on `Registers`, touching memory only through an address the
//! addressing-mode resolver already produced.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::{Operand, Resolved};
use crate::opcodes::{Instruction, Operation};
use crate::{MemoryBus, Registers, Status};

/// Effective address of a memory operand.
///
/// The instruction table only pairs memory-touching families with modes that yield
/// an address.
fn address(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        other => unreachable!("operand {:?} has no effective address", other),
    }
}

/// Fetches the value a read instruction operates on.
fn read_operand<M: MemoryBus + ?Sized>(regs: &Registers, memory: &M, operand: Operand) -> u8 {
    match operand {
        Operand::Immediate(value) => value,
        Operand::Address(addr) => memory.read(addr),
        Operand::Accumulator => regs.a,
        Operand::Implied => unreachable!("implied operand has no value"),
    }
}

/// Read-modify-write on the accumulator or on memory.
fn modify<M, F>(regs: &mut Registers, memory: &mut M, operand: Operand, f: F)
where
    M: MemoryBus + ?Sized,
    F: FnOnce(&mut Registers, u8) -> u8,
{
    match operand {
        Operand::Accumulator => {
            let value = regs.a;
            regs.a = f(regs, value);
        }
        _ => {
            let addr = address(operand);
            let value = memory.read(addr);
            let result = f(regs, value);
            memory.write(addr, result);
        }
    }
}

/// Applies `instruction`'s semantics to the already-resolved operand.
///
/// `regs.pc` must already hold `resolved.next_pc`. Returns cycles spent beyond the
/// instruction's base cost and page penalty (only branches produce any).
pub(crate) fn execute<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    memory: &mut M,
    instruction: &Instruction,
    resolved: &Resolved,
    bcd_enabled: bool,
) -> u8 {
    let operand = resolved.operand;
    let decimal = bcd_enabled && regs.get_flag(Status::DECIMAL);

    match instruction.operation {
        Operation::Adc => {
            let value = read_operand(regs, memory, operand);
            alu::adc(regs, value, decimal);
        }
        Operation::Sbc => {
            let value = read_operand(regs, memory, operand);
            alu::sbc(regs, value, decimal);
        }
        Operation::And => {
            let value = read_operand(regs, memory, operand);
            alu::and(regs, value);
        }
        Operation::Ora => {
            let value = read_operand(regs, memory, operand);
            alu::ora(regs, value);
        }
        Operation::Eor => {
            let value = read_operand(regs, memory, operand);
            alu::eor(regs, value);
        }
        Operation::Cmp | Operation::Cpx | Operation::Cpy => {
            let value = read_operand(regs, memory, operand);
            let register = match instruction.operation {
                Operation::Cpx => regs.x,
                Operation::Cpy => regs.y,
                _ => regs.a,
            };
            alu::compare(regs, register, value);
        }
        Operation::Bit => {
            let value = read_operand(regs, memory, operand);
            alu::bit(regs, value);
        }

        Operation::Asl => modify(regs, memory, operand, shifts::asl),
        Operation::Lsr => modify(regs, memory, operand, shifts::lsr),
        Operation::Rol => modify(regs, memory, operand, shifts::rol),
        Operation::Ror => modify(regs, memory, operand, shifts::ror),
        Operation::Inc => modify(regs, memory, operand, inc_dec::inc),
        Operation::Dec => modify(regs, memory, operand, inc_dec::dec),

        Operation::Inx => inc_dec::inx(regs),
        Operation::Iny => inc_dec::iny(regs),
        Operation::Dex => inc_dec::dex(regs),
        Operation::Dey => inc_dec::dey(regs),

        Operation::Lda => {
            let value = read_operand(regs, memory, operand);
            load_store::lda(regs, value);
        }
        Operation::Ldx => {
            let value = read_operand(regs, memory, operand);
            load_store::ldx(regs, value);
        }
        Operation::Ldy => {
            let value = read_operand(regs, memory, operand);
            load_store::ldy(regs, value);
        }
        Operation::Sta | Operation::Stx | Operation::Sty => {
            let value = load_store::store_source(regs, instruction.operation);
            memory.write(address(operand), value);
        }

        Operation::Tax => transfer::tax(regs),
        Operation::Tay => transfer::tay(regs),
        Operation::Txa => transfer::txa(regs),
        Operation::Tya => transfer::tya(regs),
        Operation::Tsx => transfer::tsx(regs),
        Operation::Txs => transfer::txs(regs),

        Operation::Pha => stack::pha(regs, memory),
        Operation::Php => stack::php(regs, memory),
        Operation::Pla => stack::pla(regs, memory),
        Operation::Plp => stack::plp(regs, memory),

        Operation::Clc
        | Operation::Sec
        | Operation::Cli
        | Operation::Sei
        | Operation::Clv
        | Operation::Cld
        | Operation::Sed => flags::apply(regs, instruction.operation),

        Operation::Bcc
        | Operation::Bcs
        | Operation::Beq
        | Operation::Bne
        | Operation::Bmi
        | Operation::Bpl
        | Operation::Bvc
        | Operation::Bvs => {
            return branches::branch(
                regs,
                instruction.operation,
                address(operand),
                resolved.page_crossed,
            );
        }

        Operation::Jmp => control::jmp(regs, address(operand)),
        Operation::Jsr => control::jsr(regs, memory, address(operand)),
        Operation::Rts => control::rts(regs, memory),
        Operation::Rti => control::rti(regs, memory),
        Operation::Brk => control::brk(regs, memory),

        Operation::Nop => {}

        // Filtered out by the CPU's illegal-opcode policy before dispatch.
        Operation::Illegal => {}
    }

    0
}

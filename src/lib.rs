//! # scpu: 6502 Instruction-Execution Core
//!
//! A cycle-accurate NMOS 6502 CPU core that executes machine code against a flat
//! 64KB address space.
//!
//! This crate provides the processor register and flag state, a trait-based memory
//! bus abstraction, pure addressing-mode resolvers, and a table-driven dispatcher
//! covering all 151 documented opcodes.
//!
//! ## Quick Start
//!
//! ```rust
//! use scpu::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // ADC #$0A; ADC #$14
//! memory.load(0x8000, &[0x69, 0x0A, 0x69, 0x14]);
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! let mut cpu = CPU::new(memory);
//! cpu.reset();
//!
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 30);
//! assert_eq!(cpu.pc(), 0x8004);
//! assert_eq!(cpu.cycles(), 4);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Dispatch**: every opcode maps to plain data (mode, operation,
//!   size, cycles) in an immutable `InstructionTable`
//! - **Explicit PC threading**: resolvers return the next program counter instead of
//!   mutating the CPU, so they can be tested in isolation
//! - **No global mutable state**: each `CPU` owns its memory and registers; instances
//!   only share the read-only table
//!
//! ## Modules
//!
//! - `cpu` - Fetch/decode/execute and the host-facing state surface
//! - `registers` - Register file and status flags
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Addressing modes and their resolvers
//! - `opcodes` - The 256-entry instruction table
//! - `config` - Per-instance behavior switches

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Instruction semantics (not part of the public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{resolve, AddressingMode, Operand, Resolved};
pub use config::{CpuConfig, IllegalOpcodePolicy};
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, InstructionTable, Operation, OPCODE_TABLE};
pub use registers::{Registers, Status};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// `step` was called before the CPU was brought to a defined state by `reset`.
    #[error("CPU has not been reset")]
    NotReset,

    /// An undocumented opcode was fetched while the `Trap` policy is active.
    ///
    /// The program counter is left pointing at the offending opcode.
    #[error("illegal opcode 0x{opcode:02X} at 0x{address:04X}")]
    IllegalOpcode {
        /// The opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}

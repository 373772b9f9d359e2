//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, then executes a short run
//! of instructions under both illegal-opcode policies looking for panics and
//! broken accounting.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scpu::{CpuConfig, ExecutionError, FlatMemory, IllegalOpcodePolicy, MemoryBus, CPU};

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the reset target (instructions + operands)
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at 0x40FF so indexed modes straddle a page boundary
    main_memory: [u8; 64],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    trap_illegal: bool,
    decimal_mode: bool,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0xFFFE, &[0x00, 0x90]);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x40FF, &input.memory.main_memory);
    memory.load(0x8000, &input.memory.program);

    let policy = if input.trap_illegal {
        IllegalOpcodePolicy::Trap
    } else {
        IllegalOpcodePolicy::Nop
    };
    let config = CpuConfig::default()
        .with_illegal_opcodes(policy)
        .with_decimal_mode(input.decimal_mode);

    let mut cpu = CPU::with_config(memory, config);
    cpu.reset();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..(input.steps % 8) + 1 {
        let before = cpu.cycles();
        let pc = cpu.pc();
        match cpu.step() {
            Ok(cycles) => {
                assert!((1..=7).contains(&cycles));
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(ExecutionError::IllegalOpcode { opcode, address }) => {
                assert!(input.trap_illegal);
                assert_eq!(address, pc);
                assert_eq!(opcode, cpu.memory().read(pc));
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.cycles(), before);
                break;
            }
            Err(ExecutionError::NotReset) => unreachable!("CPU was reset"),
        }
        // Bit 5 of P always reads as 1
        assert_ne!(cpu.status() & 0x20, 0);
    }
});

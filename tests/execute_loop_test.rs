//! Tests for the step loop: error paths, illegal-opcode policies and
//! `run_for_cycles`.

use scpu::{CpuConfig, ExecutionError, FlatMemory, IllegalOpcodePolicy, MemoryBus, CPU};

fn memory_at_8000(program: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    memory
}

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(memory_at_8000(program));
    cpu.reset();
    cpu
}

#[test]
fn test_step_requires_reset() {
    let mut cpu = CPU::new(memory_at_8000(&[0xEA]));

    assert_eq!(cpu.step(), Err(ExecutionError::NotReset));
    assert_eq!(cpu.run_for_cycles(100), Err(ExecutionError::NotReset));

    cpu.reset();
    assert_eq!(cpu.step(), Ok(2));
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu(&[0xEA]);
    let before = cpu.registers();

    assert_eq!(cpu.step(), Ok(2));

    let after = cpu.registers();
    assert_eq!(after.pc, 0x8001);
    assert_eq!(after.a, before.a);
    assert_eq!(after.p, before.p);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_illegal_opcode_traps_by_default() {
    let mut cpu = setup_cpu(&[0xEA, 0x02]);

    cpu.step().unwrap();
    let err = cpu.step().unwrap_err();

    assert_eq!(
        err,
        ExecutionError::IllegalOpcode {
            opcode: 0x02,
            address: 0x8001
        }
    );
    assert_eq!(err.to_string(), "illegal opcode 0x02 at 0x8001");
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);

    // Stays trapped
    assert!(cpu.step().is_err());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_illegal_opcode_as_nop() {
    let config = CpuConfig::default().with_illegal_opcodes(IllegalOpcodePolicy::Nop);
    let mut cpu = CPU::with_config(memory_at_8000(&[0xFF, 0x1A, 0xE8]), config);
    cpu.reset();

    assert_eq!(cpu.step(), Ok(1));
    assert_eq!(cpu.step(), Ok(1));
    assert_eq!(cpu.pc(), 0x8002);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_run_for_cycles_overshoots_to_instruction_boundary() {
    // Four 2-cycle NOPs then LDA absolute (4 cycles)
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0xEA, 0xEA, 0xAD, 0x00, 0x02, 0xEA]);

    assert_eq!(cpu.run_for_cycles(9), Ok(12));
    assert_eq!(cpu.pc(), 0x8007);
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_run_for_cycles_zero_budget() {
    let mut cpu = setup_cpu(&[0xEA]);

    assert_eq!(cpu.run_for_cycles(0), Ok(0));
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_run_for_cycles_stops_at_illegal_opcode() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0x02]);

    assert_eq!(
        cpu.run_for_cycles(100),
        Err(ExecutionError::IllegalOpcode {
            opcode: 0x02,
            address: 0x8002
        })
    );
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_run_for_cycles_unbounded_budget() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0xEA, 0x02]);
    cpu.step().unwrap();

    // The budget saturates instead of wrapping, so the run continues to the trap
    assert_eq!(
        cpu.run_for_cycles(u64::MAX),
        Err(ExecutionError::IllegalOpcode {
            opcode: 0x02,
            address: 0x8003
        })
    );
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_small_program() {
    // Sum 1..=5 into A:
    //   LDX #$05; LDA #$00; CLC
    // loop: STX $10; ADC $10; DEX; BNE loop
    //   STA $0200
    let program = [
        0xA2, 0x05, 0xA9, 0x00, 0x18, 0x86, 0x10, 0x65, 0x10, 0xCA, 0xD0, 0xF9, 0x8D, 0x00,
        0x02,
    ];
    let mut cpu = setup_cpu(&program);

    while cpu.pc() != 0x800F {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 15);
    assert_eq!(cpu.memory().read(0x0200), 15);
    assert_eq!(cpu.x(), 0);
}

#[test]
fn test_pc_wraps_at_end_of_memory() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0xFF, 0xFF]);
    let mut cpu = CPU::new(memory);
    cpu.reset();

    // 0xFFFF holds 0xFF from the vector: force a NOP there instead
    cpu.memory_mut().write(0xFFFF, 0xEA);
    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.pc(), 0x0000);
}

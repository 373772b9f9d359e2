//! Tests for the register transfer instructions.

use scpu::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

#[test]
fn test_tax_sets_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xAA);
    cpu.set_a(0x80);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA8);
    cpu.set_y(0x55);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa_and_tya() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x8A, 0x98]);
    cpu.set_x(0x12);
    cpu.set_y(0xF0);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x12);
    assert!(!cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_reads_stack_pointer() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xBA);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x9A);
    cpu.set_x(0x00);
    let status = cpu.status();

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), status);
    assert!(!cpu.flag_z());
}

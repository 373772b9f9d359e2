//! Tests for the SBC (Subtract with Carry) instruction.

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
fn test_sbc_immediate_no_borrow() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xE9, 0x10]);
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(2));

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_borrow_in() {
    let mut cpu = setup_cpu();

    // Carry clear subtracts one more
    cpu.memory_mut().load(0x8000, &[0xE9, 0x10]);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x3F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xE9, 0x02]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_zero_result() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();

    // 0x80 - 0x01 = 0x7F: negative minus positive gives positive
    cpu.memory_mut().load(0x8000, &[0xE9, 0x01]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_absolute() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x1234, 0x05);
    cpu.memory_mut().load(0x8000, &[0xED, 0x34, 0x12]);
    cpu.set_a(0x08);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x03);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_sbc_decimal_simple() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xE9, 0x12]);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x46);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_borrow() {
    let mut cpu = setup_cpu();

    // 12 - 21 = -9 -> 91 with borrow
    cpu.memory_mut().load(0x8000, &[0xE9, 0x21]);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x91);
    assert!(!cpu.flag_c());
}

//! Tests for the bitwise instructions: AND, ORA, EOR and BIT.

use scpu::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

// ========== AND ==========

#[test]
fn test_and_immediate_zero_result() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x29, 0x0F]);
    cpu.set_a(0x50);

    assert_eq!(cpu.step(), Ok(2));

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_and_negative_result() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x29, 0xF0]);
    cpu.set_a(0xAA);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_and_leaves_carry_and_overflow() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x29, 0xFF]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

#[test]
fn test_and_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // $F0,X with X = 0x20 reads 0x0010, not 0x0110
    cpu.memory_mut().write(0x0010, 0x3C);
    cpu.memory_mut().write(0x0110, 0xFF);
    cpu.memory_mut().load(0x8000, &[0x35, 0xF0]);
    cpu.set_x(0x20);
    cpu.set_a(0xFF);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x3C);
}

// ========== ORA ==========

#[test]
fn test_ora_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x09, 0x81]);
    cpu.set_a(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x91);
    assert!(cpu.flag_n());
}

#[test]
fn test_ora_absolute() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x2000, 0x00);
    cpu.memory_mut().load(0x8000, &[0x0D, 0x00, 0x20]);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

// ========== EOR ==========

#[test]
fn test_eor_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x49, 0xFF]);
    cpu.set_a(0x0F);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_with_self_is_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0030, 0x5A);
    cpu.memory_mut().load(0x8000, &[0x45, 0x30]);
    cpu.set_a(0x5A);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

// ========== BIT ==========

#[test]
fn test_bit_copies_high_bits_of_memory() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0040, 0xC0);
    cpu.memory_mut().load(0x8000, &[0x24, 0x40]);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), Ok(3));

    assert!(cpu.flag_z());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    // Accumulator is not modified
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_absolute_nonzero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x3000, 0x01);
    cpu.memory_mut().load(0x8000, &[0x2C, 0x00, 0x30]);
    cpu.set_a(0x01);
    cpu.set_flag_v(true);
    cpu.set_flag_n(true);

    assert_eq!(cpu.step(), Ok(4));

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

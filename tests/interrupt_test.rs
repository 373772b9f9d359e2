//! Tests for IRQ and NMI entry.

use scpu::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0xFFFA, &[0x00, 0xA0]); // NMI -> 0xA000
    memory.load(0xFFFE, &[0x00, 0x90]); // IRQ -> 0x9000
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

#[test]
fn test_irq_masked_by_interrupt_disable() {
    let mut cpu = setup_cpu();
    cpu.set_flag_i(true);

    assert_eq!(cpu.irq(), Ok(false));
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_irq_frame() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x8123);
    cpu.set_flag_c(true);

    assert_eq!(cpu.irq(), Ok(true));

    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 7);
    assert_eq!(cpu.memory().read(0x01FD), 0x81);
    assert_eq!(cpu.memory().read(0x01FC), 0x23);
    // Hardware interrupts push B clear
    assert_eq!(cpu.memory().read(0x01FB), 0b0010_0001);
}

#[test]
fn test_nmi_not_masked() {
    let mut cpu = setup_cpu();
    cpu.set_flag_i(true);

    assert_eq!(cpu.nmi(), Ok(()));
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_irq_handler_returns_with_rti() {
    let mut cpu = setup_cpu();

    // Main: NOP. Handler: INX; RTI
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA]);
    cpu.memory_mut().load(0x9000, &[0xE8, 0x40]);

    cpu.step().unwrap();
    cpu.irq().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 2 + 7 + 2 + 6);
}

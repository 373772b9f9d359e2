//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y), stack pointer (SP),
//!   program counter (PC) and the packed status register (P)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Memory**: the bus it exclusively owns
//! - **Instruction table**: a shared, immutable `&'static InstructionTable`
//!
//! ## Lifecycle
//!
//! A freshly constructed CPU is *uninitialized*: `step()` fails with
//! `ExecutionError::NotReset` until `reset()` has loaded PC from the reset vector.
//! After that, every `step()` runs one instruction to completion:
//!
//! 1. Fetch the opcode at PC and advance PC by one
//! 2. Look up the descriptor in the instruction table
//! 3. Apply the illegal-opcode policy if the opcode is undocumented
//! 4. Resolve the operand (which yields the next PC)
//! 5. Apply the instruction semantics
//! 6. Charge base cycles + page-crossing penalty + branch penalty

use log::{debug, trace, warn};

use crate::addressing::resolve;
use crate::config::{CpuConfig, IllegalOpcodePolicy};
use crate::instructions::{self, control};
use crate::opcodes::{InstructionTable, OPCODE_TABLE};
use crate::{ExecutionError, MemoryBus, Registers, Status};

/// Cycles taken to enter an IRQ or NMI handler.
const INTERRUPT_CYCLES: u64 = 7;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use scpu::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset();
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), 0b0010_0000); // only the unused bit
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Total CPU cycles executed since the last reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Opcode dispatch table
    table: &'static InstructionTable,

    /// Behavior switches
    config: CpuConfig,

    /// Set once `reset()` has established a defined state
    initialized: bool,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates an uninitialized CPU that owns `memory`, using the default
    /// configuration and the NMOS instruction table.
    ///
    /// Call [`CPU::reset`] before stepping.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates an uninitialized CPU with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            cycles: 0,
            memory,
            table: &OPCODE_TABLE,
            config,
            initialized: false,
        }
    }

    /// Brings the CPU to its defined startup state.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFD
    /// - A, X and Y are cleared
    /// - Only the unused status bit is set
    /// - The cycle counter is zeroed
    ///
    /// Calling it again with unchanged memory yields the same state.
    pub fn reset(&mut self) {
        let pc = self.memory.read_word(control::RESET_VECTOR);
        self.regs = Registers::power_on(pc);
        self.cycles = 0;
        self.initialized = true;
        debug!("reset: PC=${:04X}", pc);
    }

    /// Returns true once `reset()` has been called.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Executes one instruction and returns the number of cycles it took.
    ///
    /// # Errors
    ///
    /// - `ExecutionError::NotReset` if the CPU has never been reset
    /// - `ExecutionError::IllegalOpcode` for an undocumented opcode under
    ///   `IllegalOpcodePolicy::Trap`; PC stays at the opcode and no cycles are charged
    ///
    /// # Examples
    ///
    /// ```
    /// use scpu::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // undocumented
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Err(ExecutionError::NotReset));
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if !self.initialized {
            return Err(ExecutionError::NotReset);
        }

        // Fetch
        let opcode_addr = self.regs.pc;
        let opcode = self.memory.read(opcode_addr);

        // Decode
        let table = self.table;
        let instruction = table.get(opcode);

        if instruction.is_illegal() {
            return match self.config.illegal_opcodes {
                IllegalOpcodePolicy::Trap => {
                    debug!("illegal opcode ${:02X} at ${:04X}", opcode, opcode_addr);
                    Err(ExecutionError::IllegalOpcode {
                        opcode,
                        address: opcode_addr,
                    })
                }
                IllegalOpcodePolicy::Nop => {
                    warn!(
                        "illegal opcode ${:02X} at ${:04X} executed as NOP",
                        opcode, opcode_addr
                    );
                    self.regs.pc = opcode_addr.wrapping_add(1);
                    self.cycles += 1;
                    Ok(1)
                }
            };
        }

        trace!(
            "{:04X}  {:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            opcode_addr,
            opcode,
            instruction.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.p.bits(),
            self.regs.sp
        );

        self.regs.pc = opcode_addr.wrapping_add(1);

        // Resolve operand
        let resolved = resolve(instruction.mode, &self.regs, &self.memory);
        self.regs.pc = resolved.next_pc;

        // Execute
        let extra = instructions::execute(
            &mut self.regs,
            &mut self.memory,
            instruction,
            &resolved,
            self.config.decimal_mode,
        );

        let page_penalty = (instruction.page_penalty && resolved.page_crossed) as u8;
        let cycles = instruction.cycles + page_penalty + extra;
        self.cycles += cycles as u64;

        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes whole instructions until at least `cycle_budget` cycles have elapsed
    /// and returns the cycles actually consumed (may overshoot by part of an
    /// instruction). Stops at the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scpu::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset();
    /// assert_eq!(cpu.run_for_cycles(9), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        if !self.initialized {
            return Err(ExecutionError::NotReset);
        }

        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Signals the maskable interrupt line.
    ///
    /// If the I flag is clear, pushes PC and P (B clear), sets I, loads PC from
    /// 0xFFFE/0xFFFF and charges 7 cycles. Returns whether the interrupt was taken.
    pub fn irq(&mut self) -> Result<bool, ExecutionError> {
        if !self.initialized {
            return Err(ExecutionError::NotReset);
        }
        if self.regs.get_flag(Status::INTERRUPT_DISABLE) {
            return Ok(false);
        }
        self.interrupt(control::IRQ_VECTOR);
        Ok(true)
    }

    /// Signals the non-maskable interrupt line. Always taken.
    pub fn nmi(&mut self) -> Result<(), ExecutionError> {
        if !self.initialized {
            return Err(ExecutionError::NotReset);
        }
        self.interrupt(control::NMI_VECTOR);
        Ok(())
    }

    fn interrupt(&mut self, vector: u16) {
        let from = self.regs.pc;
        control::enter_interrupt(&mut self.regs, &mut self.memory, vector, false);
        self.cycles += INTERRUPT_CYCLES;
        debug!(
            "interrupt via ${:04X}: ${:04X} -> ${:04X}",
            vector, from, self.regs.pc
        );
    }

    // ========== Memory Access ==========

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus, for loaders and test harnesses.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Register Getters ==========

    /// Returns a snapshot of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.regs.p.bits()
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Access ==========

    /// Returns true if `flag` is set.
    pub fn get_flag(&self, flag: Status) -> bool {
        self.regs.get_flag(flag)
    }

    /// Sets or clears `flag`, leaving the other bits unchanged.
    ///
    /// The unused bit cannot be cleared.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.regs.set_flag(flag - Status::UNUSED, value);
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.get_flag(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.get_flag(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.get_flag(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.get_flag(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.get_flag(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.get_flag(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.get_flag(Status::CARRY)
    }

    // ========== State Setters (debuggers / test harnesses) ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Replaces the status register; bit 5 is forced to 1.
    pub fn set_status(&mut self, value: u8) {
        self.regs.set_status(value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.set_flag(Status::NEGATIVE, value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.set_flag(Status::OVERFLOW, value);
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.set_flag(Status::BREAK, value);
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.set_flag(Status::DECIMAL, value);
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.set_flag(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.set_flag(Status::ZERO, value);
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.set_flag(Status::CARRY, value);
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("regs", &self.regs)
            .field("cycles", &self.cycles)
            .field("config", &self.config)
            .field("initialized", &self.initialized)
            .finish()
    }
}

//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for loading memory, reset, stepping and
//! state inspection.

use crate::{FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ExecutionError> for JsError {
    fn from(err: crate::ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with zeroed 64KB memory. Call `reset()` after loading.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Execute a single instruction, returning the cycles it took
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute at least `cycles` cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        let consumed = self.cpu.run_for_cycles(cycles as u64)?;
        Ok(consumed as u32)
    }

    /// Reset the CPU from the vector at $FFFC/$FFFD. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Signal IRQ; returns false if masked by the I flag
    pub fn irq(&mut self) -> Result<bool, JsError> {
        Ok(self.cpu.irq()?)
    }

    /// Signal NMI
    pub fn nmi(&mut self) -> Result<(), JsError> {
        Ok(self.cpu.nmi()?)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy bytes into memory starting at `start`
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        self.cpu.memory_mut().load(start, bytes);
    }

    /// Copy `len` bytes of memory starting at `start` (wrapping at $FFFF)
    pub fn memory_slice(&self, start: u16, len: u32) -> js_sys::Uint8Array {
        let bytes: Vec<u8> = (0..len.min(0x10000))
            .map(|i| self.cpu.memory().read(start.wrapping_add(i as u16)))
            .collect();
        js_sys::Uint8Array::from(&bytes[..])
    }
}

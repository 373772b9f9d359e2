//! # CPU Configuration
//!
//! Per-instance switches that pick between behaviors real hardware resolves
//! structurally. A `CpuConfig` is fixed when the CPU is built.

/// What `step` does when it fetches one of the 105 undocumented NMOS opcodes.
///
/// The chosen policy applies to every undocumented opcode alike; none of them is
/// aliased to a documented instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodePolicy {
    /// Stop and report `ExecutionError::IllegalOpcode`.
    ///
    /// PC is left at the opcode's address and no cycles are charged, so the host can
    /// inspect or patch the program and step again.
    #[default]
    Trap,

    /// Treat the opcode as a one-byte, one-cycle no-op.
    Nop,
}

/// Behavior switches for a `CPU` instance.
///
/// # Examples
///
/// ```
/// use scpu::{CpuConfig, IllegalOpcodePolicy};
///
/// let config = CpuConfig::default()
///     .with_illegal_opcodes(IllegalOpcodePolicy::Nop)
///     .with_decimal_mode(false);
///
/// assert_eq!(config.illegal_opcodes, IllegalOpcodePolicy::Nop);
/// assert!(!config.decimal_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Handling of undocumented opcodes.
    pub illegal_opcodes: IllegalOpcodePolicy,

    /// Whether ADC/SBC honor the D flag.
    ///
    /// Some 6502 derivatives (the NES 2A03, for one) have the BCD adder cut out; the
    /// flag is still stored and pushed but arithmetic stays binary.
    pub decimal_mode: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            illegal_opcodes: IllegalOpcodePolicy::Trap,
            decimal_mode: true,
        }
    }
}

impl CpuConfig {
    /// Sets the undocumented-opcode policy.
    pub fn with_illegal_opcodes(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_opcodes = policy;
        self
    }

    /// Enables or disables BCD arithmetic.
    pub fn with_decimal_mode(mut self, enabled: bool) -> Self {
        self.decimal_mode = enabled;
        self
    }
}

//! WebAssembly bindings for the scpu core.
//!
//! Exposes a `CPU<FlatMemory>` to JavaScript hosts (tracers, debuggers, browser
//! test harnesses). Only compiled with the `wasm` feature.

pub mod api;

pub use api::Emulator6502;

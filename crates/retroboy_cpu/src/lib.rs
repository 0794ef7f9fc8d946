//! Instruction core of the Game Boy CPU (a Z80/8080 derivative, SM83)
//! together with its interrupt controller.
//!
//! The core owns no memory. Hosts lend a [`Bus`] to [`Cpu::step`] and
//! drive their own peripherals from the cycle counter it exposes.

pub mod config;
pub mod cpu;
pub mod disasm;
pub mod error;
pub mod trace;

pub use config::{BootState, CpuConfig};
pub use cpu::{
    Bus, Cpu, Flag, FlatBus, InterruptFlags, InterruptSource, InterruptState, Registers,
};
pub use error::CpuError;
pub use trace::TraceEntry;

/// Address of the pending-interrupt register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the interrupt-enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;

mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;


pub use bus::{Bus, FlatBus};
pub use interrupts::{InterruptFlags, InterruptSource, InterruptState};
pub use regs::{Flag, Registers};

use crate::config::CpuConfig;

/// Game Boy CPU core: register file, interrupt controller and the
/// HALT/STOP state machine.
///
/// A `Cpu` is a plain value owned by the host. Every mutation goes through
/// [`Cpu::step`], [`Cpu::request_interrupt`], [`Cpu::enable_interrupts`]
/// or a CPU access to IF/IE, so two hosts never share hidden state.
#[derive(Clone, Debug)]
pub struct Cpu {
    regs: Registers,
    interrupts: InterruptState,
    halted: bool,
    /// Terminal state entered by STOP or by fetching an opcode hole. Only
    /// `reset` leaves it.
    stopped: bool,
    /// Set by HALT when IME is clear and an interrupt is already pending.
    /// The next opcode fetch then reads the byte after HALT without
    /// advancing PC, so that byte runs twice.
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    cycles: u64,
    config: CpuConfig,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.test_flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.assign_flag(flag, value);
    }

    #[inline]
    pub(crate) fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    #[inline]
    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    #[inline]
    pub fn interrupts(&self) -> &InterruptState {
        &self.interrupts
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.interrupts.ime
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Total T-cycles consumed since the last reset. Hosts diff this value
    /// between steps to drive timer, PPU and APU.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }
}

#[cfg(feature = "test-utils")]
impl Cpu {
    /// Direct register access for tests and debuggers.
    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn set_ime(&mut self, ime: bool) {
        self.interrupts.ime = ime;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }
}

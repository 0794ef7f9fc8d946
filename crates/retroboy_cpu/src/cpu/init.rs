use super::{Cpu, InterruptState, Registers};
use crate::config::{BootState, CpuConfig};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            interrupts: InterruptState::default(),
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            cycles: 0,
            config,
        };
        cpu.reset();
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Clears IE, IF, IME, HALT, STOP and the cycle counter, then loads the
    /// registers for the configured [`BootState`]. This is the only way out
    /// of STOP.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.interrupts = InterruptState::default();
        self.halted = false;
        self.stopped = false;
        self.halt_bug = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.cycles = 0;

        if self.config.boot_state == BootState::DmgPostBoot {
            self.apply_dmg_boot_state();
        }
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code.
    ///
    /// These values follow Pan Docs. IME is clear at 0x0100; the game
    /// enables interrupts via EI/RETI as needed.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.set_f(0xB0); // Z, N, H, C = 1,0,1,1
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}

use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_halt(&mut self) -> u32 {
        if !self.interrupts.ime && self.interrupts.pending().bits() != 0 {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU does not halt, and the next opcode fetch does not
            // increment PC.
            log::debug!(
                "GB CPU HALT bug at PC=0x{:04X}",
                self.regs.pc.wrapping_sub(1)
            );
            self.halt_bug = true;
            return 4;
        }

        log::debug!("GB CPU halted at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
        4
    }

    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is a 2-byte instruction; the second byte is padding and is
        // fetched and discarded so that PC matches hardware.
        let _padding = self.fetch8(bus);

        log::debug!("GB CPU stopped at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.stopped = true;
        self.halted = false;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.interrupts.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        if self.config.ei_delay {
            // IME becomes 1 after the *next* instruction completes.
            self.ime_enable_pending = true;
        } else {
            self.interrupts.ime = true;
        }
        4
    }
}

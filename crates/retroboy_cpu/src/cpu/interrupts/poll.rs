use super::super::Cpu;
use super::{InterruptFlags, InterruptSource};

impl Cpu {
    /// Raise `source` in IF. Idempotent, and wakes the CPU from HALT
    /// whether or not IME is set.
    ///
    /// Called by the host on behalf of the PPU, timer, serial port and
    /// joypad.
    pub fn request_interrupt(&mut self, source: InterruptSource) {
        self.interrupts.ifr |= source.flag().bits();
        self.halted = false;

        log::trace!(
            "Requested {} interrupt | IME: {} IE: {:02X} IF: {:02X}",
            source.name(),
            u8::from(self.interrupts.ime),
            self.interrupts.ie,
            self.interrupts.ifr,
        );
    }

    /// Assign IE, as a write to 0xFFFF does.
    pub fn enable_interrupts(&mut self, mask: u8) {
        self.interrupts.ie = mask;

        if log::log_enabled!(log::Level::Trace) {
            let enabled = InterruptFlags::from_bits_truncate(mask);
            log::trace!("-> IE: {mask:02X} {enabled:?}");
        }
    }

    /// Host-side view of IF/IE. `None` if `addr` is not interrupt-mapped.
    #[inline]
    pub fn read_interrupt_register(&self, addr: u16) -> Option<u8> {
        self.interrupts.read_register(addr)
    }

    /// Host-side write to IF/IE. Returns `false` if `addr` is not
    /// interrupt-mapped.
    #[inline]
    pub fn write_interrupt_register(&mut self, addr: u16, value: u8) -> bool {
        self.interrupts.write_register(addr, value)
    }

    /// Leave HALT if any enabled line is requested, even with IME clear.
    /// Returns whether the CPU is (still) halted.
    pub(in crate::cpu) fn poll_halt_wakeup(&mut self) -> bool {
        if self.halted && !self.interrupts.pending().is_empty() {
            log::debug!(
                "GB CPU leaving HALT: IE=0x{:02X} IF=0x{:02X}",
                self.interrupts.ie,
                self.interrupts.ifr
            );
            self.halted = false;
        }
        self.halted
    }
}

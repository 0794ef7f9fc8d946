use super::super::{Bus, Cpu};

/// Cost of dispatching to an interrupt handler.
pub(in crate::cpu) const INTERRUPT_DISPATCH_CYCLES: u32 = 20;

impl Cpu {
    /// Service the highest-priority pending interrupt if IME is set.
    ///
    /// Pushes PC, clears that source's IF bit and IME (dropping any EI
    /// still in flight), leaves HALT and jumps to the source's vector. Exactly one source is serviced per
    /// call; the rest stay pending for the next check.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None`
    /// otherwise. `step` calls this before every fetch; hosts may call it
    /// directly.
    pub fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.interrupts.ime {
            return None;
        }
        let source = self.interrupts.highest_pending()?;

        // A pending EI is cancelled, so IME stays clear inside the handler.
        self.interrupts.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.halted = false;

        // With the HALT bug armed PC already points past HALT; the handler
        // returns to HALT itself.
        let pc = if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        self.push_u16(bus, pc);

        self.interrupts.ifr &= !source.flag().bits();
        self.regs.pc = source.vector();
        self.cycles += INTERRUPT_DISPATCH_CYCLES as u64;

        log::debug!(
            "GB CPU interrupt {} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X} cycles={}",
            source.name(),
            source.vector(),
            pc,
            self.regs.sp,
            self.interrupts.ifr,
            self.interrupts.ie,
            self.cycles,
        );

        Some(INTERRUPT_DISPATCH_CYCLES)
    }
}

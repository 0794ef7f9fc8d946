use super::{Bus, Cpu};
use crate::error::CpuError;
use crate::trace::TraceEntry;

/// Cost of the 0xCB prefix byte, charged on top of the CB table.
pub(super) const CB_PREFIX_CYCLES: u32 = 4;

/// A fully fetched opcode: either a primary byte or the byte that followed
/// a 0xCB prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Opcode {
    Primary(u8),
    Prefixed(u8),
}

impl Cpu {
    /// Execute one instruction (or one idle HALT tick) and return the
    /// number of T-cycles it consumed, including interrupt dispatch.
    ///
    /// Once the core is stopped this is a no-op returning `Ok(0)`. Fetching
    /// an opcode hole stops the core and returns the error once. If an
    /// interrupt was dispatched earlier in that same step, its 20 cycles
    /// are already in [`Cpu::cycles`] even though the step returns `Err`.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        self.step_with_trace(bus, |_| {})
    }

    /// Same as [`Cpu::step`], handing `trace` a [`TraceEntry`] after the
    /// opcode is fetched and before it executes.
    pub fn step_with_trace<B, F>(&mut self, bus: &mut B, mut trace: F) -> Result<u32, CpuError>
    where
        B: Bus,
        F: FnMut(&TraceEntry),
    {
        if self.stopped {
            return Ok(0);
        }

        if self.poll_halt_wakeup() {
            // In HALT the CPU idles until an interrupt is requested.
            let cycles = self.config.halt_tick_cycles;
            self.cycles += cycles as u64;
            return Ok(cycles);
        }

        let dispatch = self.service_interrupts(bus).unwrap_or(0);

        let opcode_pc = self.regs.pc;
        let opcode = self.fetch_opcode(bus);

        let entry = self.trace_entry(opcode_pc, opcode);
        log::trace!("{entry}");
        trace(&entry);

        let cycles = match opcode {
            Opcode::Primary(op) => self.exec_opcode(bus, op, opcode_pc)?,
            Opcode::Prefixed(cb) => CB_PREFIX_CYCLES + self.exec_cb(bus, cb),
        };

        self.apply_ime_delay();
        self.cycles += cycles as u64;
        Ok(dispatch + cycles)
    }

    fn fetch_opcode<B: Bus>(&mut self, bus: &mut B) -> Opcode {
        match self.fetch8(bus) {
            0xCB => Opcode::Prefixed(self.fetch8(bus)),
            op => Opcode::Primary(op),
        }
    }

    fn trace_entry(&self, pc: u16, opcode: Opcode) -> TraceEntry {
        let (opcode, cb_opcode) = match opcode {
            Opcode::Primary(op) => (op, None),
            Opcode::Prefixed(cb) => (0xCB, Some(cb)),
        };
        TraceEntry {
            pc,
            opcode,
            cb_opcode,
            regs: self.regs,
            ime: self.interrupts.ime,
            ie: self.interrupts.ie,
            ifr: self.interrupts.ifr,
            cycles: self.cycles,
        }
    }
}

use std::fmt;

use crate::cpu::Registers;
use crate::disasm;

/// Snapshot handed to a trace hook right before an instruction executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// Address the opcode byte was fetched from.
    pub pc: u16,
    pub opcode: u8,
    /// Second byte of a 0xCB-prefixed instruction.
    pub cb_opcode: Option<u8>,
    /// Registers before execution. `regs.pc` already points past the
    /// opcode byte(s).
    pub regs: Registers,
    pub ime: bool,
    pub ie: u8,
    pub ifr: u8,
    /// Cumulative cycle count before execution.
    pub cycles: u64,
}

impl TraceEntry {
    pub fn mnemonic(&self) -> &'static str {
        match self.cb_opcode {
            Some(cb) => disasm::cb_mnemonic(cb),
            None => disasm::mnemonic(self.opcode),
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        write!(
            f,
            "A: {:02X} B: {:02X} C: {:02X} D: {:02X} E: {:02X} H: {:02X} L: {:02X} | F: {:02X} PC: {:04X} SP: {:04X} IME: {} IE: {:02X} IF: {:02X} Cycles: {} | ",
            r.a,
            r.b,
            r.c,
            r.d,
            r.e,
            r.h,
            r.l,
            r.f,
            self.pc,
            r.sp,
            u8::from(self.ime),
            self.ie,
            self.ifr,
            self.cycles,
        )?;
        match self.cb_opcode {
            Some(cb) => write!(f, "CB {cb:02X} | {}", self.mnemonic()),
            None => write!(f, "{:02X} | {}", self.opcode, self.mnemonic()),
        }
    }
}

use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc8_reg<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);

        if reg == 6 { 12 } else { 4 }
    }

    pub(super) fn exec_dec8_reg<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);

        if reg == 6 { 12 } else { 4 }
    }

    /// Shared body of INC rr / DEC rr. Flags are untouched.
    fn step_pair(&mut self, opcode: u8, delta: i16) {
        let apply = |value: u16| value.wrapping_add(delta as u16);
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(apply(self.regs.bc())),
            1 => self.regs.set_de(apply(self.regs.de())),
            2 => self.regs.set_hl(apply(self.regs.hl())),
            _ => self.regs.sp = apply(self.regs.sp),
        }
    }

    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        self.step_pair(opcode, 1);
        8
    }

    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        self.step_pair(opcode, -1);
        8
    }
}

use super::alu::ShiftOp;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute a CB-prefixed opcode (rotates, shifts and bit operations).
    ///
    /// The returned cost excludes the prefix byte, which the caller adds.
    /// Every one of the 256 values is defined:
    /// - `x=0`: rotate/shift `y` applied to operand `z`
    /// - `x=1`: BIT y,z
    /// - `x=2`: RES y,z
    /// - `x=3`: SET y,z
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, cb: u8) -> u32 {
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z);

        match cb >> 6 {
            0 => {
                let result = self.alu_shift(ShiftOp::decode(cb), value);
                self.write_reg8(bus, z, result);
                if z == 6 { 12 } else { 4 }
            }
            1 => {
                // BIT only reads, so (HL) costs one access less.
                self.alu_bit(y, value);
                if z == 6 { 8 } else { 4 }
            }
            2 => {
                self.write_reg8(bus, z, value & !(1 << y));
                if z == 6 { 12 } else { 4 }
            }
            _ => {
                self.write_reg8(bus, z, value | (1 << y));
                if z == 6 { 12 } else { 4 }
            }
        }
    }
}

//! Instruction labels and memory dumps for tracing and diagnostics.

use crate::cpu::Bus;

/// Label for a primary opcode. The eleven opcode holes read `ILLEGAL`.
pub fn mnemonic(opcode: u8) -> &'static str {
    MNEMONICS[opcode as usize]
}

/// Label for the byte following a 0xCB prefix.
pub fn cb_mnemonic(opcode: u8) -> &'static str {
    CB_MNEMONICS[opcode as usize]
}

/// Hex dump of `len` bytes from `start`, eight bytes per line, each line
/// prefixed with its address.
///
/// Reads go straight to `bus`, so IF/IE show the bus's backing bytes
/// rather than the interrupt controller.
pub fn dump_memory<B: Bus>(bus: &mut B, start: u16, len: u16) -> String {
    let mut out = String::new();
    for row in 0..len.div_ceil(8) {
        let base = start.wrapping_add(row * 8);
        let bytes: Vec<String> = (0..8u16.min(len - row * 8))
            .map(|col| format!("{:02X}", bus.read8(base.wrapping_add(col))))
            .collect();
        out.push_str(&format!("{base:04X}: {}\n", bytes.join(" ")));
    }
    out
}

const MNEMONICS: [&str; 256] = [
    "NOP", "LD BC,d16", "LD (BC),A", "INC BC", // 0x00
    "INC B", "DEC B", "LD B,d8", "RLCA", // 0x04
    "LD (a16),SP", "ADD HL,BC", "LD A,(BC)", "DEC BC", // 0x08
    "INC C", "DEC C", "LD C,d8", "RRCA", // 0x0C
    "STOP", "LD DE,d16", "LD (DE),A", "INC DE", // 0x10
    "INC D", "DEC D", "LD D,d8", "RLA", // 0x14
    "JR r8", "ADD HL,DE", "LD A,(DE)", "DEC DE", // 0x18
    "INC E", "DEC E", "LD E,d8", "RRA", // 0x1C
    "JR NZ,r8", "LD HL,d16", "LD (HL+),A", "INC HL", // 0x20
    "INC H", "DEC H", "LD H,d8", "DAA", // 0x24
    "JR Z,r8", "ADD HL,HL", "LD A,(HL+)", "DEC HL", // 0x28
    "INC L", "DEC L", "LD L,d8", "CPL", // 0x2C
    "JR NC,r8", "LD SP,d16", "LD (HL-),A", "INC SP", // 0x30
    "INC (HL)", "DEC (HL)", "LD (HL),d8", "SCF", // 0x34
    "JR C,r8", "ADD HL,SP", "LD A,(HL-)", "DEC SP", // 0x38
    "INC A", "DEC A", "LD A,d8", "CCF", // 0x3C
    "LD B,B", "LD B,C", "LD B,D", "LD B,E", // 0x40
    "LD B,H", "LD B,L", "LD B,(HL)", "LD B,A", // 0x44
    "LD C,B", "LD C,C", "LD C,D", "LD C,E", // 0x48
    "LD C,H", "LD C,L", "LD C,(HL)", "LD C,A", // 0x4C
    "LD D,B", "LD D,C", "LD D,D", "LD D,E", // 0x50
    "LD D,H", "LD D,L", "LD D,(HL)", "LD D,A", // 0x54
    "LD E,B", "LD E,C", "LD E,D", "LD E,E", // 0x58
    "LD E,H", "LD E,L", "LD E,(HL)", "LD E,A", // 0x5C
    "LD H,B", "LD H,C", "LD H,D", "LD H,E", // 0x60
    "LD H,H", "LD H,L", "LD H,(HL)", "LD H,A", // 0x64
    "LD L,B", "LD L,C", "LD L,D", "LD L,E", // 0x68
    "LD L,H", "LD L,L", "LD L,(HL)", "LD L,A", // 0x6C
    "LD (HL),B", "LD (HL),C", "LD (HL),D", "LD (HL),E", // 0x70
    "LD (HL),H", "LD (HL),L", "HALT", "LD (HL),A", // 0x74
    "LD A,B", "LD A,C", "LD A,D", "LD A,E", // 0x78
    "LD A,H", "LD A,L", "LD A,(HL)", "LD A,A", // 0x7C
    "ADD A,B", "ADD A,C", "ADD A,D", "ADD A,E", // 0x80
    "ADD A,H", "ADD A,L", "ADD A,(HL)", "ADD A,A", // 0x84
    "ADC A,B", "ADC A,C", "ADC A,D", "ADC A,E", // 0x88
    "ADC A,H", "ADC A,L", "ADC A,(HL)", "ADC A,A", // 0x8C
    "SUB B", "SUB C", "SUB D", "SUB E", // 0x90
    "SUB H", "SUB L", "SUB (HL)", "SUB A", // 0x94
    "SBC A,B", "SBC A,C", "SBC A,D", "SBC A,E", // 0x98
    "SBC A,H", "SBC A,L", "SBC A,(HL)", "SBC A,A", // 0x9C
    "AND B", "AND C", "AND D", "AND E", // 0xA0
    "AND H", "AND L", "AND (HL)", "AND A", // 0xA4
    "XOR B", "XOR C", "XOR D", "XOR E", // 0xA8
    "XOR H", "XOR L", "XOR (HL)", "XOR A", // 0xAC
    "OR B", "OR C", "OR D", "OR E", // 0xB0
    "OR H", "OR L", "OR (HL)", "OR A", // 0xB4
    "CP B", "CP C", "CP D", "CP E", // 0xB8
    "CP H", "CP L", "CP (HL)", "CP A", // 0xBC
    "RET NZ", "POP BC", "JP NZ,a16", "JP a16", // 0xC0
    "CALL NZ,a16", "PUSH BC", "ADD A,d8", "RST 00H", // 0xC4
    "RET Z", "RET", "JP Z,a16", "PREFIX CB", // 0xC8
    "CALL Z,a16", "CALL a16", "ADC A,d8", "RST 08H", // 0xCC
    "RET NC", "POP DE", "JP NC,a16", "ILLEGAL", // 0xD0
    "CALL NC,a16", "PUSH DE", "SUB d8", "RST 10H", // 0xD4
    "RET C", "RETI", "JP C,a16", "ILLEGAL", // 0xD8
    "CALL C,a16", "ILLEGAL", "SBC A,d8", "RST 18H", // 0xDC
    "LDH (a8),A", "POP HL", "LD (C),A", "ILLEGAL", // 0xE0
    "ILLEGAL", "PUSH HL", "AND d8", "RST 20H", // 0xE4
    "ADD SP,r8", "JP (HL)", "LD (a16),A", "ILLEGAL", // 0xE8
    "ILLEGAL", "ILLEGAL", "XOR d8", "RST 28H", // 0xEC
    "LDH A,(a8)", "POP AF", "LD A,(C)", "DI", // 0xF0
    "ILLEGAL", "PUSH AF", "OR d8", "RST 30H", // 0xF4
    "LD HL,SP+r8", "LD SP,HL", "LD A,(a16)", "EI", // 0xF8
    "ILLEGAL", "ILLEGAL", "CP d8", "RST 38H", // 0xFC
];

const CB_MNEMONICS: [&str; 256] = [
    "RLC B", "RLC C", "RLC D", "RLC E", // 0x00
    "RLC H", "RLC L", "RLC (HL)", "RLC A", // 0x04
    "RRC B", "RRC C", "RRC D", "RRC E", // 0x08
    "RRC H", "RRC L", "RRC (HL)", "RRC A", // 0x0C
    "RL B", "RL C", "RL D", "RL E", // 0x10
    "RL H", "RL L", "RL (HL)", "RL A", // 0x14
    "RR B", "RR C", "RR D", "RR E", // 0x18
    "RR H", "RR L", "RR (HL)", "RR A", // 0x1C
    "SLA B", "SLA C", "SLA D", "SLA E", // 0x20
    "SLA H", "SLA L", "SLA (HL)", "SLA A", // 0x24
    "SRA B", "SRA C", "SRA D", "SRA E", // 0x28
    "SRA H", "SRA L", "SRA (HL)", "SRA A", // 0x2C
    "SWAP B", "SWAP C", "SWAP D", "SWAP E", // 0x30
    "SWAP H", "SWAP L", "SWAP (HL)", "SWAP A", // 0x34
    "SRL B", "SRL C", "SRL D", "SRL E", // 0x38
    "SRL H", "SRL L", "SRL (HL)", "SRL A", // 0x3C
    "BIT 0,B", "BIT 0,C", "BIT 0,D", "BIT 0,E", // 0x40
    "BIT 0,H", "BIT 0,L", "BIT 0,(HL)", "BIT 0,A", // 0x44
    "BIT 1,B", "BIT 1,C", "BIT 1,D", "BIT 1,E", // 0x48
    "BIT 1,H", "BIT 1,L", "BIT 1,(HL)", "BIT 1,A", // 0x4C
    "BIT 2,B", "BIT 2,C", "BIT 2,D", "BIT 2,E", // 0x50
    "BIT 2,H", "BIT 2,L", "BIT 2,(HL)", "BIT 2,A", // 0x54
    "BIT 3,B", "BIT 3,C", "BIT 3,D", "BIT 3,E", // 0x58
    "BIT 3,H", "BIT 3,L", "BIT 3,(HL)", "BIT 3,A", // 0x5C
    "BIT 4,B", "BIT 4,C", "BIT 4,D", "BIT 4,E", // 0x60
    "BIT 4,H", "BIT 4,L", "BIT 4,(HL)", "BIT 4,A", // 0x64
    "BIT 5,B", "BIT 5,C", "BIT 5,D", "BIT 5,E", // 0x68
    "BIT 5,H", "BIT 5,L", "BIT 5,(HL)", "BIT 5,A", // 0x6C
    "BIT 6,B", "BIT 6,C", "BIT 6,D", "BIT 6,E", // 0x70
    "BIT 6,H", "BIT 6,L", "BIT 6,(HL)", "BIT 6,A", // 0x74
    "BIT 7,B", "BIT 7,C", "BIT 7,D", "BIT 7,E", // 0x78
    "BIT 7,H", "BIT 7,L", "BIT 7,(HL)", "BIT 7,A", // 0x7C
    "RES 0,B", "RES 0,C", "RES 0,D", "RES 0,E", // 0x80
    "RES 0,H", "RES 0,L", "RES 0,(HL)", "RES 0,A", // 0x84
    "RES 1,B", "RES 1,C", "RES 1,D", "RES 1,E", // 0x88
    "RES 1,H", "RES 1,L", "RES 1,(HL)", "RES 1,A", // 0x8C
    "RES 2,B", "RES 2,C", "RES 2,D", "RES 2,E", // 0x90
    "RES 2,H", "RES 2,L", "RES 2,(HL)", "RES 2,A", // 0x94
    "RES 3,B", "RES 3,C", "RES 3,D", "RES 3,E", // 0x98
    "RES 3,H", "RES 3,L", "RES 3,(HL)", "RES 3,A", // 0x9C
    "RES 4,B", "RES 4,C", "RES 4,D", "RES 4,E", // 0xA0
    "RES 4,H", "RES 4,L", "RES 4,(HL)", "RES 4,A", // 0xA4
    "RES 5,B", "RES 5,C", "RES 5,D", "RES 5,E", // 0xA8
    "RES 5,H", "RES 5,L", "RES 5,(HL)", "RES 5,A", // 0xAC
    "RES 6,B", "RES 6,C", "RES 6,D", "RES 6,E", // 0xB0
    "RES 6,H", "RES 6,L", "RES 6,(HL)", "RES 6,A", // 0xB4
    "RES 7,B", "RES 7,C", "RES 7,D", "RES 7,E", // 0xB8
    "RES 7,H", "RES 7,L", "RES 7,(HL)", "RES 7,A", // 0xBC
    "SET 0,B", "SET 0,C", "SET 0,D", "SET 0,E", // 0xC0
    "SET 0,H", "SET 0,L", "SET 0,(HL)", "SET 0,A", // 0xC4
    "SET 1,B", "SET 1,C", "SET 1,D", "SET 1,E", // 0xC8
    "SET 1,H", "SET 1,L", "SET 1,(HL)", "SET 1,A", // 0xCC
    "SET 2,B", "SET 2,C", "SET 2,D", "SET 2,E", // 0xD0
    "SET 2,H", "SET 2,L", "SET 2,(HL)", "SET 2,A", // 0xD4
    "SET 3,B", "SET 3,C", "SET 3,D", "SET 3,E", // 0xD8
    "SET 3,H", "SET 3,L", "SET 3,(HL)", "SET 3,A", // 0xDC
    "SET 4,B", "SET 4,C", "SET 4,D", "SET 4,E", // 0xE0
    "SET 4,H", "SET 4,L", "SET 4,(HL)", "SET 4,A", // 0xE4
    "SET 5,B", "SET 5,C", "SET 5,D", "SET 5,E", // 0xE8
    "SET 5,H", "SET 5,L", "SET 5,(HL)", "SET 5,A", // 0xEC
    "SET 6,B", "SET 6,C", "SET 6,D", "SET 6,E", // 0xF0
    "SET 6,H", "SET 6,L", "SET 6,(HL)", "SET 6,A", // 0xF4
    "SET 7,B", "SET 7,C", "SET 7,D", "SET 7,E", // 0xF8
    "SET 7,H", "SET 7,L", "SET 7,(HL)", "SET 7,A", // 0xFC
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::FlatBus;

    #[test]
    fn labels_follow_the_opcode_grid() {
        assert_eq!(mnemonic(0x00), "NOP");
        assert_eq!(mnemonic(0x3E), "LD A,d8");
        assert_eq!(mnemonic(0x76), "HALT");
        assert_eq!(mnemonic(0x78), "LD A,B");
        assert_eq!(mnemonic(0xCB), "PREFIX CB");
        assert_eq!(mnemonic(0xE8), "ADD SP,r8");
        assert_eq!(mnemonic(0xFF), "RST 38H");
        assert_eq!(cb_mnemonic(0x37), "SWAP A");
        assert_eq!(cb_mnemonic(0x7E), "BIT 7,(HL)");
        assert_eq!(cb_mnemonic(0xC6), "SET 0,(HL)");
    }

    #[test]
    fn every_hole_is_labelled_illegal() {
        let holes: Vec<u8> = (0..=255u8).filter(|&op| mnemonic(op) == "ILLEGAL").collect();
        assert_eq!(
            holes,
            vec![0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
        );
    }

    #[test]
    fn dump_memory_prints_eight_bytes_per_line() {
        let mut bus = FlatBus::new();
        bus.load(0xC000, &[0x3E, 0x42, 0x06, 0x00, 0x78, 0x04, 0x00, 0x00, 0xAA, 0xBB]);

        let dump = dump_memory(&mut bus, 0xC000, 10);
        assert_eq!(
            dump,
            "C000: 3E 42 06 00 78 04 00 00\nC008: AA BB\n"
        );
    }

    #[test]
    fn dump_memory_of_nothing_is_empty() {
        let mut bus = FlatBus::new();
        assert_eq!(dump_memory(&mut bus, 0x0000, 0), "");
        assert_eq!(dump_memory(&mut bus, 0xFFFF, 1), "FFFF: 00\n");
    }
}

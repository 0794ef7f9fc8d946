use thiserror::Error;

/// Conditions that stop the core.
///
/// Every defined opcode executes deterministically, so the only thing that
/// can go wrong inside `step` is fetching one of the reserved opcode holes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },
}

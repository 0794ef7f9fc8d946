/// Abstraction over the Game Boy bus (memory and IO).
///
/// The host owns the bus and lends it to the CPU for one `step` at a time.
/// CPU accesses to IF (`0xFF0F`) and IE (`0xFFFF`) are answered by the
/// core's interrupt controller and never reach the bus.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read: low byte at `addr`, high byte at `addr + 1`.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write, the inverse of [`Bus::read16`].
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

/// Flat 64 KiB RAM with no mapping. Handy for headless hosts and tests.
#[derive(Clone)]
pub struct FlatBus {
    pub memory: Box<[u8; 0x10000]>,
}

impl Default for FlatBus {
    fn default() -> Self {
        Self {
            memory: Box::new([0; 0x10000]),
        }
    }
}

impl FlatBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `bytes` into memory starting at `addr`, wrapping at the top of
    /// the address space.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut at = addr;
        for &byte in bytes {
            self.memory[at as usize] = byte;
            at = at.wrapping_add(1);
        }
    }
}

impl std::fmt::Debug for FlatBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatBus").finish_non_exhaustive()
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

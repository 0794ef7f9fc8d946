mod ime;
mod poll;
mod service;

use bitflags::bitflags;

use crate::{IE_ADDR, IF_ADDR};

bitflags! {
    /// Interrupt lines as laid out in IE and IF. Lower bits win priority.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InterruptFlags: u8 {
        const VBLANK   = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER    = 1 << 2;
        const SERIAL   = 1 << 3;
        const JOYPAD   = 1 << 4;
    }
}

/// The five interrupt sources, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterruptSource {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptSource {
    pub const ALL: [InterruptSource; 5] = [
        InterruptSource::VBlank,
        InterruptSource::LcdStat,
        InterruptSource::Timer,
        InterruptSource::Serial,
        InterruptSource::Joypad,
    ];

    /// Source for bit `index` of IE/IF, if that bit is wired.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self.index())
    }

    /// Handler address: 0x0040, 0x0048, 0x0050, 0x0058 or 0x0060.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self.index() as u16) * 8
    }

    pub fn name(self) -> &'static str {
        match self {
            InterruptSource::VBlank => "VBLANK",
            InterruptSource::LcdStat => "STAT",
            InterruptSource::Timer => "TIMER",
            InterruptSource::Serial => "SERIAL",
            InterruptSource::Joypad => "JOYPAD",
        }
    }
}

/// IE, IF and IME.
///
/// IE keeps all eight bits as written; only the low five take part in
/// priority resolution. IF only stores the low five bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterruptState {
    pub(crate) ie: u8,
    pub(crate) ifr: u8,
    pub(crate) ime: bool,
}

impl InterruptState {
    #[inline]
    pub fn ie(&self) -> u8 {
        self.ie
    }

    #[inline]
    pub fn ifr(&self) -> u8 {
        self.ifr
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Lines that are both enabled and requested.
    #[inline]
    pub fn pending(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.ie & self.ifr)
    }

    /// Highest-priority pending source, regardless of IME.
    #[inline]
    pub fn highest_pending(&self) -> Option<InterruptSource> {
        let pending = self.pending().bits();
        if pending == 0 {
            return None;
        }
        InterruptSource::from_index(pending.trailing_zeros())
    }

    /// Value seen by a read of IF or IE, `None` for any other address.
    ///
    /// The three unused IF bits read back as 1.
    #[inline]
    pub fn read_register(&self, addr: u16) -> Option<u8> {
        match addr {
            IF_ADDR => Some(self.ifr | 0xE0),
            IE_ADDR => Some(self.ie),
            _ => None,
        }
    }

    /// Store a write to IF or IE. Returns `false` when `addr` is not one of
    /// them and the write belongs to the bus.
    #[inline]
    pub fn write_register(&mut self, addr: u16, value: u8) -> bool {
        match addr {
            IF_ADDR => {
                self.ifr = value & InterruptFlags::all().bits();
                true
            }
            IE_ADDR => {
                self.ie = value;
                true
            }
            _ => false,
        }
    }
}

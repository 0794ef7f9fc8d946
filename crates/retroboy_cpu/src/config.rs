use typed_builder::TypedBuilder;

/// Register contents applied by `Cpu::reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootState {
    /// Every register zero, PC at 0x0000. Used when a boot ROM is mapped
    /// by the host or when running bare test programs.
    #[default]
    Zeroed,
    /// Values the DMG boot ROM leaves behind when it jumps to 0x0100.
    DmgPostBoot,
}

/// Tunables for the instruction core.
///
/// ```
/// use retroboy_cpu::{BootState, CpuConfig};
///
/// let config = CpuConfig::builder()
///     .boot_state(BootState::DmgPostBoot)
///     .build();
/// assert!(config.ei_delay);
/// ```
#[derive(TypedBuilder, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuConfig {
    /// When set, EI enables IME only after the following instruction has
    /// completed, as on hardware. When clear, IME is set immediately.
    #[builder(default = true)]
    pub ei_delay: bool,
    /// Cycles charged for one step spent in HALT.
    #[builder(default = 4)]
    pub halt_tick_cycles: u32,
    #[builder(default)]
    pub boot_state: BootState,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

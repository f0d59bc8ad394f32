//! Platform module - board-specific configuration.
//!
//! Each supported board is a module of constants plus a static
//! [`Platform`] value. The board is selected at compile time through
//! cargo features.

pub mod tangprimer20k;

pub mod qemu_virt;

#[cfg(feature = "qemu_virt")]
pub use qemu_virt as board;

// Default to the Tang Primer 20K if no board feature is selected.
#[cfg(not(feature = "qemu_virt"))]
pub use tangprimer20k as board;

/// One named range of the static memory map. A zero-size entry terminates
/// the table and is never a real region.
pub struct MemRegion {
    pub base: usize,
    pub size: usize,
    pub attr: usize,
    pub name: &'static str,
}

impl MemRegion {
    pub const SENTINEL: MemRegion = MemRegion {
        base: 0,
        size: 0,
        attr: 0,
        name: "",
    };

    /// Last byte covered by the region.
    pub const fn end(&self) -> usize {
        self.base + (self.size - 1)
    }
}

/// Static description of the running platform, consumed read-only by the
/// monitor and the diagnostics formatter.
pub struct Platform {
    pub name: &'static str,
    /// CPU clock in Hz.
    pub cpu_freq: u32,
    /// System clock in Hz.
    pub sys_freq: u32,
    /// Memory map, sentinel-terminated. Empty when the board has none.
    pub mem_map: &'static [MemRegion],
    /// Upper bound for one XMODEM transfer.
    pub load_limit: usize,
}

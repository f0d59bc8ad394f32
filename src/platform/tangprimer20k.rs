//! Tang Primer 20K board carrying an SCR1 core on the FPGA fabric.

use super::{MemRegion, Platform};

pub const NAME: &str = "tang_primer_20k";

/// RTC timebase: 1 MHz, internal.
pub const RTC_TIMEBASE: u32 = 1_000_000;

pub const SYS_FREQ: u32 = 27_000_000;
pub const CPU_FREQ: u32 = SYS_FREQ;

pub const TCM_BASE: usize = 0xF000_0000;
pub const TCM_SIZE: usize = 4 * 1024;

pub const MTIMER_BASE: usize = 0xF004_0000;
pub const MTIMER_SIZE: usize = 0x1000;

/// 64-bit MTIME register inside the SCR machine-timer block.
pub const MTIME_ADDR: usize = MTIMER_BASE + 0x8;

pub const MMIO_BASE: usize = 0xFF00_0000;
pub const MMIO_SIZE: usize = 0x10_0000;

pub const OCROM_BASE: usize = 0xFFEE_0000;
pub const OCROM_SIZE: usize = 32 * 1024;

/// FPGA UART, 16550-compatible.
pub const UART0_BASE: usize = MMIO_BASE + 0xDF_0000;
pub const UART0_BAUD: u32 = 115_200;

pub static MEM_MAP: &[MemRegion] = &[
    MemRegion {
        base: TCM_BASE,
        size: TCM_SIZE,
        attr: 0,
        name: "TCM",
    },
    MemRegion {
        base: MTIMER_BASE,
        size: MTIMER_SIZE,
        attr: 0,
        name: "MTimer",
    },
    MemRegion {
        base: MMIO_BASE,
        size: MMIO_SIZE,
        attr: 0,
        name: "MMIO",
    },
    MemRegion {
        base: OCROM_BASE,
        size: OCROM_SIZE,
        attr: 0,
        name: "On-Chip ROM",
    },
    MemRegion::SENTINEL,
];

pub static PLATFORM: Platform = Platform {
    name: NAME,
    cpu_freq: CPU_FREQ,
    sys_freq: SYS_FREQ,
    mem_map: MEM_MAP,
    load_limit: TCM_SIZE,
};

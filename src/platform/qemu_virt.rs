//! QEMU `virt` machine, for running the monitor under emulation.

use super::{MemRegion, Platform};

pub const NAME: &str = "qemu_virt";

/// QEMU's CLINT timebase.
pub const RTC_TIMEBASE: u32 = 10_000_000;

pub const SYS_FREQ: u32 = 10_000_000;
pub const CPU_FREQ: u32 = 1_000_000_000;

pub const RAM_BASE: usize = 0x8000_0000;
pub const RAM_SIZE: usize = 128 * 1024 * 1024;

pub const CLINT_BASE: usize = 0x0200_0000;
pub const CLINT_SIZE: usize = 0x1_0000;

/// NS16550A on the virt machine.
pub const UART0_BASE: usize = 0x1000_0000;
pub const UART0_BAUD: u32 = 115_200;

/// mtime lives at the conventional CLINT offset.
pub const MTIME_ADDR: usize = CLINT_BASE + 0xBFF8;

pub static MEM_MAP: &[MemRegion] = &[
    MemRegion {
        base: CLINT_BASE,
        size: CLINT_SIZE,
        attr: 0,
        name: "CLINT",
    },
    MemRegion {
        base: UART0_BASE,
        size: 0x100,
        attr: 0,
        name: "UART0",
    },
    MemRegion {
        base: RAM_BASE,
        size: RAM_SIZE,
        attr: 0,
        name: "RAM",
    },
    MemRegion::SENTINEL,
];

pub static PLATFORM: Platform = Platform {
    name: NAME,
    cpu_freq: CPU_FREQ,
    sys_freq: SYS_FREQ,
    mem_map: MEM_MAP,
    load_limit: RAM_SIZE,
};

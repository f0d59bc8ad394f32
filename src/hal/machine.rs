//! HAL implementation for real hardware.

use super::{Hal, HwId, Memory, Serial, Timer};
use crate::drivers::{rtc, uart};
use crate::hal::csr::CsrId;
use crate::mem::RawMem;

/// The hardware-backed HAL: UART console, machine-timer delays, CSR
/// identity and raw volatile memory access.
pub struct MachineHal {
    ids: CsrId,
    raw: RawMem,
}

impl MachineHal {
    pub const fn new() -> Self {
        Self {
            ids: CsrId,
            raw: RawMem,
        }
    }
}

impl Serial for MachineHal {
    fn getchar(&mut self) -> Option<u8> {
        uart::getchar()
    }

    fn putchar(&mut self, c: u8) {
        uart::putchar(c);
    }

    fn flush(&mut self) {
        uart::flush();
    }
}

impl Timer for MachineHal {
    fn delay_us(&mut self, us: u64) {
        rtc::delay_us(us);
    }
}

impl HwId for MachineHal {
    fn isa(&self) -> usize {
        self.ids.isa()
    }

    fn impl_id(&self) -> usize {
        self.ids.impl_id()
    }
}

impl Memory for MachineHal {
    fn read_u8(&mut self, addr: usize) -> u8 {
        self.raw.read_u8(addr)
    }

    fn write_u8(&mut self, addr: usize, val: u8) {
        self.raw.write_u8(addr, val)
    }

    fn write_word(&mut self, addr: usize, val: usize) {
        self.raw.write_word(addr, val)
    }
}

impl Hal for MachineHal {
    fn jump(&mut self, addr: usize) {
        // Make the freshly loaded program visible to instruction fetch
        // before transferring control.
        unsafe {
            core::arch::asm!(
                "fence.i",
                "jr {0}",
                in(reg) addr,
                options(noreturn),
            );
        }
    }

    fn print_config(&mut self) {
        uart::print_info();
    }
}

//! HAL - collaborator traits between the monitor core and the hardware.
//!
//! The dispatch engine and the formatters only ever talk to these traits.
//! `MachineHal` wires them to the real UART, machine timer and CSRs on a
//! RISC-V target; tests substitute `mock::MockHal`.

use crate::drivers::xmodem::{self, XmodemError};

pub mod csr;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub mod machine;

#[cfg(test)]
pub mod mock;

/// Byte-level serial console transport.
pub trait Serial {
    /// Nonblocking read of one byte.
    fn getchar(&mut self) -> Option<u8>;

    /// Blocking write of one byte.
    fn putchar(&mut self, c: u8);

    /// Wait until every queued byte left the wire.
    fn flush(&mut self) {}

    fn puts(&mut self, s: &str) {
        for b in s.bytes() {
            self.putchar(b);
        }
    }
}

/// Real-time counter / delay source.
pub trait Timer {
    fn delay_us(&mut self, us: u64);
}

/// Hardware identification words.
pub trait HwId {
    /// ISA capability word (misa).
    fn isa(&self) -> usize;

    /// Implementation id word (mimpid).
    fn impl_id(&self) -> usize;

    /// System id, 0 when the platform exposes none.
    fn system_id(&self) -> usize {
        0
    }

    /// Build id, 0 when the platform exposes none.
    fn build_id(&self) -> usize {
        0
    }
}

/// Raw access to addressable memory.
///
/// This is the capability boundary for arbitrary-address reads and writes;
/// everything outside the implementations of this trait is ordinary safe
/// code. No bounds checking by design - poking an invalid address is an
/// intentional capability of a boot-loader monitor.
pub trait Memory {
    fn read_u8(&mut self, addr: usize) -> u8;

    fn write_u8(&mut self, addr: usize, val: u8);

    /// Single word-sized store.
    fn write_word(&mut self, addr: usize, val: usize);
}

/// Everything a command handler may touch.
pub trait Hal: Serial + Timer + HwId + Memory {
    /// Blocking binary receive into memory at `addr`, at most `max_len`
    /// bytes. Returns the byte count or the protocol error.
    fn xmodem_receive(&mut self, addr: usize, max_len: usize) -> Result<usize, XmodemError>
    where
        Self: Sized,
    {
        xmodem::receive(self, addr, max_len)
    }

    /// Transfer control to the program at `addr`. Never returns on
    /// hardware; test doubles record the address instead.
    fn jump(&mut self, addr: usize);

    /// Idle-indication hook, invoked on every failed console poll. The
    /// sole cooperative-multitasking point of the monitor loop.
    fn idle(&mut self) {}

    /// Board-specific configuration report for the `platform info` command.
    fn print_config(&mut self) {}
}

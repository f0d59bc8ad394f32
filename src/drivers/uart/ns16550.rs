//! NS16550-compatible UART, byte-wide MMIO registers.

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::register_bitfields;
use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, ReadWrite};

register_bitfields![u8,
    /// Line control.
    LCR [
        /// Word length, 0b11 = 8 bits.
        WLEN OFFSET(0) NUMBITS(2) [],
        STOP OFFSET(2) NUMBITS(1) [],
        PARITY OFFSET(3) NUMBITS(1) [],
        /// Divisor latch access.
        DLAB OFFSET(7) NUMBITS(1) [],
    ],
    /// Line status.
    LSR [
        /// Receive data ready.
        DR OFFSET(0) NUMBITS(1) [],
        /// Transmit holding register empty.
        THRE OFFSET(5) NUMBITS(1) [],
        /// Transmitter empty (shift register drained).
        TEMT OFFSET(6) NUMBITS(1) [],
    ],
    /// FIFO control.
    FCR [
        ENABLE OFFSET(0) NUMBITS(1) [],
        RX_RESET OFFSET(1) NUMBITS(1) [],
        TX_RESET OFFSET(2) NUMBITS(1) [],
    ],
];

register_structs! {
    pub Ns16550Regs {
        /// RBR on read, THR on write; DLL while DLAB is set.
        (0x00 => data: ReadWrite<u8>),
        /// IER; DLM while DLAB is set.
        (0x01 => ier: ReadWrite<u8>),
        /// IIR on read, FCR on write.
        (0x02 => fcr: ReadWrite<u8, FCR::Register>),
        (0x03 => lcr: ReadWrite<u8, LCR::Register>),
        (0x04 => mcr: ReadWrite<u8>),
        (0x05 => lsr: ReadOnly<u8, LSR::Register>),
        (0x06 => msr: ReadOnly<u8>),
        (0x07 => scr: ReadWrite<u8>),
        (0x08 => @END),
    }
}

pub struct Ns16550 {
    base: usize,
}

// Single hart, run-to-completion monitor: no interior locking needed.
unsafe impl Send for Ns16550 {}
unsafe impl Sync for Ns16550 {}

impl Ns16550 {
    /// # Safety
    ///
    /// `base` must be the MMIO base of a 16550-compatible UART with
    /// byte-stride registers.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    fn regs(&self) -> &Ns16550Regs {
        unsafe { &*(self.base as *const Ns16550Regs) }
    }

    /// Program 8N1 at the given baud rate and enable the FIFOs.
    pub fn init(&self, clock: u32, baud: u32) {
        let regs = self.regs();
        let divisor = (clock / (16 * baud)).max(1) as u16;

        regs.ier.set(0);
        regs.lcr.write(LCR::DLAB::SET);
        regs.data.set((divisor & 0xff) as u8);
        regs.ier.set((divisor >> 8) as u8);
        regs.lcr.write(LCR::WLEN.val(0b11));
        regs.fcr
            .write(FCR::ENABLE::SET + FCR::RX_RESET::SET + FCR::TX_RESET::SET);
    }

    pub fn putchar(&self, c: u8) {
        let regs = self.regs();
        while !regs.lsr.is_set(LSR::THRE) {}
        regs.data.set(c);
    }

    pub fn getchar(&self) -> Option<u8> {
        let regs = self.regs();
        if regs.lsr.is_set(LSR::DR) {
            Some(regs.data.get())
        } else {
            None
        }
    }

    pub fn flush(&self) {
        while !self.regs().lsr.is_set(LSR::TEMT) {}
    }
}

//! UART driver.
//!
//! Both supported boards expose a 16550-compatible UART, so there is a
//! single driver selected through the board constants.

pub mod ns16550;

use lazyinit::LazyInit;
use ns16550::Ns16550;

use crate::platform::board;

static UART: LazyInit<Ns16550> = LazyInit::new();

/// Early stage initialization of the console UART.
pub fn init_early() {
    let uart = unsafe { Ns16550::new(board::UART0_BASE) };
    uart.init(board::SYS_FREQ, board::UART0_BAUD);
    UART.init_once(uart);
}

/// Writes a byte to the console.
pub fn putchar(c: u8) {
    match c {
        b'\n' => {
            UART.putchar(b'\r');
            UART.putchar(b'\n');
        }
        c => UART.putchar(c),
    }
}

/// Reads a byte from the console, or returns [`None`] if no input is
/// available.
pub fn getchar() -> Option<u8> {
    UART.getchar()
}

/// Blocks until the transmitter is fully drained.
pub fn flush() {
    UART.flush();
}

/// Writes a string to the console. Sink for the print macros.
pub fn puts(s: &str) {
    for b in s.bytes() {
        putchar(b);
    }
}

/// One-line driver summary for the `platform info` command.
pub fn print_info() {
    crate::println!(
        "uart0: ns16550 @{:#010x}, {} baud",
        board::UART0_BASE,
        board::UART0_BAUD
    );
}

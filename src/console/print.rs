//! Console print macros.
//!
//! Formatting is buffered so each `print!` reaches the sink as one call
//! instead of a stream of single bytes.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicUsize, Ordering};

/// Console sink: receives complete formatted chunks.
pub type SinkFn = fn(&str);

static SINK: AtomicUsize = AtomicUsize::new(0);

/// Register the console sink. Later registrations replace earlier ones.
pub fn set_sink(sink: SinkFn) {
    SINK.store(sink as usize, Ordering::Release);
}

fn sink() -> Option<SinkFn> {
    let raw = SINK.load(Ordering::Acquire);
    if raw == 0 {
        None
    } else {
        // Safety: the only nonzero values ever stored are `SinkFn`s.
        Some(unsafe { core::mem::transmute::<usize, SinkFn>(raw) })
    }
}

/// Buffer size for formatting output before it reaches the sink.
const PRINT_BUFFER_SIZE: usize = 256;

/// A printer that formats into a fixed-size buffer, then flushes in one go.
struct BufferedPrinter {
    buffer: [u8; PRINT_BUFFER_SIZE],
    pos: usize,
    out: SinkFn,
}

impl BufferedPrinter {
    const fn new(out: SinkFn) -> Self {
        Self {
            buffer: [0; PRINT_BUFFER_SIZE],
            pos: 0,
            out,
        }
    }

    fn flush(&mut self) {
        if self.pos > 0 {
            // Safety: buffer contains valid UTF-8 since we only write from str
            let s = unsafe { core::str::from_utf8_unchecked(&self.buffer[..self.pos]) };
            (self.out)(s);
            self.pos = 0;
        }
    }
}

impl Write for BufferedPrinter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            if self.pos >= PRINT_BUFFER_SIZE {
                self.flush();
            }
            self.buffer[self.pos] = byte;
            self.pos += 1;
        }
        Ok(())
    }
}

impl Drop for BufferedPrinter {
    fn drop(&mut self) {
        self.flush();
    }
}

pub fn _print(args: fmt::Arguments) {
    let Some(out) = sink() else {
        return;
    };

    let mut printer = BufferedPrinter::new(out);
    // Ignore write errors - printing should not panic
    let _ = printer.write_fmt(args);
    // Flush happens automatically in Drop
}

/// Simple console print operation.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ({
        $crate::console::print::_print(format_args!($($arg)*))
    });
}

/// Simple console print operation with newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

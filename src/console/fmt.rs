//! Fixed-width hex/decimal output and hex input over a serial transport.
//!
//! The monitor's wire format predates this port: fixed-width lowercase
//! hex, no `0x` prefixes, decimal without separators.

use crate::hal::Serial;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Formatting and parsing helpers available on every serial transport.
pub trait ConsoleExt: Serial {
    /// Print `digits` hex digits of `val`, most significant first.
    fn put_hex(&mut self, val: usize, digits: u32) {
        for i in (0..digits).rev() {
            let nibble = (val >> (i * 4)) & 0xf;
            self.putchar(HEX_DIGITS[nibble]);
        }
    }

    fn put_hex32(&mut self, val: u32) {
        self.put_hex(val as usize, 8);
    }

    fn put_hex8(&mut self, val: u8) {
        self.put_hex(val as usize, 2);
    }

    /// Native pointer width.
    fn put_hex_addr(&mut self, val: usize) {
        self.put_hex(val, usize::BITS / 4);
    }

    fn put_dec(&mut self, val: u64) {
        let mut buf = [0u8; 20];
        let mut pos = buf.len();
        let mut v = val;
        loop {
            pos -= 1;
            buf[pos] = b'0' + (v % 10) as u8;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        for &b in &buf[pos..] {
            self.putchar(b);
        }
    }

    /// Blocking read of one hex value, terminated by CR or LF. Digits are
    /// echoed; anything that is not a hex digit or a terminator is
    /// ignored. An empty line yields 0.
    fn read_hex(&mut self) -> usize {
        let mut val: usize = 0;
        loop {
            let Some(c) = self.getchar() else {
                core::hint::spin_loop();
                continue;
            };
            match c {
                b'\r' | b'\n' => {
                    self.putchar(b'\n');
                    return val;
                }
                _ => {
                    if let Some(d) = hex_digit(c) {
                        val = (val << 4) | d as usize;
                        self.putchar(c);
                    }
                }
            }
        }
    }
}

impl<S: Serial + ?Sized> ConsoleExt for S {}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

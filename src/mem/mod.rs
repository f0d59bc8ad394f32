//! Memory inspector: hex+ASCII dump and single-location patch.

use crate::console::fmt::ConsoleExt;
use crate::hal::{Memory, Serial};

/// Bytes per dump row.
const ROW_LEN: usize = 16;

/// Hex+ASCII dump of `len` bytes starting at `addr`, 16 per row.
///
/// Every byte is fetched exactly once, in address order; the row buffer
/// only decouples the two renderings of the same fetch, which matters for
/// read-sensitive memory-mapped registers.
pub fn dump<H>(hal: &mut H, mut addr: usize, mut len: usize)
where
    H: Serial + Memory + ?Sized,
{
    while len > 0 {
        let row_len = len.min(ROW_LEN);
        let mut row = [0u8; ROW_LEN];

        hal.put_hex32(addr as u32);
        hal.putchar(b':');
        for (j, slot) in row.iter_mut().enumerate().take(row_len) {
            hal.putchar(b' ');
            if j & 3 == 0 {
                hal.putchar(b' ');
            }
            *slot = hal.read_u8(addr + j);
            hal.put_hex8(*slot);
        }

        hal.putchar(b' ');
        hal.putchar(b'|');
        for &b in row.iter().take(row_len) {
            if (0x20..0x7f).contains(&b) {
                hal.putchar(b);
            } else {
                hal.putchar(b'.');
            }
        }
        hal.putchar(b'|');
        hal.putchar(b'\n');

        addr = addr.wrapping_add(ROW_LEN);
        len -= row_len;
    }
}

/// Patch one word: echo the address, read a hex value, store it. No
/// bounds checking - writing anywhere is the point of this tool.
pub fn modify<H>(hal: &mut H, addr: usize)
where
    H: Serial + Memory + ?Sized,
{
    hal.put_hex_addr(addr);
    hal.putchar(b':');
    hal.putchar(b' ');
    let val = hal.read_hex();
    hal.write_word(addr, val);
}

/// The raw-access capability: volatile, unchecked loads and stores at
/// arbitrary addresses. The unsafety of the whole monitor is confined to
/// this implementation (and the CSR reads in the HAL).
pub struct RawMem;

impl Memory for RawMem {
    fn read_u8(&mut self, addr: usize) -> u8 {
        unsafe { (addr as *const u8).read_volatile() }
    }

    fn write_u8(&mut self, addr: usize, val: u8) {
        unsafe { (addr as *mut u8).write_volatile(val) }
    }

    fn write_word(&mut self, addr: usize, val: usize) {
        unsafe { (addr as *mut usize).write_volatile(val) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::MockHal;
    use std::format;
    use std::string::String;
    use std::vec::Vec;

    const BASE: usize = 0xf000_0000;

    fn hal_with(pattern: &[u8]) -> MockHal {
        let mut hal = MockHal::new().with_mem(BASE, 0x100);
        hal.mem[..pattern.len()].copy_from_slice(pattern);
        hal
    }

    #[test]
    fn test_dump_row_format() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Hello, world!");
        bytes.extend_from_slice(&[0x00, 0x7f, 0xff]);
        let mut hal = hal_with(&bytes);

        dump(&mut hal, BASE, 16);
        assert_eq!(
            hal.out_str(),
            "f0000000:  48 65 6c 6c  6f 2c 20 77  6f 72 6c 64  21 00 7f ff |Hello, world!...|\n"
        );
    }

    #[test]
    fn test_dump_17_bytes_is_two_rows() {
        let mut hal = hal_with(&[0x41; 17]);

        dump(&mut hal, BASE, 17);
        let out = hal.out_str();
        let rows: Vec<&str> = out.trim_end_matches('\n').split('\n').collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            "f0000000:  41 41 41 41  41 41 41 41  41 41 41 41  41 41 41 41 |AAAAAAAAAAAAAAAA|"
        );
        // the partial row carries one byte, no zero padding
        assert_eq!(rows[1], "f0000010:  41 |A|");
    }

    #[test]
    fn test_dump_fetches_each_byte_once_in_order() {
        let mut hal = hal_with(&[0u8; 32]);

        dump(&mut hal, BASE, 20);
        let expected: Vec<usize> = (BASE..BASE + 20).collect();
        assert_eq!(hal.read_log, expected);
    }

    #[test]
    fn test_modify_stores_one_word() {
        let mut hal = hal_with(&[0u8; 32]);
        hal.feed(b"deadbeef\r");

        modify(&mut hal, BASE + 8);
        let word = usize::from_le_bytes(
            hal.mem[8..8 + core::mem::size_of::<usize>()]
                .try_into()
                .unwrap(),
        );
        assert_eq!(word, 0xdeadbeef);

        let digits = usize::BITS as usize / 4;
        let expected = format!("{:0digits$x}: deadbeef\n", BASE + 8, digits = digits);
        assert_eq!(hal.out_str(), String::from(expected));
    }
}

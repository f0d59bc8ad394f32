//! Hardware identity and memory-map report.

use crate::console::fmt::ConsoleExt;
use crate::hal::{HwId, Serial};
use crate::platform::Platform;

/// Register-width names indexed by the 2-bit MXL code.
const CPU_MXL: [&str; 4] = ["??", "32", "64", "128"];

/// Canonical extension letter order. Not alphabetical: this is the
/// conventional ISA-string order, and the report preserves it.
const EXTENSIONS: &str = "IEMAFDQLNCBTPVX";

/// 2-bit register-width code from the top two bits of the capability
/// word, extracted by sign tests so the word stays XLEN-agnostic.
pub fn mxl_code(isa: usize) -> usize {
    let mut mxl = 0;
    if (isa as isize) < 0 {
        mxl |= 0x2;
    }
    if ((isa << 1) as isize) < 0 {
        mxl |= 0x1;
    }
    mxl
}

/// Identity report: ISA string, id words, clocks and the memory map.
pub fn hwinfo<H>(hal: &mut H, platform: &Platform)
where
    H: Serial + HwId + ?Sized,
{
    let isa = hal.isa();
    let impl_id = hal.impl_id();

    hal.puts("ISA: RV");
    hal.puts(CPU_MXL[mxl_code(isa)]);
    for letter in EXTENSIONS.bytes() {
        if isa & (1 << (letter - b'A')) != 0 {
            hal.putchar(letter);
        }
    }

    hal.puts(" [");
    hal.put_hex32(isa as u32);
    hal.puts("] IMPID: ");
    hal.put_hex32(impl_id as u32);
    hal.puts("\n");

    // Zero means the platform exposes no such id; the field disappears.
    let system_id = hal.system_id();
    if system_id != 0 {
        hal.puts("SOCID: ");
        hal.put_hex32(system_id as u32);
        hal.puts(" ");
    }
    let build_id = hal.build_id();
    if build_id != 0 {
        hal.puts("BLDID: ");
        hal.put_hex32(build_id as u32);
    }

    hal.puts("\nPlatform: ");
    hal.puts(platform.name);
    hal.puts(", cpuclk ");
    put_mhz(hal, platform.cpu_freq);
    hal.puts(", sysclk ");
    put_mhz(hal, platform.sys_freq);
    hal.puts("\n");

    if !platform.mem_map.is_empty() {
        hal.puts("Memory map:\n");
        for region in platform.mem_map {
            if region.size == 0 {
                break;
            }
            hal.put_hex32(region.base as u32);
            hal.putchar(b'-');
            hal.put_hex32(region.end() as u32);
            hal.putchar(b'\t');
            hal.put_hex32(region.attr as u32);
            hal.putchar(b'\t');
            hal.puts(region.name);
            hal.putchar(b'\n');
        }
    }
}

/// Integer MHz with one fractional digit, printed only when nonzero.
fn put_mhz<H: Serial + ?Sized>(hal: &mut H, freq: u32) {
    hal.put_dec((freq / 1_000_000) as u64);
    let tenth = (freq / 100_000) % 10;
    if tenth != 0 {
        hal.putchar(b'.');
        hal.put_dec(tenth as u64);
    }
    hal.puts("MHz");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::MockHal;
    use crate::platform::{MemRegion, Platform};
    use std::string::String;

    static BARE: Platform = Platform {
        name: "testplat",
        cpu_freq: 27_000_000,
        sys_freq: 38_400_000,
        mem_map: &[],
        load_limit: 0x1000,
    };

    static MAPPED: Platform = Platform {
        name: "testplat",
        cpu_freq: 27_000_000,
        sys_freq: 27_000_000,
        mem_map: &[
            MemRegion {
                base: 0xf000_0000,
                size: 0x1000,
                attr: 0x5,
                name: "TCM",
            },
            MemRegion::SENTINEL,
            MemRegion {
                base: 0xdead_0000,
                size: 0x1000,
                attr: 0,
                name: "past sentinel",
            },
        ],
        load_limit: 0x1000,
    };

    fn bit(letter: u8) -> usize {
        1 << (letter - b'A')
    }

    /// Capability word with the given MXL code in the top two bits.
    fn with_mxl(code: usize) -> usize {
        code << (usize::BITS - 2)
    }

    fn report(hal: &mut MockHal, platform: &Platform) -> String {
        hwinfo(hal, platform);
        hal.out_str()
    }

    #[test]
    fn test_mxl_codes() {
        assert_eq!(mxl_code(with_mxl(0b01)), 0b01);
        assert_eq!(mxl_code(with_mxl(0b10)), 0b10);
        assert_eq!(mxl_code(with_mxl(0b11)), 0b11);
        assert_eq!(mxl_code(0), 0);
    }

    #[test]
    fn test_isa_line_rv32im() {
        let mut hal = MockHal::new();
        hal.isa = with_mxl(0b01) | bit(b'I') | bit(b'M');
        hal.impl_id = 0x0120_0000;

        let out = report(&mut hal, &BARE);
        assert!(out.starts_with("ISA: RV32IM ["), "got: {out}");
        assert!(out.contains("] IMPID: 01200000\n"));
    }

    #[test]
    fn test_extension_order_is_canonical() {
        let mut hal = MockHal::new();
        // A sorts before I alphabetically; the canonical order says IA.
        hal.isa = with_mxl(0b10) | bit(b'I') | bit(b'A');

        let out = report(&mut hal, &BARE);
        assert!(out.starts_with("ISA: RV64IA ["), "got: {out}");
    }

    #[test]
    fn test_ids_suppressed_when_zero() {
        let mut hal = MockHal::new();
        let out = report(&mut hal, &BARE);
        assert!(!out.contains("SOCID"));
        assert!(!out.contains("BLDID"));
    }

    #[test]
    fn test_ids_printed_when_nonzero() {
        let mut hal = MockHal::new();
        hal.system_id = 0x1234_5678;
        hal.build_id = 0xabcd_0001;

        let out = report(&mut hal, &BARE);
        assert!(out.contains("SOCID: 12345678 BLDID: abcd0001"));
    }

    #[test]
    fn test_clock_line_with_and_without_fraction() {
        let mut hal = MockHal::new();
        let out = report(&mut hal, &BARE);
        assert!(out.contains("Platform: testplat, cpuclk 27MHz, sysclk 38.4MHz\n"));
    }

    #[test]
    fn test_memory_map_stops_at_sentinel() {
        let mut hal = MockHal::new();
        let out = report(&mut hal, &MAPPED);
        assert!(out.contains("Memory map:\nf0000000-f0000fff\t00000005\tTCM\n"));
        assert!(!out.contains("past sentinel"));
    }

    #[test]
    fn test_no_memory_map_section_without_table() {
        let mut hal = MockHal::new();
        let out = report(&mut hal, &BARE);
        assert!(!out.contains("Memory map:"));
    }
}

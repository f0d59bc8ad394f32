//! `xmodem load @addr` - receive a binary into memory.

use crate::console::fmt::ConsoleExt;
use crate::hal::Hal;
use crate::platform::Platform;

pub fn run<H: Hal>(hal: &mut H, platform: &Platform, addr: usize) {
    let status = hal.xmodem_receive(addr, platform.load_limit);

    // Drop whatever trailing protocol bytes the sender still pushed out.
    while hal.getchar().is_some() {}

    match status {
        Ok(count) => {
            hal.puts("\nXmodem successfully received ");
            hal.put_dec(count as u64);
            hal.puts(" bytes\n");
        }
        Err(err) => {
            debug!("xmodem receive failed: {err}");
            hal.puts("\nXmodem receive error: ");
            hal.put_dec((-err.code()) as u64);
            hal.puts("\n");
        }
    }
}

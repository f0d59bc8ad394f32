//! Help listing, bound to the hidden space entry.

use crate::hal::Hal;
use crate::monitor::command::CmdFlags;
use crate::monitor::registry;

pub fn run<H: Hal>(hal: &mut H) {
    hal.puts("\n");
    for cmd in registry::COMMANDS {
        if cmd.flags.contains(CmdFlags::HIDDEN) {
            continue;
        }
        if let Some(descr) = cmd.descr {
            hal.putchar(cmd.key);
            hal.puts(": ");
            hal.puts(descr);
            hal.puts("\n");
        }
    }
}

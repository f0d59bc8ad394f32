//! `dump mem` / `modify mem` - thin wrappers over the memory inspector.

use crate::config::DUMP_CHUNK;
use crate::hal::Hal;
use crate::mem;

pub fn dump<H: Hal>(hal: &mut H, addr: usize) {
    mem::dump(hal, addr, DUMP_CHUNK);
}

pub fn modify<H: Hal>(hal: &mut H, addr: usize) {
    mem::modify(hal, addr);
}

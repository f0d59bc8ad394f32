//! `start @addr` - jump to a loaded program.

use crate::hal::Hal;

/// Settle time before the jump, so the final console bytes drain through
/// any downstream converter as well.
const PRE_JUMP_DELAY_US: u64 = 20_000;

pub fn run<H: Hal>(hal: &mut H, addr: usize) {
    hal.putchar(b'\n');
    hal.flush();
    hal.delay_us(PRE_JUMP_DELAY_US);
    hal.jump(addr);
}

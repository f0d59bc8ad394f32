//! Real-time counter: busy-wait delays against the 64-bit machine timer.

use crate::platform::board;

/// Start the machine timer on boards where it does not free-run.
pub fn init() {
    #[cfg(not(feature = "qemu_virt"))]
    unsafe {
        // SCR machine timer: control register at block base, bit 0 enables.
        (board::MTIMER_BASE as *mut u32).write_volatile(1);
    }
}

/// Current MTIME value. The high half can carry between the two 32-bit
/// reads, so re-read until it is stable.
pub fn now() -> u64 {
    let lo_ptr = board::MTIME_ADDR as *const u32;
    let hi_ptr = (board::MTIME_ADDR + 4) as *const u32;
    loop {
        let hi = unsafe { hi_ptr.read_volatile() };
        let lo = unsafe { lo_ptr.read_volatile() };
        if unsafe { hi_ptr.read_volatile() } == hi {
            return ((hi as u64) << 32) | lo as u64;
        }
    }
}

/// Busy-wait for `us` microseconds.
pub fn delay_us(us: u64) {
    let ticks = us * board::RTC_TIMEBASE as u64 / 1_000_000;
    let start = now();
    while now().wrapping_sub(start) < ticks {
        core::hint::spin_loop();
    }
}

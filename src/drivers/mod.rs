//! Device drivers.

pub mod rtc;
pub mod uart;
pub mod xmodem;

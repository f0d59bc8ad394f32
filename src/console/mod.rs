//! Console module - print and logging facilities.
//!
//! Output goes through a sink function registered at boot (the UART
//! driver on hardware, a capture buffer in tests).

pub mod logger;

#[macro_use]
pub mod print;

pub mod fmt;

pub use logger::init as init_logger;
pub use print::set_sink;

//! Command handlers.
//!
//! Each handler is a free function over the HAL traits; the
//! `CommandKind` enum in `command.rs` is the single dispatch point.

pub mod help;
pub mod info;
pub mod load;
pub mod mem;
pub mod start;

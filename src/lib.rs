//! SCBL - Serial-console monitor for a RISC-V first-stage boot loader.
//!
//! The monitor lets an operator inspect hardware identity, dump or patch
//! raw memory, receive a binary over XMODEM and jump to it. All hardware
//! access goes through the traits in [`hal`], so the dispatch logic and
//! the formatting code are ordinary, host-testable Rust; the bare-metal
//! glue lives in [`boot`] and is compiled only for `target_os = "none"`.

#![no_std]

#[macro_use]
extern crate log;

#[cfg(test)]
extern crate std;

#[macro_use]
pub mod console;

pub mod config;
pub mod diag;
pub mod drivers;
pub mod error;
pub mod hal;
pub mod mem;
pub mod monitor;
pub mod platform;

#[cfg(all(target_os = "none", any(target_arch = "riscv32", target_arch = "riscv64")))]
pub mod boot;

pub use error::BlResult;

//! Logger implementation for the log crate.
//!
//! Developer diagnostics only; the operator-visible protocol is plain
//! console output. Level comes from the `LOG` build environment variable
//! and defaults to off.

use core::fmt::{self, Display};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::BlResult;
use crate::println;

pub struct SerialLogger;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl Log for SerialLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let args = record.args();
        let color_reset = "\u{1B}[0m";

        let args_color = match level {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        };

        println!("[{level} {file}:{line}] {args_color}{args}{color_reset}");
    }

    fn flush(&self) {}
}

/// Initialize the logger.
pub fn init() -> BlResult<()> {
    log::set_logger(&SerialLogger).map_err(|_| anyhow::anyhow!("logger already set"))?;
    log::set_max_level(match option_env!("LOG") {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    });
    Ok(())
}

//! Unified error handling for the boot loader.
//!
//! Uses anyhow in its no_std configuration. Fallible init paths return
//! `BlResult<T>`; command handlers themselves are infallible and report
//! directly on the console. Create errors with `anyhow::bail!` /
//! `anyhow::ensure!`.

/// Result type alias using anyhow::Error.
pub type BlResult<T> = anyhow::Result<T>;

//! Firmware identity and monitor constants.

/// Loader version printed in the boot banner.
pub const FW_VER: &str = "1.2";

/// Build configuration tag, appended to the version.
pub const FW_VER_CFG: &str = "scr1_RC";

/// Copyright line of the boot banner.
pub const COPYRIGHT_STR: &str = "Copyright (C) 2015-2021 Syntacore. All rights reserved.";

/// Bytes shown by one `dump mem` invocation; also its auto-repeat stride.
pub const DUMP_CHUNK: usize = 128;

/// Auto-repeat stride of `modify mem`: one aligned word per step.
pub const MODIFY_STRIDE: usize = core::mem::size_of::<usize>();

//! Command descriptors.

use bitflags::bitflags;

use crate::hal::Hal;
use crate::monitor::commands;
use crate::platform::Platform;

bitflags! {
    /// Behavior flags of a registry entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CmdFlags: u8 {
        /// Matchable but excluded from the help listing.
        const HIDDEN = 1 << 0;
        /// Prompts for a hex address argument.
        const ARG_ADDR = 1 << 1;
        /// A bare confirm keypress re-runs the command with the address
        /// advanced by `data`.
        const AUTO_REPEAT = 1 << 2;
    }
}

/// The closed set of monitor commands. Dispatch is a match, not a
/// function pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    XmodemLoad,
    Start,
    DumpMem,
    ModifyMem,
    PlatformInfo,
    ShowCommands,
}

impl CommandKind {
    /// Run the handler with the chosen address argument.
    pub fn run<H: Hal>(self, hal: &mut H, platform: &Platform, addr: usize) {
        match self {
            CommandKind::XmodemLoad => commands::load::run(hal, platform, addr),
            CommandKind::Start => commands::start::run(hal, addr),
            CommandKind::DumpMem => commands::mem::dump(hal, addr),
            CommandKind::ModifyMem => commands::mem::modify(hal, addr),
            CommandKind::PlatformInfo => commands::info::run(hal, platform),
            CommandKind::ShowCommands => commands::help::run(hal),
        }
    }
}

/// One immutable registry entry.
pub struct CommandSpec {
    /// Input character this entry matches on.
    pub key: u8,
    pub flags: CmdFlags,
    /// Help text; `None` keeps the entry out of the listing.
    pub descr: Option<&'static str>,
    pub kind: CommandKind,
    /// Fixed argument when no address is prompted for; doubles as the
    /// auto-repeat byte stride. One field on purpose - it is a
    /// per-descriptor constant, never session state.
    pub data: usize,
}

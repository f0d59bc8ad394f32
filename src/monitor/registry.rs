//! Command registry - the static, ordered command table.

use anyhow::ensure;

use crate::BlResult;
use crate::config::{DUMP_CHUNK, MODIFY_STRIDE};
use crate::monitor::command::{CmdFlags, CommandKind, CommandSpec};

/// All commands, in declaration order. The visible subset and its order
/// define the help listing; hidden entries still match input.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        key: b'1',
        flags: CmdFlags::ARG_ADDR,
        descr: Some("xmodem load @addr"),
        kind: CommandKind::XmodemLoad,
        data: 0,
    },
    CommandSpec {
        key: b'g',
        flags: CmdFlags::ARG_ADDR,
        descr: Some("start @addr"),
        kind: CommandKind::Start,
        data: 0,
    },
    CommandSpec {
        key: b'd',
        flags: CmdFlags::ARG_ADDR.union(CmdFlags::AUTO_REPEAT),
        descr: Some("dump mem"),
        kind: CommandKind::DumpMem,
        data: DUMP_CHUNK,
    },
    CommandSpec {
        key: b'm',
        flags: CmdFlags::ARG_ADDR.union(CmdFlags::AUTO_REPEAT),
        descr: Some("modify mem"),
        kind: CommandKind::ModifyMem,
        data: MODIFY_STRIDE,
    },
    CommandSpec {
        key: b'i',
        flags: CmdFlags::empty(),
        descr: Some("platform info"),
        kind: CommandKind::PlatformInfo,
        data: 0,
    },
    CommandSpec {
        key: b' ',
        flags: CmdFlags::HIDDEN,
        descr: None,
        kind: CommandKind::ShowCommands,
        data: 0,
    },
];

/// Find an entry by its input character. First match in declaration
/// order wins; hidden entries participate.
pub fn find(key: u8) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|cmd| cmd.key == key)
}

/// Check the registry invariant: visible keys are distinct.
pub fn validate() -> BlResult<()> {
    validate_table(COMMANDS)
}

fn validate_table(table: &[CommandSpec]) -> BlResult<()> {
    for (i, a) in table.iter().enumerate() {
        if a.flags.contains(CmdFlags::HIDDEN) {
            continue;
        }
        for b in &table[i + 1..] {
            ensure!(
                b.flags.contains(CmdFlags::HIDDEN) || a.key != b.key,
                "duplicate command key '{}'",
                a.key as char
            );
        }
    }
    Ok(())
}

//! The interactive monitor: prompt, dispatch, auto-repeat.

pub mod command;
pub mod commands;
pub mod registry;

use crate::config::{COPYRIGHT_STR, FW_VER, FW_VER_CFG};
use crate::console::fmt::ConsoleExt;
use crate::diag;
use crate::hal::Hal;
use crate::monitor::command::{CmdFlags, CommandSpec};
use crate::platform::Platform;

/// What the monitor remembers between keypresses: the last executed
/// command and the address it ran with. Only `dispatch` writes it, and
/// only after a command completed.
#[derive(Default)]
pub struct Session {
    pub last_cmd: Option<&'static CommandSpec>,
    pub last_addr: usize,
}

/// The dispatch engine. Owns the HAL and the session; everything else
/// is static configuration.
pub struct Monitor<H: Hal> {
    hal: H,
    platform: &'static Platform,
    session: Session,
}

impl<H: Hal> Monitor<H> {
    pub fn new(hal: H, platform: &'static Platform) -> Self {
        Self {
            hal,
            platform,
            session: Session::default(),
        }
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Banner, identity report and command listing, as shown once at
    /// power-on.
    pub fn greet(&mut self) {
        self.hal.puts("\nSCR loader v");
        self.hal.puts(FW_VER);
        self.hal.puts("-");
        self.hal.puts(FW_VER_CFG);
        self.hal.puts("\n");
        self.hal.puts(COPYRIGHT_STR);
        self.hal.puts("\n");
        diag::hwinfo(&mut self.hal, self.platform);
        commands::help::run(&mut self.hal);
    }

    /// Run the session forever. The only way out is the `start` command
    /// jumping away, or an external reset.
    pub fn run(mut self) -> ! {
        self.greet();
        loop {
            self.step();
        }
    }

    /// One prompt/dispatch iteration.
    pub fn step(&mut self) {
        self.hal.puts(": ");
        let c = self.wait_char();
        self.dispatch(c);
    }

    /// Block until a character arrives. Every failed poll runs the idle
    /// hook; nothing else happens while waiting.
    fn wait_char(&mut self) -> u8 {
        loop {
            if let Some(c) = self.hal.getchar() {
                return c;
            }
            self.hal.idle();
        }
    }

    /// Route one input character.
    pub fn dispatch(&mut self, c: u8) {
        if let Some(cmd) = registry::find(c) {
            debug!("command '{}'", cmd.key as char);
            self.hal.putchar(b'\r');

            let addr = if cmd.flags.contains(CmdFlags::ARG_ADDR) {
                if let Some(descr) = cmd.descr {
                    self.hal.puts(descr);
                }
                self.hal.puts("\naddr: ");
                self.hal.read_hex()
            } else {
                cmd.data
            };

            cmd.kind.run(&mut self.hal, self.platform, addr);
            self.session.last_cmd = Some(cmd);
            self.session.last_addr = addr;
        } else if c == b'\r' {
            match self.session.last_cmd {
                Some(prev) if prev.flags.contains(CmdFlags::AUTO_REPEAT) => {
                    self.hal.putchar(b'\r');
                    self.session.last_addr = self.session.last_addr.wrapping_add(prev.data);
                    prev.kind.run(&mut self.hal, self.platform, self.session.last_addr);
                }
                _ => self.hal.putchar(b'\n'),
            }
        } else {
            // Session state stays untouched: auto-repeat survives a typo.
            self.hal.putchar(c);
            self.hal.puts(" - unknown command\n");
        }
    }
}

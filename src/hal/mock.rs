//! Scriptable HAL double for host tests.

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use super::{Hal, HwId, Memory, Serial, Timer};
use crate::drivers::xmodem::XmodemError;

/// In-memory HAL: scripted console input, captured output, a fake RAM
/// window and recorded side effects.
pub struct MockHal {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,

    /// Fake RAM window starting at `mem_base`.
    pub mem_base: usize,
    pub mem: Vec<u8>,
    /// Every address handed to `read_u8`, in call order.
    pub read_log: Vec<usize>,
    /// Word stores that landed outside the RAM window.
    pub stray_writes: Vec<(usize, usize)>,

    pub isa: usize,
    pub impl_id: usize,
    pub system_id: usize,
    pub build_id: usize,

    /// Results to hand out from `xmodem_receive`, front first.
    pub xmodem_results: VecDeque<Result<usize, XmodemError>>,
    /// `(addr, max_len)` of every transfer request.
    pub xmodem_calls: Vec<(usize, usize)>,

    pub jumps: Vec<usize>,
    pub delays: Vec<u64>,
    pub idle_calls: usize,
    /// Byte pushed into the input queue after the given number of idle
    /// polls, to end a blocking wait.
    pub idle_feed: Option<(usize, u8)>,
    pub flushes: usize,
}

impl MockHal {
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            mem_base: 0,
            mem: Vec::new(),
            read_log: Vec::new(),
            stray_writes: Vec::new(),
            isa: 0,
            impl_id: 0,
            system_id: 0,
            build_id: 0,
            xmodem_results: VecDeque::new(),
            xmodem_calls: Vec::new(),
            jumps: Vec::new(),
            delays: Vec::new(),
            idle_calls: 0,
            idle_feed: None,
            flushes: 0,
        }
    }

    pub fn with_mem(mut self, base: usize, size: usize) -> Self {
        self.mem_base = base;
        self.mem = std::vec![0; size];
        self
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    pub fn out_str(&self) -> String {
        String::from_utf8(self.output.clone()).unwrap()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    fn slot(&self, addr: usize) -> Option<usize> {
        addr.checked_sub(self.mem_base)
            .filter(|&off| off < self.mem.len())
    }
}

impl Serial for MockHal {
    fn getchar(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn putchar(&mut self, c: u8) {
        self.output.push(c);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

impl Timer for MockHal {
    fn delay_us(&mut self, us: u64) {
        self.delays.push(us);
    }
}

impl HwId for MockHal {
    fn isa(&self) -> usize {
        self.isa
    }

    fn impl_id(&self) -> usize {
        self.impl_id
    }

    fn system_id(&self) -> usize {
        self.system_id
    }

    fn build_id(&self) -> usize {
        self.build_id
    }
}

impl Memory for MockHal {
    fn read_u8(&mut self, addr: usize) -> u8 {
        self.read_log.push(addr);
        self.slot(addr).map_or(0, |off| self.mem[off])
    }

    fn write_u8(&mut self, addr: usize, val: u8) {
        if let Some(off) = self.slot(addr) {
            self.mem[off] = val;
        }
    }

    fn write_word(&mut self, addr: usize, val: usize) {
        match self.slot(addr) {
            Some(off) if off + core::mem::size_of::<usize>() <= self.mem.len() => {
                let bytes = val.to_le_bytes();
                self.mem[off..off + bytes.len()].copy_from_slice(&bytes);
            }
            _ => self.stray_writes.push((addr, val)),
        }
    }
}

impl Hal for MockHal {
    fn xmodem_receive(&mut self, addr: usize, max_len: usize) -> Result<usize, XmodemError> {
        self.xmodem_calls.push((addr, max_len));
        self.xmodem_results
            .pop_front()
            .expect("no scripted xmodem result")
    }

    fn jump(&mut self, addr: usize) {
        self.jumps.push(addr);
    }

    fn idle(&mut self) {
        self.idle_calls += 1;
        if let Some((after, byte)) = self.idle_feed {
            if self.idle_calls >= after {
                self.input.push_back(byte);
                self.idle_feed = None;
            }
        }
    }
}

//! XMODEM receive engine (classic 128-byte checksum variant).
//!
//! Generic over the HAL traits so it runs against the real UART on
//! hardware and against the mock in tests. Received bytes go straight to
//! memory through the [`Memory`] collaborator; the engine never buffers a
//! whole transfer.

use core::fmt;

use crate::hal::{Memory, Serial, Timer};

pub const SOH: u8 = 0x01;
pub const EOT: u8 = 0x04;
pub const ACK: u8 = 0x06;
pub const NAK: u8 = 0x15;
pub const CAN: u8 = 0x18;

/// Payload bytes per SOH block.
pub const BLOCK_LEN: usize = 128;

/// Per-byte receive timeout.
const BYTE_TIMEOUT_US: u64 = 1_000_000;
/// Input poll interval while waiting for a byte.
const POLL_INTERVAL_US: u64 = 100;
/// Block-level retry budget before the transfer is abandoned.
const MAX_RETRIES: u32 = 10;

/// Transfer failure, carrying the traditional negative wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmodemError {
    /// Sender went silent past the retry budget.
    Timeout,
    /// Sender aborted with CAN.
    Canceled,
    /// Block sequence broke (not current, not a duplicate).
    Sequence,
    /// Corrupt blocks past the retry budget.
    Retries,
    /// Transfer would overrun the receive window.
    TooLarge,
}

impl XmodemError {
    pub fn code(&self) -> i32 {
        match self {
            XmodemError::Timeout => -1,
            XmodemError::Canceled => -2,
            XmodemError::Sequence => -3,
            XmodemError::Retries => -4,
            XmodemError::TooLarge => -5,
        }
    }
}

impl fmt::Display for XmodemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            XmodemError::Timeout => "sender timeout",
            XmodemError::Canceled => "canceled by sender",
            XmodemError::Sequence => "block sequence error",
            XmodemError::Retries => "too many corrupt blocks",
            XmodemError::TooLarge => "transfer exceeds receive window",
        };
        write!(f, "{msg}")
    }
}

/// Receive a transfer into memory at `addr`, at most `max_len` bytes.
/// Blocks until the sender finishes or fails; returns the byte count.
pub fn receive<H>(hal: &mut H, addr: usize, max_len: usize) -> Result<usize, XmodemError>
where
    H: Serial + Timer + Memory + ?Sized,
{
    let mut received = 0usize;
    let mut expected: u8 = 1;
    let mut retries = MAX_RETRIES;

    // Kick the sender into checksum mode.
    hal.putchar(NAK);

    loop {
        match read_byte(hal, BYTE_TIMEOUT_US) {
            None => {
                retries -= 1;
                if retries == 0 {
                    return Err(XmodemError::Timeout);
                }
                hal.putchar(NAK);
            }
            Some(SOH) => match read_block(hal) {
                None => {
                    // The frame was consumed in full, so the stream is
                    // still block-aligned; any partial-frame leftovers
                    // get treated as noise on the next pass.
                    retries -= 1;
                    if retries == 0 {
                        return Err(XmodemError::Retries);
                    }
                    hal.putchar(NAK);
                }
                Some((seq, data)) => {
                    if seq == expected.wrapping_sub(1) {
                        // Sender missed our ACK; acknowledge again,
                        // do not store twice.
                        hal.putchar(ACK);
                        continue;
                    }
                    if seq != expected {
                        abort(hal);
                        return Err(XmodemError::Sequence);
                    }
                    if received + BLOCK_LEN > max_len {
                        abort(hal);
                        return Err(XmodemError::TooLarge);
                    }
                    for (i, b) in data.iter().enumerate() {
                        hal.write_u8(addr + received + i, *b);
                    }
                    received += BLOCK_LEN;
                    expected = expected.wrapping_add(1);
                    retries = MAX_RETRIES;
                    hal.putchar(ACK);
                }
            },
            Some(EOT) => {
                hal.putchar(ACK);
                return Ok(received);
            }
            Some(CAN) => {
                return Err(XmodemError::Canceled);
            }
            Some(_) => {
                // Line noise between blocks.
                retries -= 1;
                if retries == 0 {
                    return Err(XmodemError::Retries);
                }
                purge(hal);
                hal.putchar(NAK);
            }
        }
    }
}

/// Read sequence bytes, payload and checksum of one block. `None` on
/// timeout or verification failure.
fn read_block<H>(hal: &mut H) -> Option<(u8, [u8; BLOCK_LEN])>
where
    H: Serial + Timer + ?Sized,
{
    let seq = read_byte(hal, BYTE_TIMEOUT_US)?;
    let nseq = read_byte(hal, BYTE_TIMEOUT_US)?;

    let mut data = [0u8; BLOCK_LEN];
    let mut csum: u8 = 0;
    for slot in data.iter_mut() {
        let b = read_byte(hal, BYTE_TIMEOUT_US)?;
        *slot = b;
        csum = csum.wrapping_add(b);
    }
    let wire_csum = read_byte(hal, BYTE_TIMEOUT_US)?;

    if nseq != !seq || wire_csum != csum {
        return None;
    }
    Some((seq, data))
}

fn read_byte<H>(hal: &mut H, timeout_us: u64) -> Option<u8>
where
    H: Serial + Timer + ?Sized,
{
    let mut waited = 0u64;
    loop {
        if let Some(c) = hal.getchar() {
            return Some(c);
        }
        if waited >= timeout_us {
            return None;
        }
        hal.delay_us(POLL_INTERVAL_US);
        waited += POLL_INTERVAL_US;
    }
}

/// Drop whatever is left of a bad block so the NAK lands between blocks.
fn purge<H>(hal: &mut H)
where
    H: Serial + Timer + ?Sized,
{
    while read_byte(hal, POLL_INTERVAL_US).is_some() {}
}

fn abort<H: Serial + ?Sized>(hal: &mut H) {
    hal.putchar(CAN);
    hal.putchar(CAN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::MockHal;
    use std::vec::Vec;

    fn block(seq: u8, fill: u8) -> Vec<u8> {
        let mut f = std::vec![SOH, seq, !seq];
        let data = [fill; BLOCK_LEN];
        f.extend_from_slice(&data);
        f.push(data.iter().fold(0u8, |s, b| s.wrapping_add(*b)));
        f
    }

    #[test]
    fn test_single_block_transfer() {
        let mut hal = MockHal::new().with_mem(0x1000, 0x1000);
        hal.feed(&block(1, 0xa5));
        hal.feed(&[EOT]);

        let n = receive(&mut hal, 0x1000, 0x1000).unwrap();
        assert_eq!(n, BLOCK_LEN);
        assert!(hal.mem[..BLOCK_LEN].iter().all(|&b| b == 0xa5));
        assert_eq!(hal.mem[BLOCK_LEN], 0);
        // opening NAK, block ACK, EOT ACK
        assert_eq!(hal.output, [NAK, ACK, ACK]);
    }

    #[test]
    fn test_corrupt_block_is_retried() {
        let mut hal = MockHal::new().with_mem(0x1000, 0x1000);
        let mut bad = block(1, 0x11);
        let last = bad.len() - 1;
        bad[last] = bad[last].wrapping_add(1);
        hal.feed(&bad);
        hal.feed(&block(1, 0x22));
        hal.feed(&[EOT]);

        let n = receive(&mut hal, 0x1000, 0x1000).unwrap();
        assert_eq!(n, BLOCK_LEN);
        assert!(hal.mem[..BLOCK_LEN].iter().all(|&b| b == 0x22));
        assert!(hal.output.contains(&NAK));
    }

    #[test]
    fn test_duplicate_block_reacked_not_restored() {
        let mut hal = MockHal::new().with_mem(0x1000, 0x1000);
        hal.feed(&block(1, 0x33));
        hal.feed(&block(1, 0x44)); // retransmit of block 1
        hal.feed(&block(2, 0x55));
        hal.feed(&[EOT]);

        let n = receive(&mut hal, 0x1000, 0x1000).unwrap();
        assert_eq!(n, 2 * BLOCK_LEN);
        // first copy of block 1 wins
        assert!(hal.mem[..BLOCK_LEN].iter().all(|&b| b == 0x33));
        assert!(hal.mem[BLOCK_LEN..2 * BLOCK_LEN].iter().all(|&b| b == 0x55));
    }

    #[test]
    fn test_cancel() {
        let mut hal = MockHal::new().with_mem(0x1000, 0x1000);
        hal.feed(&[CAN, CAN]);
        assert_eq!(receive(&mut hal, 0x1000, 0x1000), Err(XmodemError::Canceled));
        assert_eq!(XmodemError::Canceled.code(), -2);
    }

    #[test]
    fn test_overflow_rejected() {
        let mut hal = MockHal::new().with_mem(0x1000, 0x40);
        hal.feed(&block(1, 0x66));
        let err = receive(&mut hal, 0x1000, 0x40).unwrap_err();
        assert_eq!(err, XmodemError::TooLarge);
        // abort is signaled to the sender
        assert_eq!(&hal.output[hal.output.len() - 2..], &[CAN, CAN][..]);
    }

    #[test]
    fn test_sender_timeout() {
        let mut hal = MockHal::new().with_mem(0x1000, 0x1000);
        let err = receive(&mut hal, 0x1000, 0x1000).unwrap_err();
        assert_eq!(err, XmodemError::Timeout);
        assert_eq!(err.code(), -1);
    }
}

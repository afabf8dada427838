//! Serial framing for the touch panel and vehicle bus links
//!
//! Both UARTs carry the same envelope, so a single parser instance per link
//! is enough:
//!
//! ```text
//! 0xAA | LEN | TYPE | PAYLOAD[LEN] | LEN ^ TYPE ^ PAYLOAD...
//! ```
//!
//! `LEN` counts payload bytes only and never exceeds [`MAX_PAYLOAD_SIZE`].

use heapless::Vec;

/// Synchronization byte opening every frame
pub const FRAME_START: u8 = 0xAA;

/// Largest payload a frame may carry
pub const MAX_PAYLOAD_SIZE: usize = 250;

/// START, LENGTH, TYPE and CHECKSUM
pub const FRAME_OVERHEAD: usize = 4;

/// Largest encoded frame
pub const MAX_FRAME_SIZE: usize = FRAME_OVERHEAD + MAX_PAYLOAD_SIZE;

/// Framing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload longer than [`MAX_PAYLOAD_SIZE`]
    PayloadTooLarge,
    /// Trailing XOR did not match
    InvalidChecksum,
    /// Bad LENGTH byte, or a payload the message layer cannot decode
    InvalidFrame,
    /// Output buffer shorter than the encoded frame
    BufferTooSmall,
}

/// One message on either link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub msg_type: u8,
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

fn checksum(length: u8, msg_type: u8, payload: &[u8]) -> u8 {
    payload.iter().fold(length ^ msg_type, |acc, &b| acc ^ b)
}

impl Frame {
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Frame with no payload (heartbeats)
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    pub fn encoded_len(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len()
    }

    /// Write the frame into `out`, returning the number of bytes used
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        let out = out.get_mut(..len).ok_or(FrameError::BufferTooSmall)?;
        let length = self.payload.len() as u8;

        let (header, rest) = out.split_at_mut(3);
        header.copy_from_slice(&[FRAME_START, length, self.msg_type]);
        let (body, tail) = rest.split_at_mut(self.payload.len());
        body.copy_from_slice(&self.payload);
        tail[0] = checksum(length, self.msg_type, &self.payload);

        Ok(len)
    }

    /// Encode into an owned buffer sized for the largest frame
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut out = Vec::new();
        // Capacity always covers a frame built by `new`
        out.resize(self.encoded_len(), 0)
            .map_err(|_| FrameError::BufferTooSmall)?;
        self.encode(&mut out)?;
        Ok(out)
    }
}

/// Where the parser is inside the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Sync,
    Length,
    Type { len: u8 },
    Payload { len: u8, msg_type: u8 },
    Checksum { len: u8, msg_type: u8 },
}

/// Incremental decoder fed straight from a UART read buffer
///
/// Anything before a START byte is skipped, so a link that comes up
/// mid-frame or drops a byte recovers at the next frame boundary.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            state: ParseState::Sync,
            payload: Vec::new(),
        }
    }

    /// Forget any partial frame
    pub fn reset(&mut self) {
        self.state = ParseState::Sync;
        self.payload.clear();
    }

    /// False while a frame is half received
    pub fn is_idle(&self) -> bool {
        self.state == ParseState::Sync
    }

    /// Consume one byte
    ///
    /// A completed frame is returned as soon as its checksum byte arrives.
    /// On error the partial frame is discarded and the parser is back in
    /// sync-hunting mode.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        self.state = match self.state {
            ParseState::Sync if byte == FRAME_START => ParseState::Length,
            ParseState::Sync => ParseState::Sync,
            ParseState::Length if byte as usize > MAX_PAYLOAD_SIZE => {
                self.reset();
                return Err(FrameError::InvalidFrame);
            }
            ParseState::Length => ParseState::Type { len: byte },
            ParseState::Type { len } => {
                self.payload.clear();
                if len == 0 {
                    ParseState::Checksum { len, msg_type: byte }
                } else {
                    ParseState::Payload { len, msg_type: byte }
                }
            }
            ParseState::Payload { len, msg_type } => {
                // LENGTH was bounded above, so this cannot overflow
                let _ = self.payload.push(byte);
                if self.payload.len() == len as usize {
                    ParseState::Checksum { len, msg_type }
                } else {
                    ParseState::Payload { len, msg_type }
                }
            }
            ParseState::Checksum { len, msg_type } => {
                let valid = byte == checksum(len, msg_type, &self.payload);
                let payload = core::mem::take(&mut self.payload);
                self.state = ParseState::Sync;
                return if valid {
                    Ok(Some(Frame { msg_type, payload }))
                } else {
                    Err(FrameError::InvalidChecksum)
                };
            }
        };
        Ok(None)
    }
}

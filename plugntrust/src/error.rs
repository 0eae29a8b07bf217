// plugntrust/src/error.rs

use thiserror::Error;

use crate::types::StatusWord;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected block: expected pcb {expected:#04x}, got {actual:#04x}")]
    UnexpectedBlock { expected: u8, actual: u8 },

    /// The secure element answered with a non-success status word. The raw
    /// value is preserved for caller inspection but not decomposed further.
    #[error("secure element status {0}")]
    Status(StatusWord),

    #[error("tlv tag {tag:#04x} not found")]
    TagNotFound { tag: u8 },

    #[error("buffer overflow: capacity {capacity}, needed {needed}")]
    BufferOverflow { capacity: usize, needed: usize },

    #[error("operation timed out")]
    Timeout,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

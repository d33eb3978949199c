//! Error types for zero-width steganography.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zw-stego operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while hiding or recovering payloads.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Carrier file is not valid UTF-8.
    #[error("Carrier file is not valid UTF-8: {}", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Signal phrase absent from the text.
    #[error("Signal phrase '{anchor}' not found in text")]
    AnchorNotFound { anchor: String },

    /// Anchor present, but no zero-width markers follow it.
    #[error("No zero-width payload found after signal phrase")]
    NoPayloadFound,

    /// Bit-string length is not a multiple of 8.
    #[error("Malformed bit-string: length {len} is not a multiple of 8")]
    MalformedBitstring { len: usize },

    /// Bit-string contains something other than '0' or '1'.
    #[error("Malformed bit-string: invalid digit {digit:?} at position {index}")]
    InvalidBitDigit { digit: char, index: usize },

    /// Payload character does not fit in a single byte.
    #[error("Payload character {ch:?} (U+{:04X}) at position {index} does not fit in 8 bits", code_point(.ch))]
    EncodingRange { ch: char, index: usize },

    /// Empty payload, nothing would be embedded.
    #[error("Payload is empty")]
    EmptyPayload,

    /// Multi-payload composition with no payloads.
    #[error("No payloads to compose")]
    EmptyBatch,

    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

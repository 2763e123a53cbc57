//! Error types for codec operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Codec error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Frequency analysis found no symbols.
    #[error("empty input: nothing to analyze")]
    EmptyInput,

    /// A byte outside the 7-bit alphabet appeared during analysis.
    #[error("byte 0x{byte:02x} at offset {offset} is outside the 128-symbol alphabet")]
    InvalidSymbol { byte: u8, offset: usize },

    /// A non-binary character appeared in a bit-string during packing.
    #[error("malformed bit-string: {found:?} at position {position}")]
    MalformedBitstring { position: usize, found: char },

    /// A symbol in the encode stream has no code table entry.
    #[error("no code for symbol 0x{symbol:02x}: table was built from a different input")]
    MissingCode { symbol: u8 },

    /// Encoded data is corrupted or inconsistent with the session tree.
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// Unexpected end of an encoded stream.
    #[error("unexpected EOF after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from an underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
        }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(byte: u8, offset: usize) -> Self {
        Error::InvalidSymbol { byte, offset }
    }

    /// Create a malformed bit-string error.
    pub fn malformed_bitstring(position: usize, found: char) -> Self {
        Error::MalformedBitstring { position, found }
    }

    /// Create a missing code error.
    pub fn missing_code(symbol: u8) -> Self {
        Error::MissingCode { symbol }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Error::UnexpectedEof { bytes_read }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Check if error is recoverable (can retry with different parameters).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::BufferTooSmall { .. } | Error::UnexpectedEof { .. }
        )
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::InvalidSymbol { .. } => "invalid_symbol",
            Error::MalformedBitstring { .. } => "malformed_bitstring",
            Error::MissingCode { .. } => "missing_code",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) => "io_error",
        }
    }
}

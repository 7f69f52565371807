//! Error types for fixwire coder operations

use crate::coder::WireType;
use alloc::string::String;

/// Errors that can occur during coder construction or stream coding
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug)]
pub enum CoderError {
    /// Stream ended before the full encoded width was read
    #[cfg_attr(
        feature = "std",
        error("Unexpected end of stream: expected {expected} bytes, got {actual}")
    )]
    UnexpectedEof {
        /// The number of bytes the decoder needed.
        expected: usize,
        /// The number of bytes the stream delivered before ending.
        actual: usize,
    },

    /// IO error during stream read/write
    #[cfg(feature = "std")]
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(#[from] std::io::Error),

    /// Coder constructed with an empty name
    #[cfg_attr(feature = "std", error("Coder name must be non-empty"))]
    EmptyCoderName,

    /// Declared wire type does not match the type the functions operate on
    #[cfg_attr(
        feature = "std",
        error("Coder '{coder}' declared wire type {declared}, but its functions operate on {actual}")
    )]
    TypeMismatch {
        /// Name passed at construction.
        coder: String,
        /// Wire type the caller declared.
        declared: WireType,
        /// Wire type the encode/decode functions are bound to.
        actual: WireType,
    },
}

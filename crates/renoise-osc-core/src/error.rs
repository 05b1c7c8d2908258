//! Error types for OSC encoding
//!
//! Every variant is a contract violation by the caller: a malformed address,
//! tag string or argument list. None of them depend on runtime conditions.

use thiserror::Error;

/// Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// OSC encoding error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Address pattern is empty, lacks the leading '/', or has NUL/non-ASCII bytes
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// String argument contains NUL or non-ASCII bytes
    #[error("invalid string argument at index {index}: {reason}")]
    InvalidString { index: usize, reason: String },

    /// Type tag outside the supported alphabet
    #[error("unsupported type tag: {0:?}")]
    UnsupportedTag(char),

    /// Tag count differs from argument count
    #[error("arity mismatch: {tags} type tags but {args} arguments")]
    ArityMismatch { tags: usize, args: usize },

    /// Argument variant does not fit its type tag
    #[error("argument {index} does not match tag '{tag}': found {found}")]
    ArgumentMismatch {
        index: usize,
        tag: char,
        found: &'static str,
    },

    /// MIDI quad built from the wrong number of bytes
    #[error("midi message must be exactly 4 bytes, got {0}")]
    InvalidMidi(usize),
}

//! Error type for constructing values from untyped input.

/// Errors raised when building a [`Word128`](crate::Word128) from caller data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input did not contain exactly the expected number of bytes.
    #[error("expected {expected} bytes, but got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
    /// An input element did not fit in a byte.
    #[error("byte value {value} at index {index} is out of range, must be between 0 and 255")]
    ByteOutOfRange {
        /// Position of the offending element.
        index: usize,
        /// The rejected value.
        value: i128,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;

// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Errors returned by positional operations.

use thiserror::Error;

/// Result type alias for skip list operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index lies outside the range accepted by the operation.
    /// Reads and removals accept `[0, len)`, insertion accepts `[0, len]`.
    #[error("index {index} out of range for skip list of length {len}")]
    OutOfRange { index: usize, len: usize },
}

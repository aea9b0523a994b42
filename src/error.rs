//! Error types for the block transform pipeline.

use thiserror::Error;

/// Error variants for transform operations.
///
/// Every variant is an input-contract violation detected before any output
/// is produced; nothing here is retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An input value violated the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A rank query outside the suffix order's bounds.
    #[error("rank {rank} out of range for length {len}")]
    OutOfRange { rank: usize, len: usize },
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}

use thiserror::Error;

/// Errors surfaced by the compression function to its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The supplied block does not hold exactly sixteen 32-bit words.
    #[error("invalid block size: expected {expected} words, got {actual}")]
    InvalidBlockSize {
        /// Number of words a block must hold.
        expected: usize,
        /// Number of words the caller supplied.
        actual: usize,
    },
}

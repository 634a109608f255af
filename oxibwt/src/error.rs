//! BWT/MTF-specific error types.

use thiserror::Error;

/// Errors raised by the BWT codec and its serialized form.
#[derive(Debug, Error)]
pub enum BwtError {
    /// Serialized BWT stream shorter than the 4-byte row header.
    #[error("Truncated BWT header: need 4 bytes, have {available}")]
    TruncatedHeader {
        /// Number of bytes actually present.
        available: usize,
    },

    /// Row index outside the valid range for the block.
    #[error("Row index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the block the index refers into.
        len: usize,
    },

    /// Header carries a nonzero row index but no transformed bytes follow.
    #[error("BWT header with row index {index} but empty body")]
    EmptyBody {
        /// Row index found in the header.
        index: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for BWT/MTF operations.
pub type Result<T> = std::result::Result<T, BwtError>;

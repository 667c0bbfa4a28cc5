//! Core error types (deterministic only)

use core::fmt;

/// Core parameter errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Chunk size of zero characters
    ZeroChunkSize,
    /// Overlap not strictly smaller than the chunk size
    OverlapTooLarge {
        /// Requested overlap in characters
        overlap: usize,
        /// Requested chunk size in characters
        chunk_size: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ZeroChunkSize => write!(f, "chunk size must be greater than 0"),
            CoreError::OverlapTooLarge {
                overlap,
                chunk_size,
            } => write!(
                f,
                "overlap ({overlap}) must be smaller than chunk size ({chunk_size})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

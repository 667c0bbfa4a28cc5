//! Core parameter types

use crate::error::{CoreError, Result};

/// Size limits shared by every splitting pass
///
/// Both values are measured in characters (Unicode scalar values), never
/// bytes, so multi-byte text gets the same budget as ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitParams {
    /// Soft upper bound on chunk length
    pub chunk_size: usize,
    /// Trailing context carried into the next chunk
    pub overlap: usize,
}

impl SplitParams {
    /// Create validated parameters
    ///
    /// Fails when `chunk_size` is zero or `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(CoreError::ZeroChunkSize);
        }
        if overlap >= chunk_size {
            return Err(CoreError::OverlapTooLarge {
                overlap,
                chunk_size,
            });
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create parameters, clamping instead of failing
    ///
    /// A zero chunk size becomes 1 and the overlap is capped at
    /// `chunk_size - 1`.
    pub fn clamped(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size - 1),
        }
    }

    /// Same overlap, chunk size multiplied by `factor`
    pub fn scaled(self, factor: usize) -> Self {
        Self::clamped(self.chunk_size.saturating_mul(factor), self.overlap)
    }
}

/// Where a separator ends up after splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorPlacement {
    /// The separator is consumed; merging re-inserts it between pieces
    Discard,
    /// The separator stays at the start of the piece that follows it
    Leading,
}

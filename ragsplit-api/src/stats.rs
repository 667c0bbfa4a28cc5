//! Summary statistics over a chunk list

use crate::dto::ChunkDTO;

/// Statistics shown next to a split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitStats {
    /// Number of chunks
    pub chunk_count: usize,
    /// Mean chunk length in characters, rounded
    pub average_chars: usize,
    /// Shortest chunk in characters
    pub min_chars: usize,
    /// Longest chunk in characters
    pub max_chars: usize,
    /// Chunks starting before the previous chunk ends
    pub overlapping_chunks: usize,
    /// Total bytes shared with the previous chunk
    pub overlap_chars: usize,
    /// Mean shared span over overlapping chunks, rounded
    pub average_overlap: usize,
}

impl SplitStats {
    /// Compute statistics for chunks in index order
    pub fn from_chunks(chunks: &[ChunkDTO]) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let lengths: Vec<usize> = chunks.iter().map(ChunkDTO::char_len).collect();
        let total: usize = lengths.iter().sum();

        let mut overlapping_chunks = 0;
        let mut overlap_chars = 0;
        for pair in chunks.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.start_offset < previous.end_offset {
                overlapping_chunks += 1;
                overlap_chars += previous.end_offset - current.start_offset;
            }
        }

        Self {
            chunk_count: chunks.len(),
            average_chars: rounded_mean(total, chunks.len()),
            min_chars: lengths.iter().copied().min().unwrap_or(0),
            max_chars: lengths.iter().copied().max().unwrap_or(0),
            overlapping_chunks,
            overlap_chars,
            average_overlap: rounded_mean(overlap_chars, overlapping_chunks),
        }
    }
}

fn rounded_mean(total: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (total as f64 / count as f64).round() as usize
    }
}

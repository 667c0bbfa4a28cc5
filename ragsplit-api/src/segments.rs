//! Highlight segments for rendering chunks over their source text

use crate::dto::ChunkDTO;
use ragsplit_core::floor_char_boundary;

/// A span of the source text, either covered by a chunk or a gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Byte offset of the segment start
    pub start: usize,
    /// Byte offset one past the segment end
    pub end: usize,
    /// Index of the covering chunk, `None` for gaps
    pub chunk_index: Option<usize>,
}

impl Segment {
    /// The slice of `source` this segment covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// Whether the segment is a gap between chunks
    pub fn is_gap(&self) -> bool {
        self.chunk_index.is_none()
    }
}

/// Tile `text` with segments in source order
///
/// Chunks are visited by start offset. A chunk whose span starts inside an
/// earlier one only contributes the part past the earlier end, so segments
/// never overlap and together cover `[0, text.len())` exactly. Positions are
/// moved down to character boundaries.
pub fn highlight_segments(text: &str, chunks: &[ChunkDTO]) -> Vec<Segment> {
    let mut sorted: Vec<&ChunkDTO> = chunks.iter().collect();
    sorted.sort_by_key(|chunk| chunk.start_offset);

    let mut segments = Vec::new();
    let mut pos = 0;

    for chunk in sorted {
        let start = floor_char_boundary(text, chunk.start_offset);
        let end = floor_char_boundary(text, chunk.end_offset);

        if start > pos {
            segments.push(Segment {
                start: pos,
                end: start,
                chunk_index: None,
            });
            pos = start;
        }

        if end > pos {
            segments.push(Segment {
                start: pos,
                end,
                chunk_index: Some(chunk.index),
            });
            pos = end;
        }
    }

    if pos < text.len() {
        segments.push(Segment {
            start: pos,
            end: text.len(),
            chunk_index: None,
        });
    }

    segments
}

//! Locating chunk contents in the source text
//!
//! Chunks are trimmed and merged pieces, so their position in the source is
//! recovered by searching for the first [`OFFSET_PROBE_CHARS`] characters of
//! each chunk. The search is a heuristic: repeated content can resolve to an
//! earlier occurrence, and a miss falls back to a mode-specific position
//! instead of failing.

use crate::config::OFFSET_PROBE_CHARS;
use ragsplit_core::{char_prefix, find_from, floor_char_boundary, next_char_boundary};
use tracing::warn;

/// How the search cursor behaves between chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMode {
    /// Cursor moves just past each located start; a miss resolves to 0 and
    /// leaves the cursor in place
    Anchored,
    /// Cursor moves just past each located start; a miss resolves to the
    /// cursor, which then advances by one character
    Advancing,
    /// Every chunk is searched from the start of the text; a miss resolves to 0
    Global,
}

/// Resolves chunk contents to `[start, end)` byte spans
#[derive(Debug)]
pub struct OffsetResolver<'t> {
    text: &'t str,
    mode: OffsetMode,
    cursor: usize,
    misses: usize,
}

impl<'t> OffsetResolver<'t> {
    /// Create a resolver over `text`
    pub fn new(text: &'t str, mode: OffsetMode) -> Self {
        Self {
            text,
            mode,
            cursor: 0,
            misses: 0,
        }
    }

    /// Locate the next chunk and return its span
    ///
    /// The end is `start + content.len()` clamped to the text length and
    /// moved back to a character boundary, so the span always slices `text`.
    pub fn locate(&mut self, content: &str) -> (usize, usize) {
        let probe = char_prefix(content, OFFSET_PROBE_CHARS);
        let from = match self.mode {
            OffsetMode::Anchored | OffsetMode::Advancing => self.cursor,
            OffsetMode::Global => 0,
        };

        let start = match find_from(self.text, probe, from) {
            Some(found) => {
                if self.mode != OffsetMode::Global {
                    self.cursor = next_char_boundary(self.text, found);
                }
                found
            }
            None => {
                self.misses += 1;
                warn!(
                    mode = ?self.mode,
                    cursor = self.cursor,
                    "chunk start not found in source text"
                );
                match self.mode {
                    OffsetMode::Advancing => {
                        let start = self.cursor.min(self.text.len());
                        self.cursor = next_char_boundary(self.text, start);
                        start
                    }
                    OffsetMode::Anchored | OffsetMode::Global => 0,
                }
            }
        };

        let end = floor_char_boundary(self.text, start + content.len());
        (start, end)
    }

    /// Number of chunks that could not be located
    pub fn misses(&self) -> usize {
        self.misses
    }
}

//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use ragsplit_api::{ChunkDTO, SplitStats};
use std::io::Write;

/// Plain text formatter - a header line per chunk followed by its content
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "==> {source} <==")?;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &ChunkDTO) -> Result<()> {
        write!(
            self.writer,
            "--- {} [{}..{}] {} chars",
            chunk.id,
            chunk.start_offset,
            chunk.end_offset,
            chunk.char_len()
        )?;
        if let Some(parent) = &chunk.parent_id {
            write!(self.writer, " ({parent})")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk.content)?;
        Ok(())
    }

    fn format_stats(&mut self, stats: &SplitStats) -> Result<()> {
        writeln!(
            self.writer,
            "=== {} chunks, avg {} chars (min {}, max {}), {} overlapping, avg overlap {}",
            stats.chunk_count,
            stats.average_chars,
            stats.min_chars,
            stats.max_chars,
            stats.overlapping_chunks,
            stats.average_overlap
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

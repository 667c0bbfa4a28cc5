//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use ragsplit_api::{ChunkDTO, SplitStats};
use std::io::Write;

/// Markdown formatter - a section per document, a fenced block per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new Markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

/// A backtick fence longer than any backtick run in `content`
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in content.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &ChunkDTO) -> Result<()> {
        self.chunk_count += 1;

        writeln!(self.writer, "### {}", chunk.id)?;
        writeln!(self.writer)?;
        write!(
            self.writer,
            "*bytes {}..{}, {} chars",
            chunk.start_offset,
            chunk.end_offset,
            chunk.char_len()
        )?;
        if let Some(parent) = &chunk.parent_id {
            write!(self.writer, ", parent {parent}")?;
        }
        writeln!(self.writer, "*")?;
        writeln!(self.writer)?;

        let fence = fence_for(&chunk.content);
        writeln!(self.writer, "{fence}text")?;
        writeln!(self.writer, "{}", chunk.content)?;
        writeln!(self.writer, "{fence}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_stats(&mut self, stats: &SplitStats) -> Result<()> {
        writeln!(self.writer, "| Chunks | Avg chars | Min | Max | Overlapping | Avg overlap |")?;
        writeln!(self.writer, "|---|---|---|---|---|---|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            stats.chunk_count,
            stats.average_chars,
            stats.min_chars,
            stats.max_chars,
            stats.overlapping_chunks,
            stats.average_overlap
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

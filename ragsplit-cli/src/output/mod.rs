//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use ragsplit_api::{ChunkDTO, SplitStats};
use std::io::Write;

/// Trait for output formatters
///
/// Calls arrive as `begin_document`, the document's chunks in index order,
/// an optional `format_stats`, and `finish` once after the last document.
pub trait OutputFormatter: Send + Sync {
    /// Start the chunks of a new source document
    fn begin_document(&mut self, source: &str) -> Result<()>;

    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &ChunkDTO) -> Result<()>;

    /// Output statistics for the current document
    fn format_stats(&mut self, stats: &SplitStats) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per chunk with its offsets
    Text,
    /// JSON document list
    Json,
    /// Markdown sections
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in a config file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) fn sample_chunks() -> Vec<ChunkDTO> {
    vec![
        ChunkDTO {
            id: "chunk-0".to_string(),
            content: "First paragraph.".to_string(),
            index: 0,
            start_offset: 0,
            end_offset: 16,
            parent_id: None,
        },
        ChunkDTO {
            id: "chunk-1".to_string(),
            content: "Second paragraph.".to_string(),
            index: 1,
            start_offset: 18,
            end_offset: 35,
            parent_id: Some("parent-0".to_string()),
        },
    ]
}

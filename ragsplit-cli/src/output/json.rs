//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use ragsplit_api::{ChunkDTO, SplitStats};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects every document and writes one array at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source path of the document
    pub source: String,
    /// Chunks in index order
    pub chunks: Vec<ChunkDTO>,
    /// Statistics, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SplitStats>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn current(&mut self) -> Result<&mut DocumentData> {
        self.documents
            .last_mut()
            .ok_or_else(|| anyhow::anyhow!("chunk written before any document"))
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            chunks: Vec::new(),
            stats: None,
        });
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &ChunkDTO) -> Result<()> {
        self.current()?.chunks.push(chunk.clone());
        Ok(())
    }

    fn format_stats(&mut self, stats: &SplitStats) -> Result<()> {
        self.current()?.stats = Some(*stats);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

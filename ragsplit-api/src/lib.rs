//! Public API for ragsplit text splitting
//!
//! This crate provides a stable interface over the splitting engine plus
//! the helpers a retrieval pipeline needs around it: separator parsing,
//! split statistics, highlight segments, corpus splitting and embedding
//! batch planning.
//!
//! ```
//! use ragsplit_api::{Config, Strategy, TextSplitter};
//!
//! let config = Config::builder()
//!     .strategy(Strategy::Recursive)
//!     .chunk_size(40)
//!     .overlap_size(5)
//!     .build()
//!     .unwrap();
//! let splitter = TextSplitter::with_config(config).unwrap();
//! let output = splitter.process_text("One paragraph.\n\nAnother paragraph.").unwrap();
//! assert_eq!(output.chunks.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod corpus;
pub mod dto;
pub mod error;
pub mod segments;
pub mod separators;
pub mod stats;

use error::Result;
use std::sync::Arc;
use tracing::debug;

// Re-export key types
pub use batch::{Batch, BatchPlan, DEFAULT_BATCH_SIZE};
pub use config::{Config, ConfigBuilder};
pub use corpus::{split_corpus, Corpus, CorpusChunk, Document, IndexNamespace};
pub use dto::{ChunkDTO, Input, Metadata, Output};
pub use error::ApiError;
pub use ragsplit_engine::{ExecutionMode, Strategy};
pub use segments::{highlight_segments, Segment};
pub use separators::{parse_separator_list, unescape_separator};
pub use stats::SplitStats;

/// Main entry point for text splitting
///
/// Wraps a validated engine processor; a splitter can be shared across
/// threads and reused for any number of texts.
pub struct TextSplitter {
    inner: Arc<ragsplit_engine::SplitProcessor>,
    config: Config,
}

impl TextSplitter {
    /// Create a splitter with default configuration (recursive, 500 / 50)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a splitter with a strategy preset
    pub fn with_strategy(strategy: Strategy) -> Result<Self> {
        let config = Config::builder().strategy(strategy).build()?;
        Self::with_config(config)
    }

    /// Create a splitter with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = ragsplit_engine::SplitProcessor::with_config(config.engine_config().clone())?;
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Split the text of `input`
    pub fn process(&self, input: Input) -> Result<Output> {
        debug!(input = ?input, "reading input");
        let text = input.read_text()?;
        self.process_text(&text)
    }

    /// Split text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        let engine_output = self.inner.process(text)?;

        let chunks: Vec<ChunkDTO> = engine_output.chunks.into_iter().map(ChunkDTO::from).collect();
        let stats = SplitStats::from_chunks(&chunks);
        let metadata = Metadata::from_engine(
            engine_output.metadata,
            self.config.chunk_size(),
            self.config.overlap_size(),
        );

        Ok(Output {
            chunks,
            stats,
            metadata,
        })
    }

    /// Split with an explicit execution mode for the child passes
    pub fn process_with_mode(&self, text: &str, mode: ExecutionMode) -> Result<Output> {
        let config = self.config.clone().with_execution_mode(mode);
        Self::with_config(config)?.process_text(text)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Split text with the given strategy, sizes and escaped separators
///
/// Separators are unescaped (`\n`, `\t`) before use. With the fixed
/// strategy only the first one is used, and `""` splits anywhere.
pub fn split_text<S: AsRef<str>>(
    text: &str,
    strategy: Strategy,
    chunk_size: usize,
    overlap_size: usize,
    separators: &[S],
) -> Result<Vec<ChunkDTO>> {
    let config = Config::builder()
        .strategy(strategy)
        .chunk_size(chunk_size)
        .overlap_size(overlap_size)
        .escaped_separators(separators)
        .build()?;
    Ok(TextSplitter::with_config(config)?.process_text(text)?.chunks)
}

/// Split text with default configuration
pub fn process_text(text: &str) -> Result<Output> {
    TextSplitter::new()?.process_text(text)
}

/// Split a file with default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    TextSplitter::new()?.process(Input::from_file(path.as_ref().to_path_buf()))
}

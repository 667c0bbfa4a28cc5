//! Split processor and builder

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    assembler::{Assembled, ResultAssembler},
    chunk::Chunk,
    config::{EngineConfig, Strategy},
    error::Result,
    executor::ExecutionMode,
    hierarchy::build_hierarchy,
    offsets::OffsetMode,
};
use ragsplit_core::{char_len, FixedSplitter, RecursiveSplitter, SplitParams, TextSplit};
use std::{sync::Arc, time::Instant};
use tracing::{debug, warn};

/// Main split processor
///
/// Holds a validated configuration; every call to [`SplitProcessor::process`]
/// is independent and produces a fresh chunk list.
pub struct SplitProcessor {
    dispatcher: Arc<AdaptiveDispatcher>,
    config: EngineConfig,
    params: SplitParams,
}

/// Chunks plus processing metadata
#[derive(Debug, Clone)]
pub struct SplitOutput {
    /// Chunks in index order
    pub chunks: Vec<Chunk>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Strategy that produced the chunks
    pub strategy: Strategy,
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Number of parent blocks (parent-child only)
    pub parent_count: Option<usize>,
    /// Chunks whose start could not be found in the source
    pub offset_misses: usize,
}

impl SplitProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a processor for a strategy with its preset configuration
    pub fn with_strategy(strategy: Strategy) -> Result<Self> {
        Self::with_config(EngineConfig::for_strategy(strategy))
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let params = config.validate()?;
        let dispatcher = Arc::new(AdaptiveDispatcher::new(&config)?);
        Ok(Self {
            dispatcher,
            config,
            params,
        })
    }

    /// The configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Split `text` with the configured execution mode
    pub fn process(&self, text: &str) -> Result<SplitOutput> {
        self.process_with_mode(text, self.config.execution_mode)
    }

    /// Split `text` with a specific execution mode
    ///
    /// The mode only matters for parent-child splitting; the other
    /// strategies are a single sequential pass.
    pub fn process_with_mode(&self, text: &str, mode: ExecutionMode) -> Result<SplitOutput> {
        let start_time = Instant::now();
        debug!(
            strategy = self.config.strategy.as_str(),
            chunk_size = self.params.chunk_size,
            overlap = self.params.overlap,
            bytes = text.len(),
            "splitting text"
        );

        let mut execution_mode = ExecutionMode::Sequential;
        let mut parent_count = None;

        let assembled = match self.config.strategy {
            Strategy::Fixed => {
                let splitter = FixedSplitter::new(self.params, self.config.fixed_separator());
                ResultAssembler::new(OffsetMode::Anchored).assemble(text, splitter.split(text))
            }
            Strategy::Recursive => {
                let splitter = self.recursive_splitter();
                ResultAssembler::new(OffsetMode::Advancing).assemble(text, splitter.split(text))
            }
            Strategy::ParentChild => {
                let splitter = self.recursive_splitter();
                let hierarchy = build_hierarchy(&splitter, &self.dispatcher, text, mode)?;
                execution_mode = hierarchy.mode_used;
                parent_count = Some(hierarchy.parents.len());
                ResultAssembler::new(OffsetMode::Global).assemble(text, hierarchy.children)
            }
        };

        self.report_oversized(&assembled);

        let Assembled {
            chunks,
            offset_misses,
        } = assembled;

        let metadata = ProcessingMetadata {
            strategy: self.config.strategy,
            execution_mode,
            processing_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            bytes_processed: text.len(),
            chars_processed: char_len(text),
            parent_count,
            offset_misses,
        };
        debug!(
            chunks = chunks.len(),
            misses = offset_misses,
            elapsed_ms = metadata.processing_time_ms,
            "split complete"
        );

        Ok(SplitOutput { chunks, metadata })
    }

    /// Split `text` and return only the chunks
    pub fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        Ok(self.process(text)?.chunks)
    }

    fn recursive_splitter(&self) -> RecursiveSplitter {
        RecursiveSplitter::new(self.params, self.config.separators.iter().cloned())
    }

    fn report_oversized(&self, assembled: &Assembled) {
        for chunk in &assembled.chunks {
            let len = chunk.char_len();
            if len > self.params.chunk_size {
                warn!(
                    chunk = %chunk.id,
                    chars = len,
                    chunk_size = self.params.chunk_size,
                    "chunk exceeds chunk size"
                );
            }
        }
    }
}

/// Builder for SplitProcessor
///
/// Provides a fluent interface for configuring the processor.
pub struct SplitProcessorBuilder {
    config: EngineConfig,
}

impl Default for SplitProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitProcessorBuilder {
    /// Create a new builder starting from the recursive preset
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the strategy
    ///
    /// Switching to [`Strategy::Fixed`] with the default separator list
    /// replaces it with the fixed preset separator.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if strategy == Strategy::Fixed && self.config.separators == EngineConfig::recursive().separators
        {
            self.config.separators = EngineConfig::fixed().separators;
        }
        self.config.strategy = strategy;
        self
    }

    /// Set the chunk size in characters
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Set the overlap in characters
    pub fn overlap_size(mut self, overlap_size: usize) -> Self {
        self.config.overlap_size = overlap_size;
        self
    }

    /// Set the separators, coarsest first
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the parent count at which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<SplitProcessor> {
        SplitProcessor::with_config(self.config)
    }
}

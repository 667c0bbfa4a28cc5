//! High-level configuration API

use crate::{
    error::{ApiError, Result},
    separators::{parse_separator_list, unescape_all},
    TextSplitter,
};
use ragsplit_engine::{
    config::DEFAULT_FIXED_SEPARATOR, EngineConfig, ExecutionMode, Strategy,
};

/// High-level configuration for text splitting
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    inner: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inner: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Recursive splitting, 500 / 50 characters
    pub fn recursive() -> Self {
        Self::default()
    }

    /// Fixed splitting on paragraph breaks
    pub fn fixed() -> Self {
        Self {
            inner: EngineConfig::fixed(),
        }
    }

    /// Parent-child splitting
    pub fn parent_child() -> Self {
        Self {
            inner: EngineConfig::parent_child(),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Splitting strategy
    pub fn strategy(&self) -> Strategy {
        self.inner.strategy
    }

    /// Chunk size in characters
    pub fn chunk_size(&self) -> usize {
        self.inner.chunk_size
    }

    /// Overlap in characters
    pub fn overlap_size(&self) -> usize {
        self.inner.overlap_size
    }

    /// Separators, coarsest first
    pub fn separators(&self) -> &[String] {
        &self.inner.separators
    }

    /// Thread count (None = auto)
    pub fn threads(&self) -> Option<usize> {
        self.inner.threads
    }

    /// The underlying engine configuration
    pub fn engine_config(&self) -> &EngineConfig {
        &self.inner
    }

    pub(crate) fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.inner.execution_mode = mode;
        self
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    raw_separators: bool,
}

impl ConfigBuilder {
    /// Set the strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.inner.strategy = strategy;
        self
    }

    /// Set the strategy by name (`fixed`, `recursive`, `parent-child`)
    pub fn strategy_name(self, name: &str) -> Result<Self> {
        let strategy = name.parse::<Strategy>()?;
        Ok(self.strategy(strategy))
    }

    /// Set the chunk size in characters
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.inner.chunk_size = size;
        self
    }

    /// Set the overlap in characters
    pub fn overlap_size(mut self, size: usize) -> Self {
        self.config.inner.overlap_size = size;
        self
    }

    /// Set separators exactly as given
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.inner.separators = separators.into_iter().map(Into::into).collect();
        self.raw_separators = false;
        self
    }

    /// Set separators from a comma-separated, escaped list such as
    /// `"\n\n, \n,  , "`
    ///
    /// With the fixed strategy an empty first entry means the default
    /// paragraph separator.
    pub fn raw_separators(mut self, list: &str) -> Self {
        self.config.inner.separators = parse_separator_list(list);
        self.raw_separators = true;
        self
    }

    /// Set separators that may contain `\n` and `\t` escape sequences
    ///
    /// Entries are used as given once unescaped; `""` stays the character
    /// level separator for every strategy.
    pub fn escaped_separators<S: AsRef<str>>(mut self, separators: &[S]) -> Self {
        self.config.inner.separators = unescape_all(separators);
        self.raw_separators = false;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.inner.threads = threads;
        self
    }

    /// Set the execution mode for parent-child child passes
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.inner.execution_mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<Config> {
        let inner = &mut self.config.inner;

        if inner.strategy == Strategy::Fixed {
            let first = match inner.separators.first() {
                Some(sep) if !(sep.is_empty() && self.raw_separators) => sep.clone(),
                _ => DEFAULT_FIXED_SEPARATOR.to_string(),
            };
            inner.separators = vec![first];
        }

        inner.validate().map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }

    /// Build a text splitter directly
    pub fn build_processor(self) -> Result<TextSplitter> {
        TextSplitter::with_config(self.build()?)
    }
}

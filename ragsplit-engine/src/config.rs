//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};
use ragsplit_core::SplitParams;
use std::{fmt, str::FromStr};

/// Default chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default overlap in characters
pub const DEFAULT_OVERLAP: usize = 50;

/// Default separators, coarsest first
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Separator the fixed strategy uses when none is configured
pub const DEFAULT_FIXED_SEPARATOR: &str = "\n\n";

/// Number of leading characters used to locate a chunk in the source
pub const OFFSET_PROBE_CHARS: usize = 50;

/// Parent blocks are this many times larger than child chunks
pub const PARENT_SCALE: usize = 2;

/// Splitting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Split on a single separator and merge up to the chunk size
    Fixed,
    /// Walk the separator list from coarse to fine
    #[default]
    Recursive,
    /// Coarse parent blocks, each split again into child chunks
    ParentChild,
}

impl Strategy {
    /// Every strategy, in display order
    pub const ALL: [Strategy; 3] = [Strategy::Fixed, Strategy::Recursive, Strategy::ParentChild];

    /// Stable identifier (`fixed`, `recursive`, `parent-child`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Fixed => "fixed",
            Strategy::Recursive => "recursive",
            Strategy::ParentChild => "parent-child",
        }
    }

    /// One-line human description
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Fixed => "split on one separator, merge pieces up to the chunk size",
            Strategy::Recursive => "try separators from paragraphs down to characters",
            Strategy::ParentChild => "split parents at twice the chunk size, then split each parent",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Strategy::Fixed),
            "recursive" => Ok(Strategy::Recursive),
            "parent-child" | "parent_child" | "parentchild" => Ok(Strategy::ParentChild),
            other => Err(EngineError::ConfigError(format!(
                "unknown strategy '{other}' (expected fixed, recursive or parent-child)"
            ))),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Splitting strategy
    pub strategy: Strategy,
    /// Soft upper bound on chunk length in characters
    pub chunk_size: usize,
    /// Trailing characters repeated at the start of the next chunk
    pub overlap_size: usize,
    /// Ordered separators; the fixed strategy only uses the first one
    pub separators: Vec<String>,
    /// Execution mode for parent-child child passes
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum parent count before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::recursive()
    }
}

impl EngineConfig {
    /// Recursive splitting with the default separators
    pub fn recursive() -> Self {
        Self {
            strategy: Strategy::Recursive,
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 8,
        }
    }

    /// Fixed splitting on paragraph breaks
    pub fn fixed() -> Self {
        Self {
            strategy: Strategy::Fixed,
            separators: vec![DEFAULT_FIXED_SEPARATOR.to_string()],
            ..Self::recursive()
        }
    }

    /// Parent-child splitting with the default separators
    pub fn parent_child() -> Self {
        Self {
            strategy: Strategy::ParentChild,
            ..Self::recursive()
        }
    }

    /// Preset for a strategy
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Fixed => Self::fixed(),
            Strategy::Recursive => Self::recursive(),
            Strategy::ParentChild => Self::parent_child(),
        }
    }

    /// Check the configuration and return the size parameters
    pub fn validate(&self) -> Result<SplitParams> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be greater than 0".to_string(),
            ));
        }
        Ok(SplitParams::new(self.chunk_size, self.overlap_size)?)
    }

    /// Separator used by the fixed strategy
    pub fn fixed_separator(&self) -> &str {
        self.separators
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_FIXED_SEPARATOR)
    }
}

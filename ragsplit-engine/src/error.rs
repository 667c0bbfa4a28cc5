//! Engine error types

use ragsplit_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid size parameters
    #[error("invalid split parameters: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

//! Splitting strategies and execution for ragsplit
//!
//! This crate turns the primitives of `ragsplit-core` into the three
//! user-facing strategies (fixed, recursive and parent-child), resolves
//! the source offsets of every chunk and runs the independent child passes
//! of parent-child splitting sequentially or on a rayon pool.

#![warn(missing_docs)]

pub mod adaptive_dispatcher;
pub mod assembler;
pub mod chunk;
pub mod config;
pub mod error;
pub mod executor;
pub mod hierarchy;
pub mod offsets;
pub mod processor;

// Re-export key types
pub use assembler::{DraftChunk, ResultAssembler};
pub use chunk::Chunk;
pub use config::{EngineConfig, Strategy};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use offsets::{OffsetMode, OffsetResolver};
pub use processor::{ProcessingMetadata, SplitOutput, SplitProcessor, SplitProcessorBuilder};

// Re-export from core for convenience
pub use ragsplit_core::{CoreError, SplitParams};

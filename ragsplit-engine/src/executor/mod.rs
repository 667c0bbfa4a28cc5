//! Execution strategies for the child passes of parent-child splitting

use crate::error::Result;
use ragsplit_core::TextSplit;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick sequential or parallel from the number of blocks
    Adaptive,
}

impl ExecutionMode {
    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Runs one splitter over many independent blocks
///
/// The result holds one entry per block, in block order, whatever the
/// execution strategy.
pub trait Executor: Send + Sync {
    /// Split every block with `splitter`
    fn split_blocks(&self, splitter: &dyn TextSplit, blocks: &[&str]) -> Result<Vec<Vec<String>>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Select an execution mode from the number of blocks to split
pub fn auto_select(block_count: usize, threshold: usize) -> ExecutionMode {
    if block_count < 2 || block_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

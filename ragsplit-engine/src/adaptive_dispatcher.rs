//! Adaptive execution dispatcher
//!
//! Picks sequential or parallel execution for the child passes of
//! parent-child splitting from the number of parent blocks.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use ragsplit_core::TextSplit;
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Adaptive execution dispatcher
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    parallel_threshold: usize,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    ///
    /// A configured thread count builds the worker pool here, once.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.threads)?,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// Select the execution mode for `block_count` blocks
    pub fn select_mode(&self, block_count: usize) -> ExecutionMode {
        auto_select(block_count, self.parallel_threshold)
    }

    /// Split every block with the given mode and report the mode actually used
    pub fn dispatch(
        &self,
        splitter: &dyn TextSplit,
        blocks: &[&str],
        mode: ExecutionMode,
    ) -> Result<(Vec<Vec<String>>, ExecutionMode)> {
        let mode = match mode {
            ExecutionMode::Adaptive => self.select_mode(blocks.len()),
            explicit => explicit,
        };
        debug!(blocks = blocks.len(), mode = mode.as_str(), "dispatching child pass");

        let executor: &dyn Executor = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => &self.parallel_executor,
            _ => &self.sequential_executor,
        };
        Ok((executor.split_blocks(splitter, blocks)?, executor.mode()))
    }
}

impl Executor for AdaptiveDispatcher {
    fn split_blocks(&self, splitter: &dyn TextSplit, blocks: &[&str]) -> Result<Vec<Vec<String>>> {
        self.dispatch(splitter, blocks, ExecutionMode::Adaptive)
            .map(|(groups, _)| groups)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Adaptive
    }
}

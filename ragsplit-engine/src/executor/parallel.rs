//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use ragsplit_core::TextSplit;
use rayon::{prelude::*, ThreadPool};
use std::sync::Arc;
use tracing::debug;

/// Parallel multi-threaded executor
///
/// Uses the global rayon pool unless a thread count is given, in which case
/// a dedicated pool of that size is built once and shared by every call.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(threads) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?,
            )),
            None => None,
        };
        Ok(Self { threads, pool })
    }

    /// Number of worker threads this executor will use
    pub fn thread_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => self.threads.unwrap_or_else(num_cpus::get),
        }
    }

    fn split_parallel(splitter: &dyn TextSplit, blocks: &[&str]) -> Vec<Vec<String>> {
        blocks.par_iter().map(|block| splitter.split(block)).collect()
    }
}

impl Executor for ParallelExecutor {
    fn split_blocks(&self, splitter: &dyn TextSplit, blocks: &[&str]) -> Result<Vec<Vec<String>>> {
        debug!(blocks = blocks.len(), threads = self.thread_count(), "parallel child pass");

        match &self.pool {
            Some(pool) => Ok(pool.install(|| Self::split_parallel(splitter, blocks))),
            None => Ok(Self::split_parallel(splitter, blocks)),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

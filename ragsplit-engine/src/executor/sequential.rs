//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
};
use ragsplit_core::TextSplit;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn split_blocks(&self, splitter: &dyn TextSplit, blocks: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(blocks.iter().map(|block| splitter.split(block)).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

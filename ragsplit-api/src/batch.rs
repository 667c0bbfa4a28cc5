//! Embedding batch planning
//!
//! Chunk contents are sent to an embedding service in fixed-size batches,
//! one request at a time. This module only plans the batches; sending them
//! is up to the caller.

use crate::error::{ApiError, Result};

/// Default number of chunks per embedding request
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Fixed-size batching of an ordered item list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    batch_size: usize,
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// One planned batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a, T> {
    /// 0-based batch number
    pub index: usize,
    /// Items in this batch, in input order
    pub items: &'a [T],
    /// Items covered once this batch is done
    pub completed: usize,
    /// Total number of items
    pub total: usize,
}

impl<T> Batch<'_, T> {
    /// Share of all items covered once this batch is done, in percent
    pub fn progress(&self) -> u8 {
        progress_percent(self.completed, self.total)
    }
}

impl BatchPlan {
    /// Create a plan with `batch_size` items per batch
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(ApiError::Config(
                "batch size must be greater than 0".to_string(),
            ));
        }
        Ok(Self { batch_size })
    }

    /// Items per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches needed for `total` items
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size)
    }

    /// Progress in percent after `batch_index` (0-based) has completed
    pub fn progress(&self, batch_index: usize, total: usize) -> u8 {
        let completed = ((batch_index + 1) * self.batch_size).min(total);
        progress_percent(completed, total)
    }

    /// Iterate over the batches of `items`
    pub fn batches<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = Batch<'a, T>> + 'a {
        let batch_size = self.batch_size;
        let total = items.len();
        items
            .chunks(batch_size)
            .enumerate()
            .map(move |(index, batch)| Batch {
                index,
                items: batch,
                completed: (index * batch_size + batch.len()).min(total),
                total,
            })
    }
}

fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

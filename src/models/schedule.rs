//! Schedule (result) model.
//!
//! A schedule is the linear execution order obtained by running batches
//! one after another, with the total elapsed time that order implies.

use serde::{Deserialize, Serialize};

use super::Batch;

/// A planned schedule.
///
/// `execution_order` concatenates batch contents in planning order;
/// `total_time` sums each batch's critical path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Job ids in execution order.
    pub execution_order: Vec<String>,
    /// Total elapsed time across all batches.
    pub total_time: f64,
    /// Batches in execution order.
    pub batches: Vec<Batch>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from planned batches.
    pub fn from_batches(batches: Vec<Batch>) -> Self {
        let mut schedule = Self::new();
        for batch in batches {
            schedule.push_batch(batch);
        }
        schedule
    }

    /// Appends a batch, extending the execution order and total time.
    pub fn push_batch(&mut self, batch: Batch) {
        self.execution_order
            .extend(batch.job_ids().map(str::to_string));
        self.total_time += batch.critical_path();
        self.batches.push(batch);
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Index of the first batch containing a job with the given id.
    pub fn batch_of(&self, job_id: &str) -> Option<usize> {
        self.batches
            .iter()
            .position(|b| b.jobs.iter().any(|j| j.id == job_id))
    }
}

//! Batch model.
//!
//! A batch is a group of jobs that run simultaneously on the shared
//! resource. Jobs in a batch run in parallel, so a batch takes as long as
//! its longest job (its critical path).

use serde::{Deserialize, Serialize};

use super::{CapacityConstraint, Job};

/// An ordered group of jobs planned to run together.
///
/// Every batch satisfies the capacity constraint except a fallback batch,
/// which holds exactly one job whose volume alone exceeds `max_volume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Jobs in planning order.
    pub jobs: Vec<Job>,
    /// Emitted by the single-job fallback rather than the combination search.
    pub fallback: bool,
}

impl Batch {
    /// Creates a batch found by the combination search.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            fallback: false,
        }
    }

    /// Creates a fallback batch holding a single job.
    pub fn fallback(job: Job) -> Self {
        Self {
            jobs: vec![job],
            fallback: true,
        }
    }

    /// Summed volume of all jobs.
    pub fn total_volume(&self) -> f64 {
        self.jobs.iter().map(|j| j.volume).sum()
    }

    /// Longest duration in the batch (0 for an empty batch).
    pub fn critical_path(&self) -> f64 {
        self.jobs.iter().map(|j| j.duration).fold(0.0, f64::max)
    }

    /// Job ids in batch order.
    pub fn job_ids(&self) -> impl Iterator<Item = &str> {
        self.jobs.iter().map(|j| j.id.as_str())
    }

    /// Number of jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the batch holds no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Whether this batch came from the fallback path.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Whether the batch respects both capacity bounds.
    pub fn satisfies(&self, constraint: &CapacityConstraint) -> bool {
        constraint.admits(self.total_volume(), self.len())
    }
}

//! Job model.
//!
//! A job is one discrete unit of production work: it occupies part of the
//! shared resource's volume while it runs, and it runs for a fixed duration
//! whether alone or alongside other jobs in the same batch.

use serde::{Deserialize, Serialize};

/// A job to be grouped into batches.
///
/// Immutable value data. Identity within a planning run is by position in
/// the input, not by `id`; duplicate ids are tolerated by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    pub id: String,
    /// Volume occupied on the shared resource (non-negative).
    pub volume: f64,
    /// Scheduling priority (lower = earlier under the default order).
    pub priority: i32,
    /// Processing time, alone or in parallel with others.
    #[serde(alias = "print_time")]
    pub duration: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i32, duration: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            duration,
        }
    }

    /// Sets the volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

//! Batch schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Batch count | Number of batches |
//! | Fallback count | Batches emitted by the oversized-job fallback |
//! | Avg Volume Utilization | Mean of total_volume / max_volume per batch |
//! | Avg Slot Fill | Mean of len / max_items per batch |
//! | Sequential Time | Sum of all job durations (no batching) |
//! | Parallel Speedup | Sequential time / total time |

use crate::models::{CapacityConstraint, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct BatchKpi {
    /// Number of batches.
    pub batch_count: usize,
    /// Batches that violate `max_volume` via the fallback.
    pub fallback_count: usize,
    /// Mean volume utilization per batch (fallback batches may exceed 1.0).
    pub avg_volume_utilization: f64,
    /// Mean fraction of `max_items` slots used per batch (0.0..1.0).
    pub avg_slot_fill: f64,
    /// Total elapsed time of the schedule.
    pub total_time: f64,
    /// Elapsed time if every job ran on its own.
    pub sequential_time: f64,
    /// How much faster batching is than running jobs one at a time.
    pub parallel_speedup: f64,
}

impl BatchKpi {
    /// Computes KPIs for a schedule planned under `constraint`.
    pub fn calculate(schedule: &Schedule, constraint: &CapacityConstraint) -> Self {
        let batch_count = schedule.batch_count();
        let fallback_count = schedule.batches.iter().filter(|b| b.is_fallback()).count();

        let (avg_volume_utilization, avg_slot_fill) = if batch_count == 0 {
            (0.0, 0.0)
        } else {
            let volume_sum: f64 = schedule
                .batches
                .iter()
                .map(|b| b.total_volume() / constraint.max_volume)
                .sum();
            let fill_sum: f64 = schedule
                .batches
                .iter()
                .map(|b| b.len() as f64 / constraint.max_items as f64)
                .sum();
            (volume_sum / batch_count as f64, fill_sum / batch_count as f64)
        };

        let sequential_time: f64 = schedule
            .batches
            .iter()
            .flat_map(|b| b.jobs.iter())
            .map(|j| j.duration)
            .sum();

        let parallel_speedup = if schedule.total_time > 0.0 {
            sequential_time / schedule.total_time
        } else {
            1.0
        };

        Self {
            batch_count,
            fallback_count,
            avg_volume_utilization,
            avg_slot_fill,
            total_time: schedule.total_time,
            sequential_time,
            parallel_speedup,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_volume_utilization: f64, max_batches: usize) -> bool {
        self.avg_volume_utilization >= min_volume_utilization && self.batch_count <= max_batches
    }
}

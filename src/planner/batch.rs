//! Greedy largest-combination batch planner.
//!
//! # Algorithm
//!
//! 1. Keep a pool of remaining jobs in input order.
//! 2. For group size `i` from `min(|pool|, max_items)` down to 1, enumerate
//!    the `i`-combinations of the pool in lexicographic order. The first
//!    combination whose summed volume is `<= max_volume` becomes the batch.
//! 3. If no combination fits (every remaining job alone exceeds
//!    `max_volume`), the pool's first job is emitted alone as a fallback.
//! 4. Repeat until the pool is empty.
//!
//! # Complexity
//! Each step examines up to `sum(C(r, i))` for `i <= max_items`, where `r`
//! is the pool size. Exponential in `max_items`; callers planning large
//! job sets must bound `max_items` or the job count themselves.
//!
//! The heuristic is myopic: it does not guarantee the minimum batch count.

use tracing::{debug, trace, warn};

use super::Combinations;
use crate::error::PlanError;
use crate::models::{Batch, CapacityConstraint, Job};

/// Partitions jobs into capacity-feasible batches.
///
/// # Example
///
/// ```
/// use u_batch::models::{CapacityConstraint, Job};
/// use u_batch::planner::BatchPlanner;
///
/// let jobs = vec![
///     Job::new("M1", 100.0, 1, 120.0),
///     Job::new("M2", 150.0, 1, 90.0),
///     Job::new("M3", 120.0, 1, 150.0),
/// ];
/// let batches = BatchPlanner::new()
///     .partition(&jobs, &CapacityConstraint::new(300.0, 2))
///     .unwrap();
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[0].job_ids().collect::<Vec<_>>(), vec!["M1", "M2"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchPlanner;

impl BatchPlanner {
    /// Creates a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Partitions `jobs` into batches, consuming every job exactly once.
    ///
    /// Pool order decides tie-breaks, so callers sort before calling.
    /// Jobs are tracked by input slot, so duplicate ids are harmless.
    ///
    /// # Errors
    /// [`PlanError::InvalidConstraint`] if either bound is not positive.
    pub fn partition(
        &self,
        jobs: &[Job],
        constraint: &CapacityConstraint,
    ) -> Result<Vec<Batch>, PlanError> {
        constraint.validate()?;

        let mut consumed = vec![false; jobs.len()];
        let mut remaining = jobs.len();
        let mut batches = Vec::new();

        while remaining > 0 {
            let pool: Vec<usize> = (0..jobs.len()).filter(|&slot| !consumed[slot]).collect();

            let batch = match find_largest_feasible(jobs, &pool, constraint) {
                Some(slots) => {
                    for &slot in &slots {
                        consumed[slot] = true;
                    }
                    Batch::new(slots.iter().map(|&slot| jobs[slot].clone()).collect())
                }
                None => {
                    let slot = pool[0];
                    consumed[slot] = true;
                    warn!(
                        job_id = %jobs[slot].id,
                        volume = jobs[slot].volume,
                        max_volume = constraint.max_volume,
                        "job exceeds max_volume, scheduling alone"
                    );
                    Batch::fallback(jobs[slot].clone())
                }
            };

            remaining -= batch.len();
            debug!(
                batch = batches.len(),
                size = batch.len(),
                volume = batch.total_volume(),
                remaining,
                "batch planned"
            );
            batches.push(batch);
        }

        Ok(batches)
    }
}

/// Returns the input slots of the first feasible combination of the
/// largest feasible size, or `None` if no single job fits.
fn find_largest_feasible(
    jobs: &[Job],
    pool: &[usize],
    constraint: &CapacityConstraint,
) -> Option<Vec<usize>> {
    let max_size = pool.len().min(constraint.max_items);
    let mut examined: u64 = 0;

    for size in (1..=max_size).rev() {
        let mut combos = Combinations::new(pool.len(), size);
        while let Some(indices) = combos.next_indices() {
            examined += 1;
            let volume: f64 = indices.iter().map(|&i| jobs[pool[i]].volume).sum();
            if volume <= constraint.max_volume {
                trace!(size, examined, "feasible combination found");
                return Some(indices.iter().map(|&i| pool[i]).collect());
            }
        }
    }

    trace!(examined, pool = pool.len(), "no feasible combination");
    None
}

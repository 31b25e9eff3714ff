//! Priority-sorted batch schedule builder.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by priority (ascending by default).
//! 2. Partition the sorted jobs into batches with [`BatchPlanner`].
//! 3. Concatenate batch contents into the execution order and sum each
//!    batch's critical path into the total time.
//!
//! # Complexity
//! Dominated by the planner's combination search.

use tracing::info;

use crate::error::PlanError;
use crate::models::{CapacityConstraint, Job, Schedule};
use crate::planner::BatchPlanner;

/// Direction in which numeric priority values are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityOrder {
    /// Lower numeric value runs earlier.
    #[default]
    LowerFirst,
    /// Higher numeric value runs earlier.
    HigherFirst,
}

/// Builds a batch schedule from jobs and a capacity constraint.
///
/// # Example
///
/// ```
/// use u_batch::models::{CapacityConstraint, Job};
/// use u_batch::scheduler::ScheduleBuilder;
///
/// let jobs = vec![
///     Job::new("M1", 100.0, 2, 120.0),
///     Job::new("M2", 150.0, 1, 90.0),
///     Job::new("M3", 120.0, 3, 150.0),
/// ];
/// let schedule = ScheduleBuilder::new()
///     .build(&jobs, &CapacityConstraint::new(300.0, 2))
///     .unwrap();
/// assert_eq!(schedule.execution_order, vec!["M2", "M1", "M3"]);
/// assert_eq!(schedule.total_time, 270.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    planner: BatchPlanner,
    priority_order: PriorityOrder,
}

impl ScheduleBuilder {
    /// Creates a builder with the default (lower-first) priority order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority order.
    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = order;
        self
    }

    /// Sets the batch planner.
    pub fn with_planner(mut self, planner: BatchPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Returns the configured priority order.
    pub fn priority_order(&self) -> PriorityOrder {
        self.priority_order
    }

    /// Plans batches and aggregates them into a schedule.
    ///
    /// # Errors
    /// [`PlanError::InvalidConstraint`] if either bound is not positive.
    pub fn build(
        &self,
        jobs: &[Job],
        constraint: &CapacityConstraint,
    ) -> Result<Schedule, PlanError> {
        let sorted = self.sort_jobs(jobs);
        let batches = self.planner.partition(&sorted, constraint)?;
        let schedule = Schedule::from_batches(batches);

        info!(
            jobs = jobs.len(),
            batches = schedule.batch_count(),
            total_time = schedule.total_time,
            "schedule built"
        );
        Ok(schedule)
    }

    /// Returns the jobs stably sorted by the configured priority order.
    pub fn sort_jobs(&self, jobs: &[Job]) -> Vec<Job> {
        let mut sorted = jobs.to_vec();
        match self.priority_order {
            PriorityOrder::LowerFirst => sorted.sort_by_key(|j| j.priority),
            PriorityOrder::HigherFirst => sorted.sort_by_key(|j| std::cmp::Reverse(j.priority)),
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn printer() -> CapacityConstraint {
        CapacityConstraint::new(300.0, 2)
    }

    #[test]
    fn test_same_priority() {
        let jobs = vec![
            Job::new("M1", 100.0, 1, 120.0),
            Job::new("M2", 150.0, 1, 90.0),
            Job::new("M3", 120.0, 1, 150.0),
        ];
        let schedule = ScheduleBuilder::new().build(&jobs, &printer()).unwrap();

        assert_eq!(schedule.execution_order, vec!["M1", "M2", "M3"]);
        assert!((schedule.total_time - 270.0).abs() < 1e-10);
        assert_eq!(schedule.batch_count(), 2);
    }

    #[test]
    fn test_different_priorities() {
        let jobs = vec![
            Job::new("M1", 100.0, 2, 120.0),
            Job::new("M2", 150.0, 1, 90.0),
            Job::new("M3", 120.0, 3, 150.0),
        ];
        let schedule = ScheduleBuilder::new().build(&jobs, &printer()).unwrap();

        assert_eq!(schedule.execution_order, vec!["M2", "M1", "M3"]);
        assert!((schedule.total_time - 270.0).abs() < 1e-10);
        assert_eq!(schedule.batch_of("M1"), Some(0));
        assert_eq!(schedule.batch_of("M3"), Some(1));
    }

    #[test]
    fn test_exceeding_volume() {
        let jobs = vec![
            Job::new("M1", 250.0, 1, 180.0),
            Job::new("M2", 200.0, 1, 150.0),
            Job::new("M3", 180.0, 2, 120.0),
        ];
        let schedule = ScheduleBuilder::new().build(&jobs, &printer()).unwrap();

        assert_eq!(schedule.execution_order, vec!["M1", "M2", "M3"]);
        assert!((schedule.total_time - 450.0).abs() < 1e-10);
        assert_eq!(schedule.batch_count(), 3);
    }

    #[test]
    fn test_empty_input() {
        let schedule = ScheduleBuilder::new().build(&[], &printer()).unwrap();
        assert!(schedule.execution_order.is_empty());
        assert_eq!(schedule.total_time, 0.0);
    }

    #[test]
    fn test_oversized_single_job() {
        let jobs = vec![Job::new("M1", 500.0, 1, 60.0)];
        let schedule = ScheduleBuilder::new().build(&jobs, &printer()).unwrap();

        assert_eq!(schedule.execution_order, vec!["M1"]);
        assert!((schedule.total_time - 60.0).abs() < 1e-10);
        assert!(schedule.batches[0].is_fallback());
    }

    #[test]
    fn test_stable_sort() {
        let jobs = vec![
            Job::new("C", 1.0, 2, 1.0),
            Job::new("A", 1.0, 1, 1.0),
            Job::new("D", 1.0, 2, 1.0),
            Job::new("B", 1.0, 1, 1.0),
        ];
        let sorted = ScheduleBuilder::new().sort_jobs(&jobs);
        let ids: Vec<&str> = sorted.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_higher_first_order() {
        let jobs = vec![
            Job::new("M1", 100.0, 2, 120.0),
            Job::new("M2", 150.0, 1, 90.0),
            Job::new("M3", 120.0, 3, 150.0),
        ];
        let builder = ScheduleBuilder::new().with_priority_order(PriorityOrder::HigherFirst);
        assert_eq!(builder.priority_order(), PriorityOrder::HigherFirst);

        let schedule = builder.build(&jobs, &printer()).unwrap();
        // Sorted [M3, M1, M2]: (M3, M1) = 220 fits.
        assert_eq!(schedule.execution_order, vec!["M3", "M1", "M2"]);
        assert!((schedule.total_time - 240.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_constraint_propagates() {
        let jobs = vec![Job::new("M1", 1.0, 1, 1.0)];
        let result = ScheduleBuilder::new().build(&jobs, &CapacityConstraint::new(-1.0, 2));
        assert!(matches!(result, Err(PlanError::InvalidConstraint(_))));
    }

    proptest! {
        #[test]
        fn prop_total_time_bounds(
            specs in prop::collection::vec((0.0f64..400.0, 0i32..3, 0.0f64..200.0), 1..9),
            max_volume in 1.0f64..500.0,
            max_items in 1usize..5,
        ) {
            let jobs: Vec<Job> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (v, p, d))| Job::new(format!("J{i}"), v, p, d))
                .collect();
            let schedule = ScheduleBuilder::new()
                .build(&jobs, &CapacityConstraint::new(max_volume, max_items))
                .unwrap();

            let longest = jobs.iter().map(|j| j.duration).fold(0.0, f64::max);
            let sum: f64 = jobs.iter().map(|j| j.duration).sum();
            let by_batch: f64 = schedule.batches.iter().map(|b| b.critical_path()).sum();

            prop_assert!((schedule.total_time - by_batch).abs() < 1e-9);
            prop_assert!(schedule.total_time + 1e-9 >= longest);
            prop_assert!(schedule.total_time <= sum + 1e-9);
            prop_assert_eq!(schedule.execution_order.len(), jobs.len());
        }
    }
}

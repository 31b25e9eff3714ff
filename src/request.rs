//! Request/response boundary.
//!
//! Decodes raw job and constraint records, validates them, plans the
//! schedule, and renders the result as an output record.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "jobs": [{"id": "M1", "volume": 100, "priority": 1, "print_time": 120}],
//!   "constraints": {"max_volume": 300, "max_items": 2}
//! }
//! ```
//!
//! responds with `{"execution_order": ["M1"], "total_time": 120.0}`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;
use crate::models::{CapacityConstraint, Job, Schedule};
use crate::scheduler::ScheduleBuilder;
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Raw job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job identifier.
    pub id: String,
    /// Volume occupied on the shared resource.
    pub volume: f64,
    /// Scheduling priority.
    pub priority: i32,
    /// Processing time.
    #[serde(alias = "print_time")]
    pub duration: f64,
}

/// Raw constraint record.
///
/// `max_items` is signed so negative inputs surface as validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRecord {
    /// Maximum summed volume per batch.
    pub max_volume: f64,
    /// Maximum job count per batch.
    pub max_items: i64,
}

/// A planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Jobs to plan.
    pub jobs: Vec<JobRecord>,
    /// Capacity bounds of the shared resource.
    #[serde(alias = "constraint")]
    pub constraints: ConstraintRecord,
}

/// A planning response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Job ids in execution order.
    #[serde(alias = "print_order")]
    pub execution_order: Vec<String>,
    /// Total elapsed time.
    pub total_time: f64,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Job::new(record.id, record.volume, record.priority, record.duration)
    }
}

impl TryFrom<ConstraintRecord> for CapacityConstraint {
    type Error = PlanError;

    fn try_from(record: ConstraintRecord) -> Result<Self, Self::Error> {
        let max_items = usize::try_from(record.max_items).map_err(|_| {
            PlanError::Validation(vec![ValidationError::new(
                ValidationErrorKind::InvalidConstraint,
                format!("max_items must be positive, got {}", record.max_items),
            )])
        })?;
        Ok(CapacityConstraint::new(record.max_volume, max_items))
    }
}

impl From<Schedule> for PlanResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            execution_order: schedule.execution_order,
            total_time: schedule.total_time,
        }
    }
}

impl PlanRequest {
    /// Creates a request.
    pub fn new(jobs: Vec<JobRecord>, constraints: ConstraintRecord) -> Self {
        Self { jobs, constraints }
    }

    /// Converts records into typed planning inputs, validating them.
    ///
    /// # Errors
    /// [`PlanError::Validation`] with every detected problem.
    pub fn into_inputs(self) -> Result<(Vec<Job>, CapacityConstraint), PlanError> {
        let constraint = CapacityConstraint::try_from(self.constraints)?;
        let jobs: Vec<Job> = self.jobs.into_iter().map(Job::from).collect();
        validate_input(&jobs, &constraint).map_err(PlanError::Validation)?;
        Ok((jobs, constraint))
    }
}

/// Validates and plans a request with the default builder.
pub fn optimize(request: &PlanRequest) -> Result<PlanResponse, PlanError> {
    optimize_with(&ScheduleBuilder::new(), request)
}

/// Validates and plans a request with a configured builder.
pub fn optimize_with(
    builder: &ScheduleBuilder,
    request: &PlanRequest,
) -> Result<PlanResponse, PlanError> {
    let (jobs, constraint) = request.clone().into_inputs()?;
    debug!(jobs = jobs.len(), ?constraint, "planning request");
    let schedule = builder.build(&jobs, &constraint)?;
    Ok(schedule.into())
}

/// JSON in, JSON out.
///
/// # Errors
/// [`PlanError::Malformed`] for undecodable input, otherwise as [`optimize`].
pub fn optimize_json(input: &str) -> Result<String, PlanError> {
    let request: PlanRequest = serde_json::from_str(input)?;
    let response = optimize(&request)?;
    Ok(serde_json::to_string(&response)?)
}

//! Input validation for batch planning problems.
//!
//! Checks structural integrity of jobs and the capacity constraint before
//! planning. Detects:
//! - Non-positive or non-finite capacity bounds
//! - Duplicate or empty job IDs
//! - Negative or non-finite volumes and durations
//!
//! The planner itself only rejects invalid constraints; this module is the
//! stricter check applied at the request boundary.

use crate::models::{CapacityConstraint, Job};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Capacity bound is zero, negative, or not finite.
    InvalidConstraint,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job has an empty ID.
    EmptyId,
    /// A job has a negative volume.
    NegativeVolume,
    /// A job has a negative duration.
    NegativeDuration,
    /// A volume or duration is NaN or infinite.
    NonFiniteValue,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the input data for a batch planning problem.
///
/// Checks:
/// 1. Capacity bounds are positive and finite
/// 2. No empty job IDs
/// 3. No duplicate job IDs
/// 4. Volumes and durations are finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], constraint: &CapacityConstraint) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(err) = constraint.validate() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraint,
            err.to_string(),
        ));
    }

    let mut job_ids = HashSet::new();
    for (slot, job) in jobs.iter().enumerate() {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Job at position {slot} has an empty ID"),
            ));
        } else if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        check_quantity(
            &mut errors,
            job,
            "volume",
            job.volume,
            ValidationErrorKind::NegativeVolume,
        );
        check_quantity(
            &mut errors,
            job,
            "duration",
            job.duration,
            ValidationErrorKind::NegativeDuration,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_quantity(
    errors: &mut Vec<ValidationError>,
    job: &Job,
    field: &str,
    value: f64,
    negative_kind: ValidationErrorKind,
) {
    if !value.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            format!("Job '{}' has non-finite {field}: {value}", job.id),
        ));
    } else if value < 0.0 {
        errors.push(ValidationError::new(
            negative_kind,
            format!("Job '{}' has negative {field}: {value}", job.id),
        ));
    }
}

//! Error types for batch planning.
//!
//! The planning core is total for valid constraints; the only errors
//! it raises are contract violations detected at its boundary.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by planning and request handling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Capacity bounds are not positive (or not finite).
    #[error("invalid capacity constraint: {0}")]
    InvalidConstraint(String),

    /// Input records failed boundary validation.
    #[error("input validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// Raw input could not be decoded.
    #[error("malformed request: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Malformed(err.to_string())
    }
}

/// Convenience alias for planning results.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        let err = PlanError::InvalidConstraint("max_items must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid capacity constraint: max_items must be positive"
        );

        let err = PlanError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "a"),
            ValidationError::new(ValidationErrorKind::EmptyId, "b"),
        ]);
        assert_eq!(err.to_string(), "input validation failed with 2 error(s)");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PlanError = json_err.into();
        assert!(matches!(err, PlanError::Malformed(_)));
    }
}

//! Capacity constraint model.
//!
//! The shared resource bounds every batch twice: by the summed volume of
//! its jobs and by the number of jobs it holds.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Capacity bounds applied to every batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityConstraint {
    /// Maximum summed volume per batch.
    pub max_volume: f64,
    /// Maximum job count per batch.
    pub max_items: usize,
}

impl CapacityConstraint {
    /// Creates a new constraint. Use [`validate`](Self::validate) before planning.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Checks that both bounds are positive.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.max_volume.is_finite() || self.max_volume <= 0.0 {
            return Err(PlanError::InvalidConstraint(format!(
                "max_volume must be positive and finite, got {}",
                self.max_volume
            )));
        }
        if self.max_items == 0 {
            return Err(PlanError::InvalidConstraint(
                "max_items must be positive, got 0".into(),
            ));
        }
        Ok(())
    }

    /// Whether a group of `count` jobs with summed `volume` fits.
    #[inline]
    pub fn admits(&self, volume: f64, count: usize) -> bool {
        volume <= self.max_volume && count <= self.max_items
    }
}

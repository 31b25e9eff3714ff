//! Batch planning domain models.
//!
//! Immutable value types describing a planning problem and its result.
//!
//! # Domain Mappings
//!
//! | u-batch | 3D Printing | Heat Treatment | Laundry |
//! |---------|-------------|----------------|---------|
//! | Job | Model | Part lot | Load |
//! | CapacityConstraint | Build plate | Furnace | Machine drum |
//! | Batch | Print run | Furnace charge | Wash cycle |
//! | Schedule | Print queue | Shift plan | Daily plan |

mod batch;
mod constraint;
mod job;
mod schedule;

pub use batch::Batch;
pub use constraint::CapacityConstraint;
pub use job::Job;
pub use schedule::Schedule;

//! Capacity-constrained batch planning for the U-Engine ecosystem.
//!
//! Groups discrete jobs into batches that run simultaneously on a shared
//! resource with a finite volume and slot count, then derives a linear
//! execution order and the total elapsed time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `CapacityConstraint`, `Batch`, `Schedule`
//! - **`planner`**: Greedy largest-combination batch construction
//! - **`scheduler`**: Priority sorting, schedule aggregation, and KPIs
//! - **`validation`**: Input integrity checks (bounds, duplicate IDs, values)
//! - **`request`**: Raw record decoding and JSON request handling
//!
//! # Example
//!
//! ```
//! use u_batch::models::{CapacityConstraint, Job};
//! use u_batch::scheduler::ScheduleBuilder;
//!
//! let jobs = vec![
//!     Job::new("M1", 250.0, 1, 180.0),
//!     Job::new("M2", 200.0, 1, 150.0),
//!     Job::new("M3", 180.0, 2, 120.0),
//! ];
//! let schedule = ScheduleBuilder::new()
//!     .build(&jobs, &CapacityConstraint::new(300.0, 2))
//!     .unwrap();
//! assert_eq!(schedule.execution_order, vec!["M1", "M2", "M3"]);
//! assert_eq!(schedule.total_time, 450.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 8 (Batch Processing)
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"

pub mod error;
pub mod models;
pub mod planner;
pub mod request;
pub mod scheduler;
pub mod validation;

pub use error::PlanError;

//! Schedule building and KPI evaluation.
//!
//! Sorts jobs by priority, plans batches, and flattens them into a linear
//! execution order with a total elapsed time.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` runs batches sequentially; jobs within a batch run in
//! parallel, so each batch contributes its longest duration to the total.
//!
//! # KPI
//!
//! `BatchKpi` computes batching metrics: batch count, fallback count,
//! volume utilization, slot fill, and parallel speedup.

mod builder;
mod kpi;

pub use builder::{PriorityOrder, ScheduleBuilder};
pub use kpi::BatchKpi;

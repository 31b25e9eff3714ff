//! Batch construction.
//!
//! Groups an ordered job sequence into batches that fit the shared
//! resource's capacity, preferring the largest feasible group at each step.
//!
//! # Algorithm
//!
//! `BatchPlanner` is a greedy exhaustive-search heuristic: at every step it
//! takes the first feasible combination of the largest feasible size, in
//! lexicographic order over the remaining pool. It is not an optimal
//! bin-packer; see [`BatchPlanner::partition`] for the exact contract.
//!
//! # References
//!
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing: A Survey"
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, 7.2.1.3 (Generating Combinations)

mod batch;
mod combinations;

pub use batch::BatchPlanner;
pub use combinations::Combinations;

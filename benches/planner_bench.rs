//! Criterion benchmarks for batch planning.
//!
//! Uses random job sets to measure the combination search cost as the
//! slot count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_batch::models::{CapacityConstraint, Job};
use u_batch::planner::BatchPlanner;
use u_batch::scheduler::ScheduleBuilder;

fn random_jobs(count: usize, seed: u64) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Job::new(
                format!("J{i}"),
                rng.random_range(10.0..200.0),
                rng.random_range(1..4),
                rng.random_range(30.0..240.0),
            )
        })
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let jobs = random_jobs(24, 42);
    let planner = BatchPlanner::new();

    for max_items in [1usize, 2, 3, 4] {
        let constraint = CapacityConstraint::new(300.0, max_items);
        group.bench_with_input(
            BenchmarkId::from_parameter(max_items),
            &constraint,
            |b, constraint| b.iter(|| planner.partition(black_box(&jobs), constraint)),
        );
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let constraint = CapacityConstraint::new(300.0, 3);
    let builder = ScheduleBuilder::new();

    for count in [8usize, 16, 32] {
        let jobs = random_jobs(count, 7);
        group.bench_with_input(BenchmarkId::from_parameter(count), &jobs, |b, jobs| {
            b.iter(|| builder.build(black_box(jobs), &constraint))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition, bench_build);
criterion_main!(benches);

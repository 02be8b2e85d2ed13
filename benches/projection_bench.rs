// ABOUTME: Criterion benchmarks for the energy balance projection engine
// ABOUTME: Measures single projections, trajectory sampling and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the projection engine.
//!
//! Measures the full single-profile pipeline, trajectory sampling for
//! different point counts, and sequential versus rayon batch projection.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use energy_balance_planner::config::ProjectionConfig;
use energy_balance_planner::intelligence::trajectory::generate_weight_progression;
use energy_balance_planner::models::{ActivityLevel, Goal, Profile, Sex};
use energy_balance_planner::{compute, ProjectionEngine};

/// Generate a deterministic spread of profiles
fn generate_profiles(count: usize) -> Vec<Profile> {
    (0..count)
        .map(|index| {
            let sex = if index % 2 == 0 { Sex::Male } else { Sex::Female };
            let activity_level = ActivityLevel::ALL[index % ActivityLevel::ALL.len()];
            let goal = match index % 3 {
                0 => Goal::Lose,
                1 => Goal::Maintain,
                _ => Goal::Gain,
            };
            Profile::new(
                50.0 + (index % 60) as f64,
                150.0 + (index % 45) as f64,
                18.0 + (index % 60) as f64,
                sex,
                activity_level,
                goal,
            )
            .with_target_weight_change(1.0 + (index % 10) as f64)
        })
        .collect()
}

/// Benchmark one projection for each goal
fn bench_single_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_projection");

    for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
        let profile = Profile::new(
            70.0,
            175.0,
            25.0,
            Sex::Male,
            ActivityLevel::Moderate,
            goal,
        );
        group.bench_with_input(
            BenchmarkId::new("compute", goal.as_str()),
            &profile,
            |b, profile| b.iter(|| compute(black_box(profile))),
        );
    }

    group.finish();
}

/// Benchmark trajectory sampling for growing point counts
fn bench_trajectory(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory");

    for point_count in [50_u32, 500, 5_000] {
        group.throughput(Throughput::Elements(u64::from(point_count)));
        group.bench_with_input(
            BenchmarkId::new("generate_weight_progression", point_count),
            &point_count,
            |b, &point_count| {
                b.iter(|| {
                    generate_weight_progression(
                        black_box(70.0),
                        black_box(54.3),
                        black_box(36_500),
                        point_count,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark sequential versus parallel batch projection
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let engine = ProjectionEngine::with_config(ProjectionConfig::default());

    for count in [100_usize, 1_000, 10_000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &profiles,
            |b, profiles| {
                b.iter(|| profiles.iter().map(compute).collect::<Vec<_>>());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &profiles,
            |b, profiles| b.iter(|| engine.compute_batch(black_box(profiles))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_projection, bench_trajectory, bench_batch);
criterion_main!(benches);

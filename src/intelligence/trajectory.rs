// ABOUTME: Trajectory sampler producing a bounded weight curve for display
// ABOUTME: Horizon selection and evenly stepped samples ending exactly at the horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trajectory Sampler
//!
//! Turns the closed-form weight curve into at most roughly `2 x point_count`
//! `(day, weight)` samples. The loop is bounded by the step policy, so it
//! terminates for every horizon.

use crate::config::TrajectoryConfig;
use crate::models::{GoalEta, WeightSample};

use super::weight_dynamics::calculate_weight_at_time;

/// Select the projection horizon in whole days
///
/// `ceil(days_to_goal)` when reachable, otherwise the fallback horizon so the
/// chart always has bounded content.
#[must_use]
pub fn projection_horizon_days(days_to_goal: GoalEta, config: &TrajectoryConfig) -> u32 {
    match days_to_goal {
        // Saturating float-to-int cast; reachable days are finite and non-negative
        GoalEta::Reachable { days } => days.ceil() as u32,
        GoalEta::Unreachable => config.fallback_horizon_days,
    }
}

/// Generate the weight progression from day 0 to `total_days`
///
/// Step is `max(1, floor(total_days / point_count))`. Samples are strictly
/// increasing in day, start at `(0, initial_weight)` and the last sample is
/// always at `total_days`, with a corrective sample appended when the horizon
/// is not a multiple of the step.
#[must_use]
pub fn generate_weight_progression(
    initial_weight: f64,
    equilibrium_weight: f64,
    total_days: u32,
    point_count: u32,
) -> Vec<WeightSample> {
    let interval = (total_days / point_count.max(1)).max(1);
    let sample = |day: u32| WeightSample {
        day,
        weight: calculate_weight_at_time(initial_weight, equilibrium_weight, f64::from(day)),
    };

    let mut progression: Vec<WeightSample> = (0..=total_days)
        .step_by(interval as usize)
        .map(&sample)
        .collect();

    // Ensure we include the final day
    if progression.last().map(|last| last.day) != Some(total_days) {
        progression.push(sample(total_days));
    }

    progression
}

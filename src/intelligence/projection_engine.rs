// ABOUTME: Projection engine orchestrating the caloric plan and weight trajectory
// ABOUTME: Profile in, fully populated ProjectionResult out; batch mode runs on rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Projection Engine
//!
//! Pipeline for one profile:
//!
//! 1. BMR (Mifflin-St Jeor)
//! 2. TDEE = BMR x activity multiplier
//! 3. recommended intake = TDEE -/+ 500 kcal by goal
//! 4. equilibrium weight = intake / 38.56
//! 5. target weight from the goal and change magnitude
//! 6. analytic days to goal
//! 7. sampled trajectory over the horizon
//! 8. nutrition recommendations
//!
//! Every step is a pure function of its inputs, so a projection is
//! deterministic and safe to run concurrently.

use std::time::Instant;

use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::config::{ProjectionConfig, TrajectoryConfig};
use crate::errors::AppResult;
use crate::logging::ProjectionLogger;
use crate::models::{Profile, ProjectionResult};

use super::energy_expenditure::{calculate_bmr, calculate_recommended_calories, calculate_tdee};
use super::nutrition_recommendations::generate_nutrition_recommendations;
use super::trajectory::{generate_weight_progression, projection_horizon_days};
use super::weight_dynamics::{
    calculate_days_to_goal, calculate_equilibrium_weight, calculate_target_weight,
};

/// Energy balance projection engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create an engine with the default sampling configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub const fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Create an engine from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::with_config(*ProjectionConfig::global())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project the caloric plan and weight trajectory for one profile
    #[must_use]
    pub fn compute(&self, profile: &Profile) -> ProjectionResult {
        let result = project(profile, &self.config.trajectory);
        ProjectionLogger::log_projection(profile, &result);
        result
    }

    /// Project many profiles in parallel, preserving input order
    #[must_use]
    pub fn compute_batch(&self, profiles: &[Profile]) -> Vec<ProjectionResult> {
        let started = Instant::now();
        let trajectory = self.config.trajectory;

        let results: Vec<ProjectionResult> = profiles
            .par_iter()
            .map(|profile| project(profile, &trajectory))
            .collect();

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        ProjectionLogger::log_batch(results.len(), duration_ms);
        results
    }

    /// Parse a JSON form payload and project it
    ///
    /// # Errors
    ///
    /// Returns an `InvalidProfile`-family error when the payload cannot be
    /// turned into a [`Profile`]. No partial result is produced.
    pub fn compute_json(&self, payload: &Value) -> AppResult<ProjectionResult> {
        let profile = Profile::from_json(payload).inspect_err(|error| {
            ProjectionLogger::log_rejected_profile(error.context.field.as_deref(), &error.message);
        })?;
        Ok(self.compute(&profile))
    }
}

/// Project one profile with the default configuration
#[must_use]
pub fn compute(profile: &Profile) -> ProjectionResult {
    ProjectionEngine::new().compute(profile)
}

/// Project one profile with a supplied configuration
#[must_use]
pub fn compute_with_config(profile: &Profile, config: &ProjectionConfig) -> ProjectionResult {
    ProjectionEngine::with_config(*config).compute(profile)
}

/// Project many profiles in parallel with a supplied configuration
#[must_use]
pub fn compute_batch(profiles: &[Profile], config: &ProjectionConfig) -> Vec<ProjectionResult> {
    ProjectionEngine::with_config(*config).compute_batch(profiles)
}

/// Parse a JSON form payload and project it with the default configuration
///
/// # Errors
///
/// Returns an `InvalidProfile`-family error naming the offending field
pub fn compute_json(payload: &Value) -> AppResult<ProjectionResult> {
    ProjectionEngine::new().compute_json(payload)
}

fn project(profile: &Profile, trajectory: &TrajectoryConfig) -> ProjectionResult {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let recommended_calories = calculate_recommended_calories(tdee, profile.goal);
    debug!(bmr, tdee, recommended_calories, goal = %profile.goal, "Caloric plan computed");

    let equilibrium_weight = calculate_equilibrium_weight(recommended_calories);
    let target_weight = calculate_target_weight(
        profile.weight_kg,
        profile.goal,
        profile.target_weight_change_or_default(),
    );
    let days_to_goal = calculate_days_to_goal(profile.weight_kg, target_weight, equilibrium_weight);
    debug!(
        equilibrium_weight,
        target_weight,
        days_to_goal = ?days_to_goal.days(),
        "Weight dynamics solved"
    );

    let horizon_days = projection_horizon_days(days_to_goal, trajectory);
    let weight_over_time = generate_weight_progression(
        profile.weight_kg,
        equilibrium_weight,
        horizon_days,
        trajectory.point_count,
    );
    debug!(
        horizon_days,
        samples = weight_over_time.len(),
        "Trajectory sampled"
    );

    ProjectionResult {
        bmr,
        tdee,
        recommended_calories,
        equilibrium_weight,
        current_weight: profile.weight_kg,
        target_weight,
        days_to_goal,
        horizon_days,
        weight_over_time,
        nutrition_recommendations: generate_nutrition_recommendations(
            profile.goal,
            recommended_calories,
            tdee,
        ),
    }
}

// ABOUTME: Projection engine modules for energy balance planning
// ABOUTME: Expenditure, weight dynamics, trajectory sampling, recommendations and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic energy balance projection. Given a [`Profile`](crate::models::Profile),
//! the engine estimates daily energy needs, recommends an intake for the goal,
//! and projects body weight over time under that intake.

/// BMR, TDEE and goal-adjusted intake
pub mod energy_expenditure;
/// Advisory nutrition guidance and macro split
pub mod nutrition_recommendations;
/// Input range validation for collected profiles
pub mod profile_validator;
/// Pipeline orchestration and batch projection
pub mod projection_engine;
/// Horizon selection and trajectory sampling
pub mod trajectory;
/// Equilibrium weight and analytic time-to-goal
pub mod weight_dynamics;

pub use energy_expenditure::{
    activity_multiplier, calculate_bmr, calculate_recommended_calories, calculate_tdee,
    goal_calorie_offset,
};
pub use nutrition_recommendations::{generate_nutrition_recommendations, MacroTargets};
pub use profile_validator::{FieldViolation, ProfileValidator};
pub use projection_engine::{
    compute, compute_batch, compute_json, compute_with_config, ProjectionEngine,
};
pub use trajectory::{generate_weight_progression, projection_horizon_days};
pub use weight_dynamics::{
    calculate_days_to_goal, calculate_equilibrium_weight, calculate_target_weight,
    calculate_weight_at_time,
};

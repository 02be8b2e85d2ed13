// ABOUTME: Energy expenditure calculations for the caloric plan
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE and goal-adjusted intake
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Energy Expenditure Module
//!
//! First three stages of the projection pipeline: resting energy, total daily
//! expenditure, and the recommended intake for a goal.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use balance_core::constants::{activity_multipliers, energy_balance, mifflin_st_jeor};

use crate::models::{ActivityLevel, Goal, Sex};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
///
/// Total over all real inputs. No range checks and no clamping: nonsensical
/// inputs give non-physical values, and rejecting them is the input layer's job.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
#[allow(clippy::suboptimal_flops)] // keep the published evaluation order
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = mifflin_st_jeor::WEIGHT_COEF * weight_kg + mifflin_st_jeor::HEIGHT_COEF * height_cm
        - mifflin_st_jeor::AGE_COEF * age_years;

    match sex {
        Sex::Male => base + mifflin_st_jeor::MALE_CONSTANT,
        Sex::Female => base + mifflin_st_jeor::FEMALE_CONSTANT,
    }
}

/// Activity multiplier for a declared activity level
///
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub const fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => activity_multipliers::SEDENTARY,
        ActivityLevel::Light => activity_multipliers::LIGHT,
        ActivityLevel::Moderate => activity_multipliers::MODERATE,
        ActivityLevel::Active => activity_multipliers::ACTIVE,
        ActivityLevel::VeryActive => activity_multipliers::VERY_ACTIVE,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Signed daily intake shift for a goal (kcal/day)
///
/// A flat 500 kcal regardless of body size; it is a heuristic, not derived
/// from the weight dynamics model.
#[must_use]
pub const fn goal_calorie_offset(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => -energy_balance::GOAL_CALORIE_OFFSET,
        Goal::Maintain => 0.0,
        Goal::Gain => energy_balance::GOAL_CALORIE_OFFSET,
    }
}

/// Calculate recommended daily caloric intake for a goal
///
/// - Lose: TDEE - 500
/// - Maintain: TDEE
/// - Gain: TDEE + 500
#[must_use]
pub fn calculate_recommended_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal_calorie_offset(goal)
}

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological constants, engine defaults and input ranges for the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. The physiological values are published literals and are not
//! configurable.

/// Mifflin-St Jeor resting energy coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// kcal per kg of body mass
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of stature
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = 5.0;
    /// Male offset
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female offset
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity multipliers applied to BMR
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod activity_multipliers {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Hard daily exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Energy balance model constants
pub mod energy_balance {
    /// Energy stored in one kg of body mass (kcal/kg)
    pub const CALORIES_PER_KG: f64 = 7700.0;

    /// Maintenance cost per kg of body mass (kcal/kg/day)
    pub const METABOLIC_RATE_COEFFICIENT: f64 = 38.56;

    /// Decay rate of the weight ODE (1/day), ≈ 0.0050078
    pub const DECAY_CONSTANT: f64 = METABOLIC_RATE_COEFFICIENT / CALORIES_PER_KG;

    /// Flat daily intake shift for lose/gain goals (kcal/day), ~0.5 kg/week heuristic
    pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

    /// Weight change used when the profile does not state one (kg)
    pub const DEFAULT_TARGET_WEIGHT_CHANGE_KG: f64 = 5.0;

    /// Distance from equilibrium below which no progress is possible (kg)
    pub const EQUILIBRIUM_TOLERANCE_KG: f64 = 0.001;

    /// Slack on the goal ratio above one still read as rounding noise
    pub const GOAL_RATIO_TOLERANCE: f64 = 1e-9;
}

/// Macronutrient split used for the daily distribution tip
pub mod macronutrients {
    /// Share of calories from protein
    pub const PROTEIN_SHARE: f64 = 0.30;
    /// Share of calories from carbohydrate
    pub const CARBS_SHARE: f64 = 0.50;
    /// Share of calories from fat
    pub const FAT_SHARE: f64 = 0.20;
    /// Energy density of protein (kcal/g)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Energy density of carbohydrate (kcal/g)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Energy density of fat (kcal/g)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Trajectory sampling defaults
pub mod trajectory {
    /// Target number of samples in a displayed curve
    pub const DEFAULT_POINT_COUNT: u32 = 50;
    /// Horizon used when the goal is unreachable (days)
    pub const FALLBACK_HORIZON_DAYS: u32 = 365;
}

/// Input ranges enforced by the input-collection layer
pub mod profile_ranges {
    /// Minimum accepted age (years)
    pub const MIN_AGE: f64 = 15.0;
    /// Maximum accepted age (years)
    pub const MAX_AGE: f64 = 100.0;
    /// Minimum accepted weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const ENERGY_BALANCE_PLANNER: &str = "energy-balance-planner";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Override for the trajectory sample count
    pub const TRAJECTORY_POINTS: &str = "PROJECTION_TRAJECTORY_POINTS";
    /// Override for the unreachable-goal horizon
    pub const FALLBACK_HORIZON_DAYS: &str = "PROJECTION_FALLBACK_HORIZON_DAYS";
}

// ABOUTME: Main library entry point for the energy-balance planner
// ABOUTME: Caloric targets and analytic body-weight trajectories from a personal profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Energy Balance Planner
//!
//! A deterministic projection engine. Given body mass, stature, age, sex,
//! activity level and a weight goal, it estimates daily energy needs,
//! recommends an intake for the goal, and projects body weight over time under
//! that intake with a first-order energy balance model.
//!
//! ## Architecture
//!
//! - **Models**: profile input and projection result types
//! - **Intelligence**: BMR/TDEE, weight dynamics, trajectory sampling, recommendations
//! - **Formatters**: JSON output and a human summary
//! - **Config**: trajectory sampling settings with environment overrides
//! - **Logging**: `tracing` subscriber setup for binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use energy_balance_planner::models::{ActivityLevel, Goal, Profile, Sex};
//!
//! let profile = Profile::new(70.0, 175.0, 25.0, Sex::Male, ActivityLevel::Moderate, Goal::Lose)
//!     .with_target_weight_change(5.0);
//! let result = energy_balance_planner::compute(&profile);
//!
//! match result.days_to_goal.days() {
//!     Some(days) => println!("Goal reached in {days:.0} days"),
//!     None => println!("Weight stabilizes near {:.1} kg", result.equilibrium_weight),
//! }
//! ```

/// Projection configuration and environment overrides
pub mod config;

/// Unified error handling with standard error codes
pub mod errors;

/// Output formats and the projection summary
pub mod formatters;

/// Energy balance projection engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile and projection data models
pub mod models;

/// Physiological constants shared with `balance-core`
pub use balance_core::constants;

pub use intelligence::{compute, compute_batch, compute_json, compute_with_config, ProjectionEngine};

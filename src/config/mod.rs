// ABOUTME: Configuration management module for the projection engine
// ABOUTME: Trajectory sampling settings loaded from defaults and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Only display-oriented sampling parameters are configurable. The
//! physiological constants (Mifflin-St Jeor coefficients, activity multipliers,
//! the 500 kcal goal offset, 7700 kcal/kg and 38.56 kcal/kg/day) are literals in
//! `balance_core::constants` and cannot be overridden.

use tracing::{debug, info};

/// Configuration error types
pub mod error;
/// Projection engine configuration
pub mod projection;

pub use error::ConfigError;
pub use projection::{ProjectionConfig, TrajectoryConfig};

/// Initialize the global projection configuration
///
/// # Errors
///
/// Returns an error if environment overrides are malformed or fail validation
pub fn init_configs() -> Result<&'static ProjectionConfig, ConfigError> {
    let config = ProjectionConfig::init_global()?;

    debug!(
        point_count = config.trajectory.point_count,
        fallback_horizon_days = config.trajectory.fallback_horizon_days,
        "Projection config initialized"
    );

    info!("All configurations initialized successfully");
    Ok(config)
}

// ABOUTME: Projection engine configuration for trajectory sampling
// ABOUTME: Defaults, environment overrides, validation and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Projection Configuration
//!
//! Controls how a projected weight curve is sampled for display. Defaults
//! give about 50 samples per curve and a 365-day horizon when the goal cannot
//! be reached.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use balance_core::constants::{env_config, trajectory};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Global configuration singleton
static PROJECTION_CONFIG: OnceLock<ProjectionConfig> = OnceLock::new();

/// Upper bound for the sample count; curves are for display
const MAX_POINT_COUNT: u32 = 10_000;

/// Upper bound for the fallback horizon (100 years)
const MAX_FALLBACK_HORIZON_DAYS: u32 = 36_500;

/// Trajectory sampling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Target number of samples; the step is `max(1, horizon / point_count)`
    pub point_count: u32,
    /// Horizon used when the goal is unreachable (days)
    pub fallback_horizon_days: u32,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            point_count: trajectory::DEFAULT_POINT_COUNT,
            fallback_horizon_days: trajectory::FALLBACK_HORIZON_DAYS,
        }
    }
}

/// Main projection configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Trajectory sampling settings
    pub trajectory: TrajectoryConfig,
}

impl ProjectionConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults when the environment holds invalid overrides.
    pub fn global() -> &'static Self {
        PROJECTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load projection config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Initialize the global instance, surfacing load errors instead of
    /// falling back to defaults
    ///
    /// Returns the existing instance if it was already initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if environment overrides are malformed or invalid
    pub fn init_global() -> Result<&'static Self, ConfigError> {
        if let Some(config) = PROJECTION_CONFIG.get() {
            return Ok(config);
        }
        let loaded = Self::load()?;
        Ok(PROJECTION_CONFIG.get_or_init(|| loaded))
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a setting is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let trajectory = &self.trajectory;

        if !(1..=MAX_POINT_COUNT).contains(&trajectory.point_count) {
            return Err(ConfigError::ValueOutOfRange(
                "trajectory point_count must be between 1 and 10000",
            ));
        }

        if !(1..=MAX_FALLBACK_HORIZON_DAYS).contains(&trajectory.fallback_horizon_days) {
            return Err(ConfigError::ValueOutOfRange(
                "trajectory fallback_horizon_days must be between 1 and 36500",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::TRAJECTORY_POINTS,
            &mut self.trajectory.point_count,
        )?;
        Self::apply_env_var(
            env_config::FALLBACK_HORIZON_DAYS,
            &mut self.trajectory.fallback_horizon_days,
        )?;
        Ok(self)
    }
}

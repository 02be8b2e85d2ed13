// ABOUTME: Tests for projection configuration loading from the environment
// ABOUTME: Overrides, parse failures and range validation of trajectory settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use energy_balance_planner::{
    config::{ConfigError, ProjectionConfig},
    constants::env_config::{FALLBACK_HORIZON_DAYS, TRAJECTORY_POINTS},
    errors::{AppError, ErrorCode},
};
use serial_test::serial;

mod common;

fn clear_overrides() {
    env::remove_var(TRAJECTORY_POINTS);
    env::remove_var(FALLBACK_HORIZON_DAYS);
}

#[test]
#[serial]
fn test_load_without_overrides_uses_defaults() {
    clear_overrides();

    let config = ProjectionConfig::load().unwrap();

    assert_eq!(config, ProjectionConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    clear_overrides();
    env::set_var(TRAJECTORY_POINTS, "100");
    env::set_var(FALLBACK_HORIZON_DAYS, " 730 ");

    let config = ProjectionConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.trajectory.point_count, 100);
    assert_eq!(config.trajectory.fallback_horizon_days, 730);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var(TRAJECTORY_POINTS, "fifty");

    let result = ProjectionConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_zero_point_count_override_is_out_of_range() {
    clear_overrides();
    env::set_var(TRAJECTORY_POINTS, "0");

    let result = ProjectionConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_negative_horizon_override_fails_to_parse() {
    clear_overrides();
    env::set_var(FALLBACK_HORIZON_DAYS, "-1");

    let result = ProjectionConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error = AppError::from(ConfigError::ValueOutOfRange("point_count"));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("point_count"));
}

#[test]
fn test_config_round_trips_through_serde() {
    let config = ProjectionConfig::default();
    let json = serde_json::to_value(config).unwrap();

    assert_eq!(json["trajectory"]["point_count"], 50);
    assert_eq!(json["trajectory"]["fallback_horizon_days"], 365);
    assert_eq!(
        serde_json::from_value::<ProjectionConfig>(json).unwrap(),
        config
    );
}

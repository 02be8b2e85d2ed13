// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and reference profile builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `energy_balance_planner`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::Once;

use energy_balance_planner::models::{ActivityLevel, Goal, Profile, Sex};
use serde_json::{json, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 25-year-old moderately active man
pub fn reference_profile(height_cm: f64, goal: Goal) -> Profile {
    Profile::new(
        70.0,
        height_cm,
        25.0,
        Sex::Male,
        ActivityLevel::Moderate,
        goal,
    )
}

/// Reference profile with an explicit 5 kg change
pub fn reference_profile_with_change(height_cm: f64, goal: Goal) -> Profile {
    reference_profile(height_cm, goal).with_target_weight_change(5.0)
}

/// JSON form payload for the reference profile
pub fn reference_payload(goal: &str) -> Value {
    json!({
        "name": "Test User",
        "email": "test@example.com",
        "weight": 70,
        "height": 175,
        "age": 25,
        "sex": "male",
        "activityLevel": "moderate",
        "goal": goal,
        "targetWeightChange": 5
    })
}

/// Profiles covering every sex, activity level and goal
pub fn profile_grid() -> Vec<Profile> {
    let mut profiles = Vec::new();
    for sex in [Sex::Male, Sex::Female] {
        for activity_level in ActivityLevel::ALL {
            for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
                profiles.push(Profile::new(82.0, 168.0, 41.0, sex, activity_level, goal));
            }
        }
    }
    profiles
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

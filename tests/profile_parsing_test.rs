// ABOUTME: Tests for turning calculator form payloads into profiles
// ABOUTME: InvalidProfile errors per field, JSON files on disk and batch arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use energy_balance_planner::{
    compute_json,
    errors::{AppError, ErrorCode, ErrorResponse},
    intelligence::ProfileValidator,
    models::{ActivityLevel, Goal, Profile, Sex},
};
use serde_json::json;
use tempfile::TempDir;

mod common;

fn rejected_field(error: &AppError) -> Option<&str> {
    error.context.field.as_deref()
}

#[test]
fn test_compute_json_projects_form_payload() {
    common::init_test_logging();
    let result = compute_json(&common::reference_payload("lose")).unwrap();

    common::assert_close(result.bmr, 1673.75, 1e-9);
    assert_eq!(result.horizon_days, 77);
}

#[test]
fn test_every_required_field_is_checked() {
    for field in ["weight", "height", "age", "sex", "activityLevel", "goal"] {
        let mut payload = common::reference_payload("lose");
        payload.as_object_mut().unwrap().remove(field);

        let error = compute_json(&payload).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(rejected_field(&error), Some(field));
        assert!(error.is_invalid_profile());
    }
}

#[test]
fn test_non_numeric_weight_is_invalid_profile() {
    let mut payload = common::reference_payload("lose");
    payload["weight"] = json!("seventy");

    let error = compute_json(&payload).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidProfile);
    assert_eq!(rejected_field(&error), Some("weight"));
}

#[test]
fn test_unknown_enum_values_are_invalid_profile() {
    let cases = [
        ("sex", json!("other")),
        ("activityLevel", json!("extreme")),
        ("goal", json!("bulk")),
        ("goal", json!(3)),
    ];

    for (field, value) in cases {
        let mut payload = common::reference_payload("lose");
        payload[field] = value;

        let error = compute_json(&payload).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidProfile);
        assert_eq!(rejected_field(&error), Some(field));
    }
}

#[test]
fn test_payload_must_be_object() {
    let error = compute_json(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_malformed_json_text_is_invalid_format() {
    let error = Profile::from_json_str("{\"weight\": 70,").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_profile_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(&path, common::reference_payload("gain").to_string()).unwrap();

    let profile = Profile::from_json_file(&path).unwrap();

    assert_eq!(profile.sex, Sex::Male);
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    assert_eq!(profile.goal, Goal::Gain);
    assert_eq!(profile.target_weight_change_kg, Some(5.0));
}

#[test]
fn test_missing_file_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let error = Profile::from_json_file(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("absent.json"));
}

#[test]
fn test_profile_list_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");
    let payloads = json!([
        common::reference_payload("lose"),
        common::reference_payload("maintain"),
        common::reference_payload("gain"),
    ]);
    fs::write(&path, payloads.to_string()).unwrap();

    let profiles = Profile::list_from_json_file(&path).unwrap();

    let goals: Vec<Goal> = profiles.iter().map(|p| p.goal).collect();
    assert_eq!(goals, vec![Goal::Lose, Goal::Maintain, Goal::Gain]);
}

#[test]
fn test_error_response_envelope_names_field() {
    let mut payload = common::reference_payload("lose");
    payload["sex"] = json!("x");

    let response = ErrorResponse::from(compute_json(&payload).unwrap_err());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["error"]["code"], "INVALID_PROFILE");
    assert_eq!(json["error"]["field"], "sex");
}

// ============================================================================
// RANGE VALIDATION (input-collection boundary)
// ============================================================================

#[test]
fn test_reference_profile_is_within_form_ranges() {
    let profile = Profile::from_json(&common::reference_payload("lose")).unwrap();
    assert!(ProfileValidator::validate(&profile).is_ok());
}

#[test]
fn test_out_of_range_profile_still_computes() {
    let mut payload = common::reference_payload("lose");
    payload["age"] = json!(12);

    let profile = Profile::from_json(&payload).unwrap();
    let violations = ProfileValidator::validate(&profile).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "age");

    // Range checks are advisory; the engine itself accepts the profile
    assert!(compute_json(&payload).is_ok());
}

#[test]
fn test_strict_validation_maps_to_value_out_of_range() {
    let profile = Profile::new(
        25.0,
        175.0,
        30.0,
        Sex::Female,
        ActivityLevel::Light,
        Goal::Gain,
    );
    let error = ProfileValidator::validate_strict(&profile).unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(rejected_field(&error), Some("weight"));
}

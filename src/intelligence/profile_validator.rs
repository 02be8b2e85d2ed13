// ABOUTME: Range validation for profiles collected from the calculator form
// ABOUTME: Collects every out-of-range field instead of stopping at the first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile range validation
//!
//! The projection engine accepts any real inputs. Callers collecting data
//! from people use this validator first so that a typo such as a 17 kg adult
//! is rejected before it reaches the model.

use std::fmt;

use balance_core::constants::profile_ranges::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use serde::Serialize;
use serde_json::json;

use crate::errors::AppError;
use crate::models::Profile;

/// One field outside its accepted range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Payload field name (`age`, `weight` or `height`)
    pub field: &'static str,
    /// Rejected value
    pub value: f64,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {} (got {})",
            self.field, self.min, self.max, self.value
        )
    }
}

impl From<FieldViolation> for AppError {
    fn from(violation: FieldViolation) -> Self {
        Self::out_of_range(violation.field, violation.to_string()).with_details(json!({
            "value": violation.value,
            "min": violation.min,
            "max": violation.max,
        }))
    }
}

/// Validator for the calculator form ranges
pub struct ProfileValidator;

impl ProfileValidator {
    /// Check age [15, 100], weight [30, 300] kg and height [100, 250] cm
    ///
    /// # Errors
    ///
    /// Returns every violation, in field order age, weight, height.
    /// Non-finite values always violate their range.
    pub fn validate(profile: &Profile) -> Result<(), Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = [
            ("age", profile.age_years, MIN_AGE, MAX_AGE),
            ("weight", profile.weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG),
            ("height", profile.height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM),
        ]
        .into_iter()
        .filter(|(_, value, min, max)| !(*min..=*max).contains(value))
        .map(|(field, value, min, max)| FieldViolation {
            field,
            value,
            min,
            max,
        })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Validate and convert the first violation into an [`AppError`]
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error naming the first offending field;
    /// the full list is attached under `details.violations`.
    pub fn validate_strict(profile: &Profile) -> Result<(), AppError> {
        Self::validate(profile).map_err(|violations| {
            let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
            match violations.into_iter().next() {
                Some(first) => AppError::from(first)
                    .with_details(json!({ "violations": messages })),
                None => AppError::internal("Validation failed without violations"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, Sex};

    fn profile(weight_kg: f64, height_cm: f64, age_years: f64) -> Profile {
        Profile::new(
            weight_kg,
            height_cm,
            age_years,
            Sex::Female,
            ActivityLevel::Light,
            Goal::Maintain,
        )
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ProfileValidator::validate(&profile(30.0, 100.0, 15.0)).is_ok());
        assert!(ProfileValidator::validate(&profile(300.0, 250.0, 100.0)).is_ok());
    }

    #[test]
    fn test_collects_all_violations_in_order() {
        let violations = ProfileValidator::validate(&profile(17.0, 320.0, 12.0)).unwrap_err();

        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["age", "weight", "height"]);
    }

    #[test]
    fn test_nan_is_rejected() {
        let violations = ProfileValidator::validate(&profile(f64::NAN, 170.0, 30.0)).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "weight");
    }

    #[test]
    fn test_strict_reports_first_field() {
        let error = ProfileValidator::validate_strict(&profile(70.0, 90.0, 12.0)).unwrap_err();

        assert_eq!(error.context.field.as_deref(), Some("age"));
        assert_eq!(error.context.details["violations"].as_array().map(Vec::len), Some(2));
    }
}

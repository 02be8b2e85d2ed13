// ABOUTME: Profile record supplied by the input-collection layer
// ABOUTME: Sex, activity level and goal enums plus strict JSON payload parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use balance_core::constants::energy_balance::DEFAULT_TARGET_WEIGHT_CHANGE_KG;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::{AppError, AppResult};

/// Biological sex, used only for the BMR offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

/// Declared activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily exercise or physical job
    VeryActive,
}

/// Stated weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit, target below current weight
    Lose,
    /// Caloric balance, target equals current weight
    Maintain,
    /// Caloric surplus, target above current weight
    Gain,
}

impl Sex {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl ActivityLevel {
    /// All levels in ascending order of activity
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very-active",
        }
    }
}

impl Goal {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_profile(
                "sex",
                format!("Unknown sex '{other}', expected male or female"),
            )),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very-active" | "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_profile(
                "activityLevel",
                format!(
                    "Unknown activity level '{other}', expected one of sedentary, light, moderate, active, very-active"
                ),
            )),
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_profile(
                "goal",
                format!("Unknown goal '{other}', expected lose, maintain or gain"),
            )),
        }
    }
}

/// Physical profile and goal of one person
///
/// Range checks (age 15-100, weight 30-300 kg, height 100-250 cm) belong to the
/// input-collection layer; the engine computes on whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Current body mass (kg)
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Stature (cm)
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Age (years)
    #[serde(rename = "age")]
    pub age_years: f64,
    /// Biological sex
    pub sex: Sex,
    /// Declared activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
    /// Magnitude of the desired change (kg); direction comes from `goal`
    #[serde(
        rename = "targetWeightChange",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_weight_change_kg: Option<f64>,
}

impl Profile {
    /// Create a profile with the default target change
    #[must_use]
    pub const fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
            goal,
            target_weight_change_kg: None,
        }
    }

    /// Set the magnitude of the desired weight change
    #[must_use]
    pub const fn with_target_weight_change(mut self, change_kg: f64) -> Self {
        self.target_weight_change_kg = Some(change_kg);
        self
    }

    /// Stated change magnitude, or the 5 kg default
    #[must_use]
    pub fn target_weight_change_or_default(&self) -> f64 {
        self.target_weight_change_kg
            .unwrap_or(DEFAULT_TARGET_WEIGHT_CHANGE_KG)
    }

    /// Change magnitude the calculator form submits for a goal
    ///
    /// The form sends 0 kg for maintain and 5 kg otherwise.
    #[must_use]
    pub fn form_target_weight_change(goal: Goal) -> f64 {
        match goal {
            Goal::Maintain => 0.0,
            Goal::Lose | Goal::Gain => DEFAULT_TARGET_WEIGHT_CHANGE_KG,
        }
    }

    /// Parse a profile from the JSON form payload
    ///
    /// Extra keys such as `name` and `email` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidProfile`-family error naming the field when a
    /// required field is missing, a number is not numeric, or an enumerated
    /// field holds an unknown value.
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let Some(fields) = value.as_object() else {
            return Err(AppError::invalid_format(
                "Profile payload must be a JSON object",
            ));
        };

        Ok(Self {
            weight_kg: required_number(fields, "weight")?,
            height_cm: required_number(fields, "height")?,
            age_years: required_number(fields, "age")?,
            sex: required_enum(fields, "sex")?,
            activity_level: required_enum(fields, "activityLevel")?,
            goal: required_enum(fields, "goal")?,
            target_weight_change_kg: optional_number(fields, "targetWeightChange")?,
        })
    }

    /// Parse a profile from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON and the errors of
    /// [`Profile::from_json`] for a well-formed but unusable payload.
    pub fn from_json_str(input: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Parse a profile from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the file cannot be read or is not JSON,
    /// and the errors of [`Profile::from_json`] otherwise.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        Self::from_json(&read_json_file(path)?)
    }

    /// Parse a JSON array of profile payloads
    ///
    /// # Errors
    ///
    /// Fails on the first unusable entry; its position is recorded under
    /// `details.index`.
    pub fn list_from_json(value: &Value) -> AppResult<Vec<Self>> {
        let Some(entries) = value.as_array() else {
            return Err(AppError::invalid_format(
                "Profile batch must be a JSON array",
            ));
        };

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Self::try_from(entry)
                    .map_err(|error| error.with_details(json!({ "index": index })))
            })
            .collect()
    }

    /// Parse a JSON file holding an array of profile payloads
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for unreadable files and the errors of
    /// [`Profile::list_from_json`] otherwise.
    pub fn list_from_json_file(path: &Path) -> AppResult<Vec<Self>> {
        Self::list_from_json(&read_json_file(path)?)
    }
}

fn read_json_file(path: &Path) -> AppResult<Value> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_format(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}

impl TryFrom<&Value> for Profile {
    type Error = AppError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

fn number_from(field: &str, value: &Value) -> AppResult<f64> {
    value
        .as_f64()
        .filter(|number| number.is_finite())
        .ok_or_else(|| {
            AppError::invalid_profile(
                field,
                format!("Field '{field}' must be a number, got {value}"),
            )
        })
}

fn required_number(fields: &Map<String, Value>, field: &str) -> AppResult<f64> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(value) => number_from(field, value),
    }
}

fn optional_number(fields: &Map<String, Value>, field: &str) -> AppResult<Option<f64>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => number_from(field, value).map(Some),
    }
}

fn required_enum<T>(fields: &Map<String, Value>, field: &str) -> AppResult<T>
where
    T: FromStr<Err = AppError>,
{
    match fields.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(Value::String(text)) => text.parse(),
        Some(other) => Err(AppError::invalid_profile(
            field,
            format!("Field '{field}' must be a string, got {other}"),
        )),
    }
}

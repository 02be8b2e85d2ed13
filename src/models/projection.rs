// ABOUTME: Projection result record returned by the engine
// ABOUTME: Goal reachability variant, trajectory samples and the full result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Time needed to reach the target weight under the recommended intake
///
/// On the wire `Unreachable` is `null` in `daysToGoal`. Callers that need the
/// numeric form use [`GoalEta::days_or_infinity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalEta {
    /// Target is approached monotonically and reached after `days`
    Reachable {
        /// Finite, non-negative number of days
        days: f64,
    },
    /// Target cannot be reached from the current weight at this intake
    Unreachable,
}

impl GoalEta {
    /// Whether the target can be reached
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    /// Days to goal when reachable
    #[must_use]
    pub const fn days(&self) -> Option<f64> {
        match self {
            Self::Reachable { days } => Some(*days),
            Self::Unreachable => None,
        }
    }

    /// Days to goal with unreachable mapped to positive infinity
    #[must_use]
    pub const fn days_or_infinity(&self) -> f64 {
        match self {
            Self::Reachable { days } => *days,
            Self::Unreachable => f64::INFINITY,
        }
    }
}

impl Serialize for GoalEta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Reachable { days } => serializer.serialize_some(days),
            Self::Unreachable => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for GoalEta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Option::<f64>::deserialize(deserializer)?;
        Ok(days
            .filter(|value| value.is_finite())
            .map_or(Self::Unreachable, |days| Self::Reachable { days }))
    }
}

/// One point of a projected weight curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Day offset from today
    pub day: u32,
    /// Projected body mass (kg)
    pub weight: f64,
}

/// Caloric plan and projected trajectory for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Recommended daily intake (kcal/day)
    pub recommended_calories: f64,
    /// Weight at which the recommended intake balances expenditure (kg)
    pub equilibrium_weight: f64,
    /// Starting weight (kg)
    pub current_weight: f64,
    /// Goal weight (kg)
    pub target_weight: f64,
    /// Time to reach `target_weight`
    pub days_to_goal: GoalEta,
    /// Last day of `weight_over_time`
    pub horizon_days: u32,
    /// Sampled weight curve from day 0 to `horizon_days`
    pub weight_over_time: Vec<WeightSample>,
    /// Advisory guidance in display order
    pub nutrition_recommendations: Vec<String>,
}

impl ProjectionResult {
    /// Whether the target can be reached under the recommended intake
    #[must_use]
    pub const fn is_goal_reachable(&self) -> bool {
        self.days_to_goal.is_reachable()
    }

    /// Daily difference between expenditure and intake (positive for a deficit)
    #[must_use]
    pub fn daily_energy_gap(&self) -> f64 {
        self.tdee - self.recommended_calories
    }
}

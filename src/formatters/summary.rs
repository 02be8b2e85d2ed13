// ABOUTME: Human-facing summary of a projection result
// ABOUTME: Rounded energy figures, goal timeline in days/weeks or months, and goal date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{GoalEta, ProjectionResult};

/// Timelines of this many days or more are reported in months
const MONTH_THRESHOLD_DAYS: f64 = 30.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_WEEK: f64 = 7.0;

/// How long reaching the goal takes, in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GoalTimeline {
    /// Goal reached within a month
    Days {
        /// Whole days, rounded up
        days: u32,
        /// Whole weeks, rounded up from the exact day count
        weeks: u32,
    },
    /// Goal reached after a month or more
    Months {
        /// 30-day months, rounded up
        months: u32,
        /// Whole days, rounded up
        days: u32,
    },
    /// No goal progress under this intake; weight settles at equilibrium
    #[serde(rename_all = "camelCase")]
    Stabilizes {
        /// Weight the trajectory converges to (kg)
        equilibrium_weight: f64,
        /// Daily intake producing that equilibrium (kcal, rounded)
        calories: i64,
    },
}

impl GoalTimeline {
    /// Derive the timeline for a projection
    ///
    /// A reachable goal of zero days is shown as stabilizing, since there is
    /// no progress to chart.
    #[must_use]
    pub fn from_result(result: &ProjectionResult) -> Self {
        match result.days_to_goal {
            GoalEta::Reachable { days } if days > 0.0 => {
                if days < MONTH_THRESHOLD_DAYS {
                    Self::Days {
                        days: ceil_to_u32(days),
                        weeks: ceil_to_u32(days / DAYS_PER_WEEK),
                    }
                } else {
                    Self::Months {
                        months: ceil_to_u32(days / DAYS_PER_MONTH),
                        days: ceil_to_u32(days),
                    }
                }
            }
            GoalEta::Reachable { .. } | GoalEta::Unreachable => Self::Stabilizes {
                equilibrium_weight: result.equilibrium_weight,
                calories: round_to_i64(result.recommended_calories),
            },
        }
    }
}

/// Presentation view of a [`ProjectionResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// BMR (kcal/day, rounded)
    pub bmr: i64,
    /// TDEE (kcal/day, rounded)
    pub tdee: i64,
    /// Recommended intake (kcal/day, rounded)
    pub recommended_calories: i64,
    /// Starting weight (kg)
    pub current_weight: f64,
    /// Goal weight (kg)
    pub target_weight: f64,
    /// Exact time to goal
    pub days_to_goal: GoalEta,
    /// Goal timeline in display units
    pub timeline: GoalTimeline,
    /// Whether a progress chart is meaningful
    pub show_chart: bool,
}

impl ProjectionSummary {
    /// Build the summary for a projection result
    #[must_use]
    pub fn from_result(result: &ProjectionResult) -> Self {
        Self {
            bmr: round_to_i64(result.bmr),
            tdee: round_to_i64(result.tdee),
            recommended_calories: round_to_i64(result.recommended_calories),
            current_weight: result.current_weight,
            target_weight: result.target_weight,
            days_to_goal: result.days_to_goal,
            timeline: GoalTimeline::from_result(result),
            show_chart: result.days_to_goal.days().is_some_and(|days| days > 0.0),
        }
    }

    /// Calendar date the goal is reached when starting on `start`
    ///
    /// `None` when the goal is unreachable or the date overflows the calendar.
    #[must_use]
    pub fn estimated_goal_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        let days = self.days_to_goal.days()?;
        start.checked_add_days(Days::new(u64::from(ceil_to_u32(days))))
    }
}

impl From<&ProjectionResult> for ProjectionSummary {
    fn from(result: &ProjectionResult) -> Self {
        Self::from_result(result)
    }
}

impl fmt::Display for ProjectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BMR {} kcal/day, TDEE {} kcal/day, eat {} kcal/day. ",
            self.bmr, self.tdee, self.recommended_calories
        )?;

        match self.timeline {
            GoalTimeline::Days { days, weeks } => write!(
                f,
                "Reach {:.1} kg in about {days} days ({weeks} weeks).",
                self.target_weight
            ),
            GoalTimeline::Months { months, days } => write!(
                f,
                "Reach {:.1} kg in about {months} months ({days} days).",
                self.target_weight
            ),
            GoalTimeline::Stabilizes {
                equilibrium_weight,
                calories,
            } => write!(
                f,
                "At {calories} kcal/day your weight stabilizes near {equilibrium_weight:.1} kg."
            ),
        }
    }
}

// Saturating cast; inputs are finite non-negative day counts
fn ceil_to_u32(value: f64) -> u32 {
    value.ceil() as u32
}

fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightSample;

    fn result_with(days_to_goal: GoalEta) -> ProjectionResult {
        ProjectionResult {
            bmr: 1673.75,
            tdee: 2594.3125,
            recommended_calories: 2094.3125,
            equilibrium_weight: 54.313,
            current_weight: 70.0,
            target_weight: 65.0,
            days_to_goal,
            horizon_days: 0,
            weight_over_time: vec![WeightSample {
                day: 0,
                weight: 70.0,
            }],
            nutrition_recommendations: Vec::new(),
        }
    }

    #[test]
    fn test_energy_figures_are_rounded() {
        let summary = ProjectionSummary::from_result(&result_with(GoalEta::Unreachable));

        assert_eq!(summary.bmr, 1674);
        assert_eq!(summary.tdee, 2594);
        assert_eq!(summary.recommended_calories, 2094);
    }

    #[test]
    fn test_short_goal_in_days_and_weeks() {
        let summary = ProjectionSummary::from_result(&result_with(GoalEta::Reachable { days: 14.2 }));

        assert_eq!(summary.timeline, GoalTimeline::Days { days: 15, weeks: 3 });
        assert!(summary.show_chart);
    }

    #[test]
    fn test_long_goal_in_months() {
        let summary = ProjectionSummary::from_result(&result_with(GoalEta::Reachable { days: 76.64 }));

        assert_eq!(summary.timeline, GoalTimeline::Months { months: 3, days: 77 });
    }

    #[test]
    fn test_zero_days_shown_as_stabilizing() {
        let summary = ProjectionSummary::from_result(&result_with(GoalEta::Reachable { days: 0.0 }));

        assert!(matches!(summary.timeline, GoalTimeline::Stabilizes { calories: 2094, .. }));
        assert!(!summary.show_chart);
    }

    #[test]
    fn test_goal_date() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let reachable = ProjectionSummary::from_result(&result_with(GoalEta::Reachable { days: 30.5 }));
        let unreachable = ProjectionSummary::from_result(&result_with(GoalEta::Unreachable));

        assert_eq!(
            reachable.estimated_goal_date(start),
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );
        assert_eq!(unreachable.estimated_goal_date(start), None);
    }

    #[test]
    fn test_display_mentions_equilibrium_when_unreachable() {
        let text = ProjectionSummary::from_result(&result_with(GoalEta::Unreachable)).to_string();

        assert!(text.contains("stabilizes near 54.3 kg"));
        assert!(text.starts_with("BMR 1674 kcal/day"));
    }
}

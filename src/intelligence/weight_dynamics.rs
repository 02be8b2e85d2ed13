// ABOUTME: First-order energy balance model of body weight over time
// ABOUTME: Equilibrium weight, closed-form weight at time t and analytic time-to-goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Dynamics Module
//!
//! Body weight is modelled by the linear ODE
//!
//! ```text
//! dw/dt = b (w_inf - w)      b = 38.56 / 7700 per day
//! ```
//!
//! where `w_inf = calories / 38.56` is the weight at which a fixed intake
//! neither grows nor shrinks the body. Its solution
//! `w(t) = w_inf + (w0 - w_inf) e^(-b t)` is inverted analytically for the
//! time to reach a target instead of being simulated.

use balance_core::constants::energy_balance::{
    DECAY_CONSTANT, EQUILIBRIUM_TOLERANCE_KG, GOAL_RATIO_TOLERANCE, METABOLIC_RATE_COEFFICIENT,
};

use crate::models::{Goal, GoalEta};

/// Calculate the equilibrium weight (kg) for a daily intake
///
/// Finite and strictly positive whenever `calories > 0`.
#[must_use]
pub fn calculate_equilibrium_weight(calories: f64) -> f64 {
    calories / METABOLIC_RATE_COEFFICIENT
}

/// Calculate projected weight after `days` using the analytical solution
///
/// Formula: w(t) = `w_inf` + (w0 - `w_inf`) x e^(-b x t)
#[must_use]
#[allow(clippy::suboptimal_flops)] // keep the closed-form evaluation order
pub fn calculate_weight_at_time(initial_weight: f64, equilibrium_weight: f64, days: f64) -> f64 {
    equilibrium_weight + (initial_weight - equilibrium_weight) * (-DECAY_CONSTANT * days).exp()
}

/// Calculate days needed to reach `target_weight`
///
/// Formula: t = -ln((wT - `w_inf`) / (w0 - `w_inf`)) / b
///
/// Reachability policy:
/// - current weight within 0.001 kg of equilibrium: no progress is possible,
///   unreachable whatever the target
/// - target identical to the current weight: zero progress to make, reported
///   as unreachable so a maintain plan projects over the fallback horizon
/// - ratio `<= 0`: target lies on the far side of the asymptote, unreachable
/// - ratio `> 1`: target lies behind the current weight, the curve moves
///   away from it, unreachable
/// - otherwise the time is clamped to zero from below, absorbing ratios a
///   rounding error above one
#[must_use]
#[allow(clippy::float_cmp)] // exact identity, not a tolerance check
pub fn calculate_days_to_goal(
    current_weight: f64,
    target_weight: f64,
    equilibrium_weight: f64,
) -> GoalEta {
    let numerator = target_weight - equilibrium_weight;
    let denominator = current_weight - equilibrium_weight;

    if denominator.abs() < EQUILIBRIUM_TOLERANCE_KG {
        return GoalEta::Unreachable;
    }

    if target_weight == current_weight {
        return GoalEta::Unreachable;
    }

    let ratio = numerator / denominator;
    if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 + GOAL_RATIO_TOLERANCE {
        return GoalEta::Unreachable;
    }

    let days = (-ratio.ln() / DECAY_CONSTANT).max(0.0);
    if days.is_finite() {
        GoalEta::Reachable { days }
    } else {
        GoalEta::Unreachable
    }
}

/// Derive the target weight from the current weight and goal
///
/// The change is taken as a magnitude; its direction comes from the goal.
#[must_use]
pub fn calculate_target_weight(current_weight: f64, goal: Goal, change_kg: f64) -> f64 {
    match goal {
        Goal::Lose => current_weight - change_kg.abs(),
        Goal::Maintain => current_weight,
        Goal::Gain => current_weight + change_kg.abs(),
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for balance-cli
// ABOUTME: Prints projections, range violations and JSON error envelopes

use chrono::{Local, NaiveDate};
use energy_balance_planner::errors::{AppError, ErrorResponse};
use energy_balance_planner::formatters::{FormattedOutput, ProjectionSummary};
use energy_balance_planner::intelligence::FieldViolation;

/// Print formatted output to stdout
pub fn display_output(output: &FormattedOutput) {
    println!("{}", output.data);
}

/// Print the goal date line that follows a summary
pub fn display_goal_date(summary: &ProjectionSummary) {
    let today: NaiveDate = Local::now().date_naive();
    match summary.estimated_goal_date(today) {
        Some(date) => println!("Estimated goal date: {}", date.format("%Y-%m-%d")),
        None => println!("Estimated goal date: not reachable at this intake"),
    }
}

/// Print every range violation, one per line
pub fn display_violations(violations: &[FieldViolation]) {
    println!("Profile has {} out-of-range field(s):", violations.len());
    for violation in violations {
        println!("  - {violation}");
    }
}

/// Print a confirmation for a profile within range
pub fn display_valid_profile() {
    println!("Profile is within the accepted ranges");
}

/// Print an error as a JSON envelope on stdout
pub fn display_error(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{}: {e}", response.error.message),
    }
}

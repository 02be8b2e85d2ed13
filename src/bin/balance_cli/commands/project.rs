// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Projection commands for balance-cli
// ABOUTME: Single-profile projection with optional summary, and parallel batch projection

use std::path::Path;

use energy_balance_planner::errors::AppResult;
use energy_balance_planner::formatters::{
    format_output, format_projection, OutputFormat, ProjectionSummary,
};
use energy_balance_planner::models::Profile;
use energy_balance_planner::ProjectionEngine;
use tracing::info;

use crate::helpers::display::{display_goal_date, display_output};
use crate::helpers::input::load_profile;
use crate::ProfileArgs;

/// Project one profile and print the result
pub fn project(engine: &ProjectionEngine, args: &ProfileArgs, summary: bool) -> AppResult<()> {
    let profile = load_profile(args)?;
    let result = engine.compute(&profile);

    if summary {
        let output = format_projection(&result, OutputFormat::Summary)?;
        display_output(&output);
        display_goal_date(&ProjectionSummary::from_result(&result));
    } else {
        let output = format_projection(&result, OutputFormat::PrettyJson)?;
        display_output(&output);
    }

    Ok(())
}

/// Project every profile of a JSON array file and print the results in order
pub fn batch(engine: &ProjectionEngine, input: &Path) -> AppResult<()> {
    let profiles = Profile::list_from_json_file(input)?;
    info!(count = profiles.len(), path = %input.display(), "Projecting profile batch");

    let results = engine.compute_batch(&profiles);
    let output = format_output(&results, OutputFormat::PrettyJson)?;
    display_output(&output);

    Ok(())
}

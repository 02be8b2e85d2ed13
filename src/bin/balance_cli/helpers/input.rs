// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Profile loading for balance-cli
// ABOUTME: Builds a Profile from a JSON payload file or from individual flags

use energy_balance_planner::errors::{AppError, AppResult};
use energy_balance_planner::models::Profile;
use tracing::debug;

use crate::ProfileArgs;

/// Resolve the profile described by the command-line arguments
pub fn load_profile(args: &ProfileArgs) -> AppResult<Profile> {
    if let Some(path) = &args.input {
        debug!(path = %path.display(), "Loading profile from file");
        return Profile::from_json_file(path);
    }

    let profile = Profile::new(
        args.weight.ok_or_else(|| AppError::missing_field("weight"))?,
        args.height.ok_or_else(|| AppError::missing_field("height"))?,
        args.age.ok_or_else(|| AppError::missing_field("age"))?,
        args.sex.ok_or_else(|| AppError::missing_field("sex"))?,
        args.activity
            .ok_or_else(|| AppError::missing_field("activityLevel"))?,
        args.goal.ok_or_else(|| AppError::missing_field("goal"))?,
    );

    Ok(match args.change {
        Some(change_kg) => profile.with_target_weight_change(change_kg),
        None => profile,
    })
}

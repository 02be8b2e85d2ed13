// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Range validation command for balance-cli
// ABOUTME: Reports every out-of-range field and fails when any is found

use energy_balance_planner::errors::{AppError, AppResult};
use energy_balance_planner::intelligence::ProfileValidator;

use crate::helpers::display::{display_valid_profile, display_violations};
use crate::helpers::input::load_profile;
use crate::ProfileArgs;

/// Validate a profile against the calculator form ranges
pub fn validate(args: &ProfileArgs) -> AppResult<()> {
    let profile = load_profile(args)?;

    match ProfileValidator::validate(&profile) {
        Ok(()) => {
            display_valid_profile();
            Ok(())
        }
        Err(violations) => {
            display_violations(&violations);
            Err(violations
                .into_iter()
                .next()
                .map_or_else(|| AppError::internal("Validation failed"), AppError::from))
        }
    }
}

// ABOUTME: balance-cli - command-line front end for the energy balance projection engine
// ABOUTME: Projects caloric plans and weight trajectories from flags or JSON profile files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Project a plan from flags
//! balance-cli project --weight 70 --height 175 --age 25 --sex male --activity moderate --goal lose
//!
//! # Project from a JSON form payload and print a one-line summary
//! balance-cli project --input profile.json --summary
//!
//! # Check a profile against the form ranges
//! balance-cli validate --input profile.json
//!
//! # Project every profile in a JSON array
//! balance-cli batch --input profiles.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use energy_balance_planner::{
    config::init_configs,
    errors::AppResult,
    logging::LoggingConfig,
    models::{ActivityLevel, Goal, Sex},
    ProjectionEngine,
};
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "balance-cli",
    about = "Energy balance projection CLI",
    long_about = "Estimates daily energy needs, recommends an intake for a weight goal and projects body weight over time."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Project the caloric plan and weight trajectory for one profile
    Project {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print a one-line summary instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Check a profile against the calculator form ranges
    Validate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Project every profile in a JSON array file
    Batch {
        /// JSON file holding an array of profile payloads
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
}

/// Profile given either as flags or as a JSON payload file
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// JSON file holding the profile payload
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["weight", "height", "age", "sex", "activity", "goal", "change"]
    )]
    pub input: Option<PathBuf>,

    /// Body mass (kg)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Stature (cm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Age (years)
    #[arg(long)]
    pub age: Option<f64>,

    /// Biological sex (male, female)
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Activity level (sedentary, light, moderate, active, very-active)
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Weight goal (lose, maintain, gain)
    #[arg(long)]
    pub goal: Option<Goal>,

    /// Magnitude of the desired change in kg (default 5)
    #[arg(long)]
    pub change: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            helpers::display::display_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    init_configs()?;
    let engine = ProjectionEngine::from_global();
    debug!(config = ?engine.config(), "Projection engine ready");

    match command {
        Command::Project { profile, summary } => {
            commands::project::project(&engine, &profile, summary)
        }
        Command::Validate { profile } => commands::validate::validate(&profile),
        Command::Batch { input } => commands::project::batch(&engine, &input),
    }
}

// ABOUTME: Output format abstraction for projection results
// ABOUTME: Compact JSON, pretty JSON, and a one-line human summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Machine consumers get the full [`ProjectionResult`] as JSON. People get a
//! [`ProjectionSummary`] with rounded figures and a timeline in days, weeks or
//! months.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use energy_balance_planner::formatters::{format_projection, OutputFormat};
//! use energy_balance_planner::intelligence::compute;
//! use energy_balance_planner::models::{ActivityLevel, Goal, Profile, Sex};
//!
//! let profile = Profile::new(70.0, 175.0, 25.0, Sex::Male, ActivityLevel::Moderate, Goal::Lose);
//! let result = compute(&profile);
//! if let Ok(output) = format_projection(&result, OutputFormat::Summary) {
//!     println!("{}", output.data);
//! }
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::ProjectionResult;

/// Projection summary for the presentation layer
pub mod summary;

pub use summary::{GoalTimeline, ProjectionSummary};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON (default)
    #[default]
    Json,
    /// Indented JSON for terminals
    PrettyJson,
    /// One-line English summary
    Summary,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => Self::PrettyJson,
            "summary" | "text" => Self::Summary,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json | Self::PrettyJson => "application/json",
            Self::Summary => "text/plain",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::PrettyJson => "pretty",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Serialize any value as compact or pretty JSON
///
/// `Summary` falls back to pretty JSON for values that are not projections.
///
/// # Errors
///
/// Returns a `SerializationError` if the value cannot be serialized
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, AppError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data),
        OutputFormat::PrettyJson | OutputFormat::Summary => serde_json::to_string_pretty(data),
    }
    .map_err(|e| AppError::serialization(format!("Format error ({format}): {e}")))?;

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render a projection result in the requested format
///
/// # Errors
///
/// Returns a `SerializationError` if JSON serialization fails
pub fn format_projection(
    result: &ProjectionResult,
    format: OutputFormat,
) -> Result<FormattedOutput, AppError> {
    match format {
        OutputFormat::Summary => Ok(FormattedOutput {
            data: ProjectionSummary::from_result(result).to_string(),
            format,
            content_type: format.content_type(),
        }),
        OutputFormat::Json | OutputFormat::PrettyJson => format_output(result, format),
    }
}

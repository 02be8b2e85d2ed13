// ABOUTME: Error types re-exported from balance-core
// ABOUTME: Adds conversions from configuration errors into the unified AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error vocabulary lives in `balance-core`; this module re-exports it and
//! wires the main crate's own error enums into `AppError`.

pub use balance_core::errors::*;

use crate::config::ConfigError;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

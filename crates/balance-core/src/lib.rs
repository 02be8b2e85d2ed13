// ABOUTME: Core types and constants for the energy-balance planner
// ABOUTME: Foundation crate with error handling and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Balance Core
//!
//! Foundation crate shared by the projection engine and its binaries. It is
//! designed to change infrequently so that the workspace benefits from
//! incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological constants and engine defaults organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants and engine defaults organized by domain
pub mod constants;

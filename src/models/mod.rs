// ABOUTME: Core data models for the projection engine
// ABOUTME: Profile input record and projection result record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records exchanged with the engine's collaborators.
//!
//! ## Design Principles
//!
//! - **Immutable**: A profile never changes during a computation and a result
//!   never changes once produced
//! - **Serializable**: Both records use the camelCase field names of the form
//!   payload so a presentation or persistence layer can store them verbatim
//! - **Type Safe**: Enumerated inputs are enums, and an unreachable goal is a
//!   variant rather than a floating-point sentinel
//!
//! ## Core Models
//!
//! - `Profile`: Body metrics, activity level and goal of one person
//! - `ProjectionResult`: Caloric plan, equilibrium and weight trajectory
//! - `GoalEta`: Reachable-in-N-days or unreachable

/// Profile input record and its enumerated fields
pub mod profile;

/// Projection result record
pub mod projection;

pub use profile::{ActivityLevel, Goal, Profile, Sex};
pub use projection::{GoalEta, ProjectionResult, WeightSample};

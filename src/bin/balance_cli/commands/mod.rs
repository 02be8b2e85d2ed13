// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for balance-cli
// ABOUTME: Provides access to projection and validation commands

pub mod project;
pub mod validate;

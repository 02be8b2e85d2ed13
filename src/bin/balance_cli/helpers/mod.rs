// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for balance-cli
// ABOUTME: Provides access to profile input loading and display formatting utilities

pub mod display;
pub mod input;

// ABOUTME: Re-exports application constants from recipe-core
// ABOUTME: Single source for defaults, limits, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;

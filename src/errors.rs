// ABOUTME: Re-exports the unified error types from recipe-core
// ABOUTME: Keeps AppError/ErrorCode a single type across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::errors::*;

// ABOUTME: Core types and constants for the recipe catalog service
// ABOUTME: Foundation crate with error handling, page arithmetic, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe catalog
//! service. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **pagination**: Offset/limit page arithmetic and paged results
//! - **models**: Recipe records, projections, and catalog statistics

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Offset-based pagination shared by listing and search
pub mod pagination;

/// Core data models (Recipe, `RecipeDetail`, `NutrientValue`, `StatisticsSnapshot`)
pub mod models;

// ABOUTME: Domain service layer between the HTTP adapter and storage
// ABOUTME: Logs storage failures with context and surfaces them as opaque internal errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are protocol-agnostic: route handlers hand them structured
//! requests and serialize whatever they return. Storage errors never cross
//! this boundary with their details; they are logged here and replaced by a
//! generic `InternalError`.

/// Listing, search, and lookup of recipes
pub mod recipes;

/// Cached catalog statistics
pub mod statistics;

pub use recipes::{ListingResponse, RecipeService, SearchResponse};
pub use statistics::StatisticsAggregator;

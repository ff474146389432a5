// ABOUTME: Process-scoped caches for derived catalog data
// ABOUTME: Currently holds the statistics snapshot cache with explicit invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Statistics snapshot cache
pub mod statistics;

pub use statistics::StatisticsCache;

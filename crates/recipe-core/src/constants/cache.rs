// ABOUTME: Cache-related constants for the statistics snapshot cache
// ABOUTME: Keys used in cache log lines and the disabled-TTL sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Name of the statistics cache in structured logs
pub const STATISTICS_CACHE_NAME: &str = "recipeStatistics";

/// TTL value meaning "never expire"
pub const TTL_DISABLED_SECS: u64 = 0;

// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Database, recipe service, statistics aggregator, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::cache::StatisticsCache;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::services::{RecipeService, StatisticsAggregator};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Connection pool
    pub database: Database,
    /// Listing, search, and lookup
    pub recipes: RecipeService,
    /// Cached catalog statistics
    pub statistics: StatisticsAggregator,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the services onto `database`
    ///
    /// The statistics cache lives as long as these resources and honours the
    /// configured TTL.
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let cache = StatisticsCache::with_ttl(config.stats_cache_ttl);
        Self {
            recipes: RecipeService::new(database.recipes()),
            statistics: StatisticsAggregator::new(database.recipes(), cache),
            database,
            config,
        }
    }
}

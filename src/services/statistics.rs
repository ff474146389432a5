// ABOUTME: Catalog statistics aggregator backed by the process-scoped snapshot cache
// ABOUTME: Computes totals and averages on a miss and exposes explicit invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, error, info};

use crate::cache::StatisticsCache;
use crate::database::RecipesManager;
use crate::errors::{AppError, AppResult};
use crate::models::StatisticsSnapshot;

/// Computes catalog statistics and owns their cache
#[derive(Clone)]
pub struct StatisticsAggregator {
    recipes: RecipesManager,
    cache: StatisticsCache,
}

impl StatisticsAggregator {
    /// Create an aggregator reading through `recipes` and caching in `cache`
    #[must_use]
    pub const fn new(recipes: RecipesManager, cache: StatisticsCache) -> Self {
        Self { recipes, cache }
    }

    /// The cache this aggregator fills
    #[must_use]
    pub const fn cache(&self) -> &StatisticsCache {
        &self.cache
    }

    /// Cached snapshot, computing and storing it on a miss
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` if the snapshot has to be computed and storage fails
    pub async fn statistics(&self) -> AppResult<StatisticsSnapshot> {
        if let Some(snapshot) = self.cache.get().await {
            return Ok(snapshot);
        }
        let snapshot = self.compute().await?;
        self.cache.store(snapshot.clone()).await;
        Ok(snapshot)
    }

    /// Compute a fresh snapshot without consulting the cache
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` if storage fails
    pub async fn compute(&self) -> AppResult<StatisticsSnapshot> {
        debug!("Fetching recipe statistics");
        let snapshot = self.recipes.statistics().await.map_err(|e| {
            error!(operation = "statistics", error = %e, "Error fetching statistics");
            AppError::internal("Failed to fetch statistics").with_source(e)
        })?;

        info!(
            total = snapshot.total_recipes,
            cuisines = snapshot.recipes_by_cuisine.len(),
            "Fetched statistics"
        );
        Ok(snapshot)
    }

    /// Drop the cached snapshot
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}

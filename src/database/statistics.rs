// ABOUTME: Aggregate queries over the whole recipe table for catalog statistics
// ABOUTME: Totals, per-cuisine counts, and raw averages left unrounded for the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sqlx::Row;

use super::RecipesManager;
use crate::errors::{AppError, AppResult};
use crate::models::StatisticsSnapshot;

impl RecipesManager {
    /// Recipe count per non-null cuisine, largest groups first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_by_cuisine(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r"
            SELECT cuisine, COUNT(*) AS recipe_count
            FROM recipes
            WHERE cuisine IS NOT NULL
            GROUP BY cuisine
            ORDER BY recipe_count DESC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to count recipes by cuisine: {e}")))?;

        rows.iter()
            .map(|row| Ok((row.try_get("cuisine")?, row.try_get("recipe_count")?)))
            .collect()
    }

    /// Mean of the non-null ratings, `None` when nothing is rated
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn average_rating(&self) -> AppResult<Option<f64>> {
        self.average("rating").await
    }

    /// Mean of the non-null total times, `None` when no row has one
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn average_total_time(&self) -> AppResult<Option<f64>> {
        self.average("total_time").await
    }

    /// Run every aggregate and assemble the rounded snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if any aggregate query fails
    pub async fn statistics(&self) -> AppResult<StatisticsSnapshot> {
        let total = self.count_all().await?;
        let by_cuisine = self.count_by_cuisine().await?;
        let average_rating = self.average_rating().await?;
        let average_total_time = self.average_total_time().await?;

        Ok(StatisticsSnapshot::from_aggregates(
            total,
            by_cuisine,
            average_rating,
            average_total_time,
        ))
    }

    async fn average(&self, column: &'static str) -> AppResult<Option<f64>> {
        let sql = format!("SELECT AVG({column}) AS average FROM recipes");
        let row = sqlx::query(&sql)
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to average {column}: {e}")))?;

        Ok(row.try_get("average")?)
    }
}

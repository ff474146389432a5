// ABOUTME: Catalog-wide statistics snapshot and its rounding rules
// ABOUTME: Averages default to zero when no row carries a value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::statistics::AVERAGE_RATING_DECIMALS;

/// Aggregates over the whole, unfiltered catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    /// Number of stored recipes
    pub total_recipes: i64,
    /// Recipe count per non-null cuisine
    pub recipes_by_cuisine: BTreeMap<String, i64>,
    /// Mean rating rounded to 2 decimals, 0 when nothing is rated
    pub average_rating: f64,
    /// Mean total time rounded to an integer, 0 when absent everywhere
    pub average_total_time: i64,
}

impl StatisticsSnapshot {
    /// Build a snapshot from raw aggregate results
    ///
    /// `average_rating` and `average_total_time` are the unrounded SQL `AVG`
    /// values, `None` when no row had a value.
    #[must_use]
    pub fn from_aggregates(
        total_recipes: i64,
        cuisine_counts: impl IntoIterator<Item = (String, i64)>,
        average_rating: Option<f64>,
        average_total_time: Option<f64>,
    ) -> Self {
        Self {
            total_recipes,
            recipes_by_cuisine: cuisine_counts.into_iter().collect(),
            average_rating: average_rating
                .map_or(0.0, |avg| round_half_up(avg, AVERAGE_RATING_DECIMALS)),
            average_total_time: average_total_time.map_or(0, |avg| round_half_up(avg, 0) as i64),
        }
    }
}

/// Round half-up at the given number of decimal places
///
/// `floor(value * 10^decimals + 0.5) / 10^decimals`, so `4.125` becomes `4.13`
/// and `-1.5` becomes `-1.0`.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

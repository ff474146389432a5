// ABOUTME: Core data models for the recipe catalog
// ABOUTME: Recipe records, the detail projection, nutrient values, and catalog statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod nutrients;
mod recipe;
mod statistics;

pub use nutrients::{nutrients_from_json, NutrientValue, Nutrients};
pub use recipe::{NewRecipe, Recipe, RecipeDetail};
pub use statistics::{round_half_up, StatisticsSnapshot};

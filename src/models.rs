// ABOUTME: Re-exports domain models from recipe-core
// ABOUTME: Recipe, RecipeDetail, NewRecipe, NutrientValue, and StatisticsSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::models::*;

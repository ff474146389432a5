// ABOUTME: Route module organization for the recipe catalog HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Health check route
pub mod health;
/// Recipe catalog routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::{ListRecipesQuery, RecipeRoutes, SearchRecipesQuery};

// ABOUTME: Route handlers for the recipe catalog REST API
// ABOUTME: Listing, filtered search, statistics, cache invalidation, and get-by-id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! Thin adapter: query strings become structured requests for the services and
//! their results are serialized as-is.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;
use crate::filters::FilterRequest;
use crate::resources::ServerResources;

/// Read an optional integer query parameter, treating `?page=` like an absent one
///
/// Non-numeric values are still rejected.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|e| {
            serde::de::Error::custom(format!("Invalid integer '{value}': {e}"))
        }),
    }
}

/// Query parameters for the unfiltered listing
#[derive(Debug, Deserialize, Default)]
pub struct ListRecipesQuery {
    /// Page number, 1-based
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    /// Page size
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

/// Query parameters for filtered search
#[derive(Debug, Deserialize, Default)]
pub struct SearchRecipesQuery {
    /// Title substring
    pub title: Option<String>,
    /// Exact cuisine
    pub cuisine: Option<String>,
    /// Rating expression such as `>=4.5`
    pub rating: Option<String>,
    /// Total time expression such as `<=30`
    pub total_time: Option<String>,
    /// Calories expression such as `<400`
    pub calories: Option<String>,
    /// Page number, 1-based
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    /// Page size
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

impl From<SearchRecipesQuery> for FilterRequest {
    fn from(query: SearchRecipesQuery) -> Self {
        Self {
            title: query.title,
            cuisine: query.cuisine,
            rating: query.rating,
            total_time: query.total_time,
            calories: query.calories,
            page: query.page,
            limit: query.limit,
        }
    }
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipes/search", get(Self::handle_search))
            .route("/api/recipes/stats", get(Self::handle_statistics))
            .route(
                "/api/recipes/stats/cache",
                delete(Self::handle_invalidate_statistics),
            )
            .route("/api/recipes/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/recipes - One page of the whole catalog
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListRecipesQuery>,
    ) -> Result<Response, AppError> {
        let listing = resources.recipes.list_all(query.page, query.limit).await?;
        Ok((StatusCode::OK, Json(listing)).into_response())
    }

    /// Handle GET /api/recipes/search - Filtered page of recipes
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SearchRecipesQuery>,
    ) -> Result<Response, AppError> {
        let request = FilterRequest::from(query);
        let results = resources.recipes.search(&request).await?;
        Ok((StatusCode::OK, Json(results)).into_response())
    }

    /// Handle GET /api/recipes/stats - Catalog statistics
    async fn handle_statistics(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let snapshot = resources.statistics.statistics().await?;
        Ok((StatusCode::OK, Json(snapshot)).into_response())
    }

    /// Handle DELETE /api/recipes/stats/cache - Drop cached statistics
    async fn handle_invalidate_statistics(
        State(resources): State<Arc<ServerResources>>,
    ) -> StatusCode {
        resources.statistics.invalidate().await;
        StatusCode::NO_CONTENT
    }

    /// Handle GET /api/recipes/:id - Recipe detail, empty 404 when unknown
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        match resources.recipes.get_by_id(id).await? {
            Some(recipe) => Ok((StatusCode::OK, Json(recipe)).into_response()),
            None => Ok(StatusCode::NOT_FOUND.into_response()),
        }
    }
}

// ABOUTME: Recipe listing, filtered search, and get-by-id service operations
// ABOUTME: Shapes paged results into the listing and search response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::database::RecipesManager;
use crate::errors::{AppError, AppResult};
use crate::filters::{FilterRequest, Predicate, PredicateBuilder};
use crate::models::{Recipe, RecipeDetail};
use crate::pagination::PageRequest;

/// Unfiltered listing body: paging echo, match count, and rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    /// Page as requested (1 when absent)
    pub page: i64,
    /// Limit as requested (10 when absent)
    pub limit: i64,
    /// Number of stored recipes
    pub total: i64,
    /// Rows of the page
    pub data: Vec<Recipe>,
}

/// Filtered search body: rows only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Rows of the page
    pub data: Vec<Recipe>,
}

/// Read operations over the recipe catalog
#[derive(Clone)]
pub struct RecipeService {
    recipes: RecipesManager,
}

impl RecipeService {
    /// Create a service reading through `recipes`
    #[must_use]
    pub const fn new(recipes: RecipesManager) -> Self {
        Self { recipes }
    }

    /// One page of the whole catalog
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` if storage fails
    pub async fn list_all(&self, page: Option<i64>, limit: Option<i64>) -> AppResult<ListingResponse> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        debug!(page, limit, "Fetching recipes page");

        let result = self
            .recipes
            .search(&Predicate::match_all(), &PageRequest::new(Some(page), Some(limit)))
            .await
            .map_err(|e| {
                error!(operation = "list_all", page, limit, error = %e, "Error fetching recipes list");
                AppError::internal("Failed to fetch recipes list").with_source(e)
            })?;

        info!(
            returned = result.data.len(),
            total = result.total,
            page,
            limit,
            "Fetched recipes"
        );
        Ok(ListingResponse {
            page,
            limit,
            total: result.total,
            data: result.data,
        })
    }

    /// One page of recipes matching the request's filters
    ///
    /// Blank or unparsable filters are ignored rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` if storage fails
    pub async fn search(&self, request: &FilterRequest) -> AppResult<SearchResponse> {
        debug!(
            title = ?request.title,
            cuisine = ?request.cuisine,
            rating = ?request.rating,
            total_time = ?request.total_time,
            calories = ?request.calories,
            page = ?request.page,
            limit = ?request.limit,
            "Searching recipes"
        );

        let predicate = PredicateBuilder::from_request(request);
        let result = self
            .recipes
            .search(&predicate, &request.page_request())
            .await
            .map_err(|e| {
                error!(operation = "search", request = ?request, error = %e, "Error searching recipes");
                AppError::internal("Failed to search recipes").with_source(e)
            })?;

        info!(
            returned = result.data.len(),
            total = result.total,
            "Search found recipes"
        );
        Ok(SearchResponse { data: result.data })
    }

    /// Detail projection of one recipe, `None` when the id is unknown
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` if storage fails
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<RecipeDetail>> {
        debug!(recipe_id = id, "Fetching recipe by id");
        let recipe = self.recipes.get(id).await.map_err(|e| {
            error!(operation = "get_by_id", recipe_id = id, error = %e, "Error fetching recipe");
            AppError::internal("Failed to fetch recipe").with_source(e)
        })?;
        Ok(recipe.map(RecipeDetail::from))
    }
}

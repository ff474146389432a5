// ABOUTME: Recipe query executor running the count and page queries over one predicate
// ABOUTME: Also provides single-row lookup and validated inserts used by the importer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::filters::{Predicate, SqlValue};
use crate::models::{nutrients_from_json, NewRecipe, Recipe};
use crate::pagination::{PageRequest, PagedResult};

/// Columns selected for a full recipe row
const RECIPE_COLUMNS: &str = "r.id, r.cuisine, r.title, r.rating, r.prep_time, r.cook_time, \
     r.total_time, r.description, r.url, r.ingredients, r.instructions, r.nutrients, r.serves, \
     r.calories_num";

/// Stable page order: best rated first, ties by ascending id
const PAGE_ORDER: &str = "ORDER BY r.rating DESC, r.id ASC";

const INSERT_RECIPE: &str = r"
INSERT INTO recipes (
    cuisine, title, rating, prep_time, cook_time, total_time,
    description, url, ingredients, instructions, nutrients, serves,
    title_lower, cuisine_lower
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
";

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Recipe storage operations
#[derive(Clone)]
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(super) const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run the count query and the page query for the same predicate
    ///
    /// `total` counts every matching row; `data` holds at most the effective
    /// limit of rows starting at the effective offset, and is empty when the
    /// offset lies beyond the last match.
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails
    pub async fn search(
        &self,
        predicate: &Predicate,
        page: &PageRequest,
    ) -> AppResult<PagedResult<Recipe>> {
        let total = self.count(predicate).await?;
        let data = self.fetch_page(predicate, page).await?;
        Ok(PagedResult::new(total, data))
    }

    /// Count rows matching `predicate`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self, predicate: &Predicate) -> AppResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) AS total FROM recipes r {}",
            predicate.where_sql()
        );
        debug!(sql = %sql, bindings = ?predicate.bindings(), "Counting recipes");

        let row = bind_predicate(sqlx::query(&sql), predicate)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        Ok(row.get("total"))
    }

    /// Fetch one ordered page of rows matching `predicate`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn fetch_page(
        &self,
        predicate: &Predicate,
        page: &PageRequest,
    ) -> AppResult<Vec<Recipe>> {
        let limit_param = predicate.next_placeholder();
        let offset_param = limit_param + 1;
        let sql = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes r {} {PAGE_ORDER} LIMIT ${limit_param} OFFSET ${offset_param}",
            predicate.where_sql()
        );
        debug!(
            sql = %sql,
            bindings = ?predicate.bindings(),
            limit = page.effective_limit(),
            offset = page.offset(),
            "Fetching recipe page"
        );

        let rows = bind_predicate(sqlx::query(&sql), predicate)
            .bind(page.effective_limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Get a recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Recipe>> {
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe {id}: {e}")))?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    /// Number of stored recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_all(&self) -> AppResult<i64> {
        self.count(&Predicate::match_all()).await
    }

    /// Insert one recipe and return its assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is invalid or the insert fails
    pub async fn insert(&self, recipe: &NewRecipe) -> AppResult<i64> {
        recipe.validate()?;
        let result = bind_new_recipe(sqlx::query(INSERT_RECIPE), recipe)?
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;
        Ok(result.last_insert_rowid())
    }

    /// Insert many recipes in a single transaction
    ///
    /// Either every recipe is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns an error if any recipe is invalid or any insert fails
    pub async fn insert_batch(&self, recipes: &[NewRecipe]) -> AppResult<u64> {
        for recipe in recipes {
            recipe.validate()?;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let mut inserted = 0;
        for recipe in recipes {
            let result = bind_new_recipe(sqlx::query(INSERT_RECIPE), recipe)?
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;
            inserted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recipes: {e}")))?;

        Ok(inserted)
    }
}

/// Bind the predicate parameters in placeholder order
fn bind_predicate<'q>(query: SqliteQuery<'q>, predicate: &Predicate) -> SqliteQuery<'q> {
    predicate
        .bindings()
        .into_iter()
        .fold(query, |query, binding| match binding.value {
            SqlValue::Text(text) => query.bind(text),
            SqlValue::Real(real) => query.bind(real),
            SqlValue::Integer(integer) => query.bind(integer),
        })
}

fn bind_new_recipe<'q>(query: SqliteQuery<'q>, recipe: &NewRecipe) -> AppResult<SqliteQuery<'q>> {
    let nutrients = recipe
        .nutrients
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    Ok(query
        .bind(recipe.cuisine.clone())
        .bind(recipe.title.clone())
        .bind(recipe.rating)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.total_time)
        .bind(recipe.description.clone())
        .bind(recipe.url.clone())
        .bind(recipe.ingredients.clone())
        .bind(recipe.instructions.clone())
        .bind(nutrients)
        .bind(recipe.serves.clone())
        .bind(recipe.title.to_lowercase())
        .bind(recipe.cuisine.as_deref().map(str::to_lowercase)))
}

/// Convert a database row to a `Recipe`
///
/// Unreadable nutrients are logged and surfaced as `None` so a single bad row
/// does not fail a whole page.
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let id: i64 = row.try_get("id")?;
    let nutrients_json: Option<String> = row.try_get("nutrients")?;
    let nutrients = nutrients_json.and_then(|text| {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => nutrients_from_json(value),
            Err(e) => {
                warn!(recipe_id = id, error = %e, "Ignoring unreadable nutrients");
                None
            }
        }
    });

    Ok(Recipe {
        id,
        cuisine: row.try_get("cuisine")?,
        title: row.try_get("title")?,
        rating: row.try_get("rating")?,
        prep_time: row.try_get("prep_time")?,
        cook_time: row.try_get("cook_time")?,
        total_time: row.try_get("total_time")?,
        description: row.try_get("description")?,
        url: row.try_get("url")?,
        ingredients: row.try_get("ingredients")?,
        instructions: row.try_get("instructions")?,
        nutrients,
        serves: row.try_get("serves")?,
        calories_num: row.try_get("calories_num")?,
    })
}

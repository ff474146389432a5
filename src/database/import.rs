// ABOUTME: Bulk importer turning a JSON document of raw recipe objects into stored rows
// ABOUTME: Lenient per-field conversion with warnings; one transaction for the whole batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::RecipesManager;
use crate::constants::import::PROGRESS_LOG_INTERVAL;
use crate::errors::{AppError, AppResult};
use crate::models::{nutrients_from_json, NewRecipe};

/// Outcome of an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Raw records read from the document
    pub processed: usize,
    /// Records stored
    pub imported: usize,
    /// Records rejected by validation
    pub skipped: usize,
    /// True when the table already held rows and nothing was read
    pub already_populated: bool,
}

/// Imports raw recipe documents into the recipe table
pub struct RecipeImporter {
    recipes: RecipesManager,
}

impl RecipeImporter {
    /// Create an importer writing through `recipes`
    #[must_use]
    pub const fn new(recipes: RecipesManager) -> Self {
        Self { recipes }
    }

    /// Read and import a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the insert fails
    pub async fn import_file(&self, path: &Path, force: bool) -> AppResult<ImportSummary> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::internal(format!("Failed to read {}: {e}", path.display())).with_source(e)
        })?;
        let document: Value = serde_json::from_str(&contents)?;
        self.import_document(&document, force).await
    }

    /// Import every value of a JSON object as a raw recipe (keys are ignored)
    ///
    /// Does nothing when recipes are already stored unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not an object or storage fails
    pub async fn import_document(&self, document: &Value, force: bool) -> AppResult<ImportSummary> {
        if !force {
            let existing = self.recipes.count_all().await?;
            if existing > 0 {
                info!(existing, "Recipes already in database, skipping import");
                return Ok(ImportSummary {
                    already_populated: true,
                    ..ImportSummary::default()
                });
            }
        }

        let Value::Object(records) = document else {
            return Err(AppError::invalid_input(
                "Recipe document must be a JSON object of recipe records",
            ));
        };

        info!(records = records.len(), "Starting recipe data import");

        let mut summary = ImportSummary::default();
        let mut batch = Vec::with_capacity(records.len());
        for (key, raw) in records {
            summary.processed += 1;

            let Value::Object(raw) = raw else {
                warn!(key = %key, "Skipping recipe record that is not an object");
                summary.skipped += 1;
                continue;
            };
            let recipe = map_raw_recipe(raw);
            match recipe.validate() {
                Ok(()) => batch.push(recipe),
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to process recipe");
                    summary.skipped += 1;
                }
            }

            if summary.processed % PROGRESS_LOG_INTERVAL == 0 {
                info!(processed = summary.processed, "Processed recipes");
            }
        }

        self.recipes.insert_batch(&batch).await?;
        summary.imported = batch.len();

        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "Successfully imported recipes"
        );
        Ok(summary)
    }
}

/// Map one raw record onto the insert shape
///
/// Unconvertible numeric fields are logged and left empty; the result still
/// needs [`NewRecipe::validate`].
#[must_use]
pub fn map_raw_recipe(raw: &Map<String, Value>) -> NewRecipe {
    NewRecipe {
        title: text_field(raw, "title").unwrap_or_default(),
        cuisine: text_field(raw, "cuisine"),
        rating: real_field(raw, "rating"),
        prep_time: integer_field(raw, "prep_time"),
        cook_time: integer_field(raw, "cook_time"),
        total_time: integer_field(raw, "total_time"),
        description: text_field(raw, "description"),
        url: text_field(raw, "URL"),
        ingredients: serialized_field(raw, "ingredients"),
        instructions: serialized_field(raw, "instructions"),
        nutrients: raw
            .get("nutrients")
            .filter(|value| value.is_object())
            .cloned()
            .and_then(nutrients_from_json),
        serves: raw.get("serves").and_then(display_value),
    }
}

fn present<'a>(raw: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !value.is_null())
}

fn text_field(raw: &Map<String, Value>, field: &str) -> Option<String> {
    present(raw, field).and_then(Value::as_str).map(str::to_owned)
}

fn real_field(raw: &Map<String, Value>, field: &str) -> Option<f64> {
    let value = present(raw, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite());
    if parsed.is_none() {
        warn!(field, value = %value, "Invalid numeric value");
    }
    parsed
}

fn integer_field(raw: &Map<String, Value>, field: &str) -> Option<i64> {
    let value = present(raw, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        warn!(field, value = %value, "Invalid integer value");
    }
    parsed
}

fn serialized_field(raw: &Map<String, Value>, field: &str) -> String {
    present(raw, field).map(Value::to_string).unwrap_or_default()
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientValue;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_maps_complete_record() {
        let recipe = map_raw_recipe(&raw(json!({
            "title": "Sweet Potato Pie",
            "cuisine": "Southern Recipes",
            "rating": 4.8,
            "prep_time": 15,
            "cook_time": "100",
            "total_time": 115,
            "description": "Shared from a Southern recipe",
            "URL": "https://example.com/pie",
            "ingredients": ["1 sweet potato", "1 pie crust"],
            "instructions": ["Bake"],
            "nutrients": {"calories": "389 kcal", "fatContent": "21 g"},
            "serves": 8
        })));

        assert_eq!(recipe.title, "Sweet Potato Pie");
        assert_eq!(recipe.rating, Some(4.8));
        assert_eq!(recipe.cook_time, Some(100));
        assert_eq!(recipe.url.as_deref(), Some("https://example.com/pie"));
        assert_eq!(recipe.ingredients, r#"["1 sweet potato","1 pie crust"]"#);
        assert_eq!(recipe.serves.as_deref(), Some("8"));
        let nutrients = recipe.nutrients.unwrap();
        assert_eq!(
            nutrients.get("calories"),
            Some(&NutrientValue::Text("389 kcal".to_owned()))
        );
        assert!(map_raw_recipe(&raw(json!({"title": "x"}))).validate().is_err());
    }

    #[test]
    fn test_invalid_numbers_are_left_empty() {
        let recipe = map_raw_recipe(&raw(json!({
            "title": "Soup",
            "rating": "great",
            "prep_time": 12.5,
            "total_time": null,
            "ingredients": ["water"],
            "instructions": ["boil"]
        })));

        assert_eq!(recipe.rating, None);
        assert_eq!(recipe.prep_time, None);
        assert_eq!(recipe.total_time, None);
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_non_object_nutrients_dropped() {
        let recipe = map_raw_recipe(&raw(json!({
            "title": "Salad",
            "nutrients": "lots",
            "serves": "2 servings"
        })));

        assert!(recipe.nutrients.is_none());
        assert_eq!(recipe.serves.as_deref(), Some("2 servings"));
        assert!(recipe.ingredients.is_empty());
    }
}

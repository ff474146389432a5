// ABOUTME: Recipe record, its get-by-id projection, and the insert shape used by import
// ABOUTME: Enforces the persisted-record invariants before rows reach storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Nutrients;
use crate::constants::limits::{MAX_CUISINE_LEN, MAX_SERVES_LEN, MAX_TITLE_LEN, MAX_URL_LEN};
use crate::errors::{AppError, AppResult, ErrorCode};

/// A stored recipe row
///
/// `calories_num` is computed by storage from `nutrients.calories` and is
/// never written by application code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Storage-assigned identifier
    pub id: i64,
    /// Cuisine name
    pub cuisine: Option<String>,
    /// Recipe title
    pub title: String,
    /// Average user rating
    pub rating: Option<f64>,
    /// Preparation time
    pub prep_time: Option<i64>,
    /// Cooking time
    pub cook_time: Option<i64>,
    /// Total time
    pub total_time: Option<i64>,
    /// Long description
    pub description: Option<String>,
    /// Source URL
    pub url: Option<String>,
    /// Ingredients as serialized JSON text
    pub ingredients: String,
    /// Instructions as serialized JSON text
    pub instructions: String,
    /// Nutrient mapping
    pub nutrients: Option<Nutrients>,
    /// Serving description (e.g. "4 servings")
    pub serves: Option<String>,
    /// Calories derived from the nutrients by storage
    #[serde(rename = "caloriesNum")]
    pub calories_num: Option<i64>,
}

/// Projection returned by the get-by-id operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Identifier
    pub id: i64,
    /// Title
    pub title: String,
    /// Cuisine
    pub cuisine: Option<String>,
    /// Rating
    pub rating: Option<f64>,
    /// Preparation time
    pub prep_time: Option<i64>,
    /// Cooking time
    pub cook_time: Option<i64>,
    /// Total time
    pub total_time: Option<i64>,
    /// Description
    pub description: Option<String>,
    /// Nutrients
    pub nutrients: Option<Nutrients>,
    /// Serving description
    pub serves: Option<String>,
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            cuisine: recipe.cuisine,
            rating: recipe.rating,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            total_time: recipe.total_time,
            description: recipe.description,
            nutrients: recipe.nutrients,
            serves: recipe.serves,
        }
    }
}

/// A recipe about to be inserted (no id, no derived calories)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Title
    pub title: String,
    /// Cuisine
    pub cuisine: Option<String>,
    /// Rating
    pub rating: Option<f64>,
    /// Preparation time
    pub prep_time: Option<i64>,
    /// Cooking time
    pub cook_time: Option<i64>,
    /// Total time
    pub total_time: Option<i64>,
    /// Description
    pub description: Option<String>,
    /// Source URL
    pub url: Option<String>,
    /// Ingredients as serialized JSON text
    pub ingredients: String,
    /// Instructions as serialized JSON text
    pub instructions: String,
    /// Nutrient mapping
    pub nutrients: Option<Nutrients>,
    /// Serving description
    pub serves: Option<String>,
}

impl NewRecipe {
    /// Check the invariants of a persisted recipe
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank title, ingredients, or
    /// instructions, and `ValueOutOfRange` for over-long text or negative
    /// numbers.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Title is required",
            ));
        }
        if self.ingredients.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Ingredients are required",
            ));
        }
        if self.instructions.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Instructions are required",
            ));
        }

        check_len("Title", Some(&self.title), MAX_TITLE_LEN)?;
        check_len("Cuisine", self.cuisine.as_deref(), MAX_CUISINE_LEN)?;
        check_len("Serves", self.serves.as_deref(), MAX_SERVES_LEN)?;
        check_len("URL", self.url.as_deref(), MAX_URL_LEN)?;

        if self.rating.is_some_and(|r| r < 0.0 || !r.is_finite()) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "Rating must be a positive number or zero",
            ));
        }
        for (name, value) in [
            ("Prep time", self.prep_time),
            ("Cook time", self.cook_time),
            ("Total time", self.total_time),
        ] {
            if value.is_some_and(|v| v < 0) {
                return Err(AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("{name} must be a positive number or zero"),
                ));
            }
        }

        Ok(())
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be less than {max} characters"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewRecipe {
        NewRecipe {
            title: "Sweet Potato Pie".to_owned(),
            ingredients: r#"["1 sweet potato"]"#.to_owned(),
            instructions: r#"["Bake it"]"#.to_owned(),
            ..NewRecipe::default()
        }
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let recipe = NewRecipe {
            title: "   ".to_owned(),
            ..valid()
        };
        let err = recipe.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_negative_values_rejected() {
        let recipe = NewRecipe {
            rating: Some(-0.5),
            ..valid()
        };
        assert_eq!(recipe.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);

        let recipe = NewRecipe {
            total_time: Some(-1),
            ..valid()
        };
        assert_eq!(recipe.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_overlong_title_rejected() {
        let recipe = NewRecipe {
            title: "x".repeat(MAX_TITLE_LEN + 1),
            ..valid()
        };
        assert_eq!(recipe.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_detail_projection_drops_bulky_fields() {
        let recipe = Recipe {
            id: 7,
            cuisine: Some("Italian".to_owned()),
            title: "Risotto".to_owned(),
            rating: Some(4.5),
            prep_time: Some(10),
            cook_time: Some(30),
            total_time: Some(40),
            description: None,
            url: Some("https://example.com/risotto".to_owned()),
            ingredients: "[]".to_owned(),
            instructions: "[]".to_owned(),
            nutrients: None,
            serves: Some("4 servings".to_owned()),
            calories_num: Some(389),
        };
        let detail = RecipeDetail::from(recipe);
        let json = serde_json::to_value(&detail).unwrap_or_default();

        assert_eq!(json["id"], 7);
        assert_eq!(json["total_time"], 40);
        assert!(json.get("url").is_none());
        assert!(json.get("ingredients").is_none());
    }

    #[test]
    fn test_recipe_serializes_calories_in_camel_case() {
        let recipe = Recipe {
            id: 1,
            cuisine: None,
            title: "Toast".to_owned(),
            rating: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            description: None,
            url: None,
            ingredients: "[]".to_owned(),
            instructions: "[]".to_owned(),
            nutrients: None,
            serves: None,
            calories_num: Some(120),
        };
        let json = serde_json::to_value(&recipe).unwrap_or_default();
        assert_eq!(json["caloriesNum"], 120);
        assert!(json.get("calories_num").is_none());
    }
}

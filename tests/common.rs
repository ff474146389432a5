// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: In-memory database, recipe fixtures, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_catalog_server`

use std::sync::{Arc, Once};

use recipe_catalog_server::{
    config::environment::ServerConfig,
    database::Database,
    models::{NewRecipe, NutrientValue, Nutrients},
    resources::ServerResources,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::new(
        database,
        Arc::new(ServerConfig::default()),
    ))
}

/// A valid recipe with the fields the filters look at
pub fn recipe(
    title: &str,
    cuisine: Option<&str>,
    rating: Option<f64>,
    total_time: Option<i64>,
    calories: Option<&str>,
) -> NewRecipe {
    let nutrients = calories.map(|calories| {
        let mut nutrients = Nutrients::new();
        nutrients.insert(
            "calories".to_owned(),
            NutrientValue::Text(calories.to_owned()),
        );
        nutrients
    });

    NewRecipe {
        title: title.to_owned(),
        cuisine: cuisine.map(str::to_owned),
        rating,
        total_time,
        ingredients: r#"["salt"]"#.to_owned(),
        instructions: r#"["cook"]"#.to_owned(),
        nutrients,
        serves: Some("4 servings".to_owned()),
        ..NewRecipe::default()
    }
}

/// Sixteen recipes over four cuisines (ids 1..=16 in this order)
pub fn catalog_fixture() -> Vec<NewRecipe> {
    vec![
        recipe("Spaghetti Carbonara", Some("Italian"), Some(4.8), Some(30), Some("520 kcal")),
        recipe("Margherita Pizza", Some("italian"), Some(4.6), Some(45), Some("300 kcal")),
        recipe("Lasagna Bolognese", Some("ITALIAN"), Some(4.9), Some(120), Some("650 kcal")),
        recipe("Risotto ai Funghi", Some("Italian"), Some(4.5), Some(40), Some("410 kcal")),
        recipe("Tiramisu", Some("Italian"), Some(4.7), Some(20), None),
        recipe("Minestrone", Some("Italian"), Some(4.2), Some(50), Some("180 kcal")),
        recipe("Panna Cotta", Some("Italian"), Some(4.5), Some(15), Some("350 kcal")),
        recipe("Osso Buco", Some("Italian"), Some(4.6), Some(150), Some("720 kcal")),
        recipe("Bruschetta", Some("Italian"), Some(4.9), Some(10), Some("150 kcal")),
        recipe("Pesto Pasta", Some("Italian"), Some(4.5), Some(25), Some("480 kcal")),
        recipe("Chicken Tikka Masala", Some("Indian"), Some(4.7), Some(60), Some("560 kcal")),
        recipe("Dal Tadka", Some("Indian"), Some(3.9), Some(35), Some("250 kcal")),
        recipe("Pad Thai", Some("Thai"), Some(4.4), Some(30), Some("450 kcal")),
        recipe("Green Curry", Some("Thai"), None, Some(40), Some("390 kcal")),
        recipe("Mystery Stew", None, Some(2.5), None, Some("not listed")),
        recipe("100% Rye_Bread", Some("American"), Some(4.0), Some(240), Some("200")),
    ]
}

/// Database seeded with [`catalog_fixture`]
pub async fn create_seeded_database() -> Database {
    let database = create_test_database().await;
    database
        .recipes()
        .insert_batch(&catalog_fixture())
        .await
        .unwrap();
    database
}

// ABOUTME: Integration tests for bulk recipe import from JSON documents
// ABOUTME: Skip-when-populated, per-record validation, and derived calories after import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::io::Write;

use recipe_catalog_server::database::RecipeImporter;
use serde_json::json;
use tempfile::NamedTempFile;

fn document() -> serde_json::Value {
    json!({
        "0": {
            "title": "Sweet Potato Pie",
            "cuisine": "Southern Recipes",
            "rating": 4.8,
            "prep_time": 15,
            "cook_time": 100,
            "total_time": 115,
            "description": "Classic holiday pie",
            "URL": "https://example.com/sweet-potato-pie",
            "ingredients": ["1 sweet potato", "1 pie crust"],
            "instructions": ["Boil", "Bake"],
            "nutrients": {"calories": "389 kcal", "fatContent": "21 g"},
            "serves": "8 servings"
        },
        "1": {
            "title": "Quick Salad",
            "cuisine": "Southern Recipes",
            "rating": "NaN-ish",
            "total_time": "10",
            "ingredients": ["lettuce"],
            "instructions": ["Toss"],
            "serves": 2
        },
        "2": {
            "title": "",
            "ingredients": ["nothing"],
            "instructions": ["nothing"]
        },
        "3": "not a record"
    })
}

#[tokio::test]
async fn test_import_document() {
    let database = common::create_test_database().await;
    let importer = RecipeImporter::new(database.recipes());

    let summary = importer.import_document(&document(), false).await.unwrap();
    assert_eq!(summary.processed, 4);
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 2);
    assert!(!summary.already_populated);

    let recipes = database.recipes();
    assert_eq!(recipes.count_all().await.unwrap(), 2);

    let pie = recipes.get(1).await.unwrap().unwrap();
    assert_eq!(pie.title, "Sweet Potato Pie");
    assert_eq!(pie.calories_num, Some(389));
    assert_eq!(pie.url.as_deref(), Some("https://example.com/sweet-potato-pie"));
    assert_eq!(pie.instructions, r#"["Boil","Bake"]"#);

    let salad = recipes.get(2).await.unwrap().unwrap();
    assert_eq!(salad.rating, None);
    assert_eq!(salad.total_time, Some(10));
    assert_eq!(salad.serves.as_deref(), Some("2"));
    assert_eq!(salad.calories_num, None);
}

#[tokio::test]
async fn test_import_skipped_when_populated() {
    let database = common::create_seeded_database().await;
    let importer = RecipeImporter::new(database.recipes());

    let summary = importer.import_document(&document(), false).await.unwrap();
    assert!(summary.already_populated);
    assert_eq!(summary.imported, 0);
    assert_eq!(database.recipes().count_all().await.unwrap(), 16);

    let forced = importer.import_document(&document(), true).await.unwrap();
    assert_eq!(forced.imported, 2);
    assert_eq!(database.recipes().count_all().await.unwrap(), 18);
}

#[tokio::test]
async fn test_import_file() {
    let database = common::create_test_database().await;
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", document()).unwrap();

    let summary = RecipeImporter::new(database.recipes())
        .import_file(file.path(), false)
        .await
        .unwrap();
    assert_eq!(summary.imported, 2);
}

#[tokio::test]
async fn test_import_rejects_non_object_document() {
    let database = common::create_test_database().await;
    let importer = RecipeImporter::new(database.recipes());

    let error = importer
        .import_document(&json!([{"title": "x"}]), false)
        .await
        .unwrap_err();
    assert_eq!(error.http_status(), 400);
    assert_eq!(database.recipes().count_all().await.unwrap(), 0);
}

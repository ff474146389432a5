// ABOUTME: Recipe seeding utility for the recipe catalog
// ABOUTME: Imports a JSON document of raw recipe records into the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe seeder.
//!
//! Usage:
//! ```bash
//! # Import (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes -- --file ./data/US_recipes.json
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --file recipes.json --database-url sqlite:./data/recipes.db
//!
//! # Import even if recipes already exist
//! cargo run --bin seed-recipes -- --file recipes.json --force
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_catalog_server::{
    constants::{defaults, env_config},
    database::{Database, RecipeImporter},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Recipe Catalog Seeder",
    long_about = "Import a JSON object of raw recipe records into the recipe catalog"
)]
struct SeedArgs {
    /// JSON document to import
    #[arg(long, short = 'f')]
    file: PathBuf,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Import even if recipes already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Recipe Catalog Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var(env_config::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url)
        .await
        .context("Failed to open recipe database")?;

    let summary = RecipeImporter::new(database.recipes())
        .import_file(&args.file, args.force)
        .await
        .with_context(|| format!("Failed to import {}", args.file.display()))?;

    if summary.already_populated {
        info!("Recipes already present. Use --force to import anyway.");
    } else {
        info!("=== Seeding Complete ===");
        info!(
            "Processed {} records: {} imported, {} skipped",
            summary.processed, summary.imported, summary.skipped
        );
    }

    database.close().await;
    Ok(())
}

// ABOUTME: SQLite connection pool and schema bootstrap for the recipe catalog
// ABOUTME: Hands out the recipe manager used by search, lookup, statistics, and import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database
//!
//! A single `recipes` table backs every read path. [`Database::migrate`] creates
//! it idempotently together with its indexes; there is no versioned migration
//! history.
//!
//! `title_lower` and `cuisine_lower` hold Unicode-lowercased copies written on
//! insert. `SQLite`'s `LOWER()` only folds ASCII, so case-insensitive filters
//! compare against these columns instead.

/// Bulk import of raw recipe documents
pub mod import;
/// Search, page and single-row reads plus inserts
pub mod recipes;
/// Catalog-wide aggregate queries
pub mod statistics;

pub use import::{ImportSummary, RecipeImporter};
pub use recipes::RecipesManager;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::database::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};

const CREATE_RECIPES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cuisine TEXT,
    title TEXT NOT NULL,
    rating REAL,
    prep_time INTEGER,
    cook_time INTEGER,
    total_time INTEGER,
    description TEXT,
    url TEXT,
    ingredients TEXT NOT NULL,
    instructions TEXT NOT NULL,
    nutrients TEXT,
    serves TEXT,
    title_lower TEXT NOT NULL,
    cuisine_lower TEXT,
    calories_num INTEGER GENERATED ALWAYS AS (
        CASE
            WHEN json_valid(nutrients)
                AND CAST(json_extract(nutrients, '$.calories') AS TEXT) GLOB '[0-9]*'
            THEN CAST(json_extract(nutrients, '$.calories') AS INTEGER)
        END
    ) VIRTUAL
)
";

const CREATE_RECIPE_INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_recipes_rating ON recipes(rating)",
    "CREATE INDEX IF NOT EXISTS idx_recipes_cuisine ON recipes(cuisine)",
    "CREATE INDEX IF NOT EXISTS idx_recipes_cuisine_lower ON recipes(cuisine_lower)",
    "CREATE INDEX IF NOT EXISTS idx_recipes_total_time ON recipes(total_time)",
];

/// Pooled access to the recipe store
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using default pool settings and apply the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or the
    /// schema cannot be created
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let config = DatabaseConfig {
            url: DatabaseUrl::parse_url(database_url)?,
            ..DatabaseConfig::default()
        };
        Self::connect(&config).await
    }

    /// Connect according to `config`, applying the schema when `auto_migrate`
    /// is set
    ///
    /// In-memory databases are pinned to a single long-lived connection so every
    /// query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or the schema cannot be created
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if let Some(parent) = config.url.file_path().and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        info!(url = %config.url, "Database connection pool ready");

        let db = Self { pool };
        if config.auto_migrate {
            db.migrate().await?;
        }
        Ok(db)
    }

    /// Wrap an existing pool without touching the schema
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Recipe operations on this pool
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// Create the recipe table and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(CREATE_RECIPES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        for statement in CREATE_RECIPE_INDEXES {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to create index: {e}")))?;
        }

        debug!("Recipe schema is up to date");
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

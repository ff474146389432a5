// ABOUTME: Main library entry point for the recipe catalog server
// ABOUTME: Filtered, paginated recipe search and cached catalog statistics over SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Catalog Server
//!
//! A read-mostly HTTP API over a catalog of recipes.
//!
//! ## Architecture
//!
//! - **Filters**: parse comparison expressions (`>=4.5`, `<=30`) and build one
//!   typed predicate shared by the count and page queries
//! - **Database**: `SQLite` pool, schema bootstrap, query executor, aggregates, import
//! - **Services**: protocol-agnostic operations with opaque failure mapping
//! - **Cache**: process-scoped statistics snapshot with explicit invalidation
//! - **Routes**: thin axum handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_catalog_server::database::Database;
//! use recipe_catalog_server::filters::{FilterRequest, PredicateBuilder};
//! use recipe_catalog_server::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let database = Database::new("sqlite::memory:").await?;
//!     let request = FilterRequest {
//!         cuisine: Some("italian".to_owned()),
//!         rating: Some(">=4.5".to_owned()),
//!         ..FilterRequest::default()
//!     };
//!     let predicate = PredicateBuilder::from_request(&request);
//!     let page = database.recipes().search(&predicate, &request.page_request()).await?;
//!     println!("{} matching recipes", page.total);
//!     Ok(())
//! }
//! ```

/// Process-scoped caches
pub mod cache;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Connection pool, schema, queries, and import
pub mod database;

/// Error types
pub mod errors;

/// Filter expression parsing and predicate building
pub mod filters;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain models
pub mod models;

/// Page arithmetic
pub mod pagination;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Server assembly and serve loop
pub mod server;

/// Domain services
pub mod services;

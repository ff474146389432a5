// ABOUTME: HTTP server binary for the recipe catalog API
// ABOUTME: Loads configuration, initializes logging, imports seed data, and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog Server Binary
//!
//! ```bash
//! # Serve with defaults (127.0.0.1:8080, sqlite:./data/recipes.db)
//! cargo run --bin recipe-catalog-server
//!
//! # Override port and database
//! cargo run --bin recipe-catalog-server -- --http-port 9000 --database-url sqlite::memory:
//! ```

use anyhow::Result;
use clap::Parser;
use recipe_catalog_server::{
    config::{environment::ServerConfig, DatabaseUrl},
    logging, server,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe Catalog API - filtered recipe search and catalog statistics")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }

    logging::init_from_env()?;
    info!("Starting Recipe Catalog API");
    info!("{}", config.summary());

    let resources = server::bootstrap(config).await?;

    info!("Endpoints:");
    info!("  GET    /health");
    info!("  GET    /api/recipes?page&limit");
    info!("  GET    /api/recipes/search?title&cuisine&rating&total_time&calories&page&limit");
    info!("  GET    /api/recipes/stats");
    info!("  DELETE /api/recipes/stats/cache");
    info!("  GET    /api/recipes/:id");

    server::run(resources).await
}

// ABOUTME: Application constants organized by domain
// ABOUTME: Pagination defaults, field limits, cache, environment keys, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache-related constants
pub mod cache;

/// Pagination defaults shared by listing and search
pub mod pagination {
    /// Page used when none (or a value below 1) is requested
    pub const DEFAULT_PAGE: i64 = 1;

    /// Page size used when none (or a value below 1) is requested
    pub const DEFAULT_LIMIT: i64 = 10;
}

/// Column length and value limits enforced on insert
pub mod limits {
    /// Maximum title length in characters
    pub const MAX_TITLE_LEN: usize = 500;

    /// Maximum cuisine length in characters
    pub const MAX_CUISINE_LEN: usize = 255;

    /// Maximum serves length in characters
    pub const MAX_SERVES_LEN: usize = 255;

    /// Maximum url length in characters
    pub const MAX_URL_LEN: usize = 1000;
}

/// Rounding precision for catalog statistics
pub mod statistics {
    /// Decimal places kept for the average rating
    pub const AVERAGE_RATING_DECIMALS: i32 = 2;
}

/// Import progress reporting
pub mod import {
    /// Log progress every N processed records
    pub const PROGRESS_LOG_INTERVAL: usize = 1000;
}

/// Default values for server configuration
pub mod defaults {
    /// Default HTTP bind host
    pub const HTTP_HOST: &str = "127.0.0.1";

    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";

    /// Default connection pool size
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;

    /// Default per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Default CORS origin policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// HTTP bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// HTTP bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Create schema on startup
    pub const DATABASE_AUTO_MIGRATE: &str = "DATABASE_AUTO_MIGRATE";
    /// Connection pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Statistics cache lifetime
    pub const STATS_CACHE_TTL_SECS: &str = "STATS_CACHE_TTL_SECS";
    /// Startup import file
    pub const RECIPES_IMPORT_PATH: &str = "RECIPES_IMPORT_PATH";
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Service name
    pub const RECIPE_CATALOG_SERVER: &str = "recipe-catalog-server";
}

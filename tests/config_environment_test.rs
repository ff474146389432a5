// ABOUTME: Tests for environment-driven server and database configuration
// ABOUTME: Defaults, overrides, and invalid values; serialized because they mutate the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use recipe_catalog_server::{
    config::{environment::ServerConfig, DatabaseUrl},
    constants::env_config,
    errors::ErrorCode,
};
use serial_test::serial;

const ALL_VARS: [&str; 9] = [
    env_config::HTTP_HOST,
    env_config::HTTP_PORT,
    env_config::DATABASE_URL,
    env_config::DATABASE_AUTO_MIGRATE,
    env_config::DATABASE_MAX_CONNECTIONS,
    env_config::CORS_ALLOWED_ORIGINS,
    env_config::REQUEST_TIMEOUT_SECS,
    env_config::STATS_CACHE_TTL_SECS,
    env_config::RECIPES_IMPORT_PATH,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/recipes.db")
        }
    );
    assert!(config.database.auto_migrate);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.cors_allowed_origins, "*");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert!(config.stats_cache_ttl.is_none());
    assert!(config.import_path.is_none());
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    env::set_var(env_config::HTTP_PORT, "9090");
    env::set_var(env_config::DATABASE_URL, "sqlite::memory:");
    env::set_var(env_config::STATS_CACHE_TTL_SECS, "60");
    env::set_var(env_config::RECIPES_IMPORT_PATH, "/srv/recipes.json");
    env::set_var(env_config::CORS_ALLOWED_ORIGINS, "https://a.example,https://b.example");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert!(config.database.url.is_memory());
    assert_eq!(config.stats_cache_ttl, Some(Duration::from_secs(60)));
    assert_eq!(config.import_path, Some(PathBuf::from("/srv/recipes.json")));
    assert_eq!(config.cors_allowed_origins, "https://a.example,https://b.example");
}

#[test]
#[serial]
fn test_zero_ttl_means_no_expiry() {
    clear_env();
    env::set_var(env_config::STATS_CACHE_TTL_SECS, "0");
    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.stats_cache_ttl.is_none());
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    for (var, value) in [
        (env_config::HTTP_PORT, "eighty"),
        (env_config::DATABASE_MAX_CONNECTIONS, "0"),
        (env_config::DATABASE_AUTO_MIGRATE, "maybe"),
        (env_config::REQUEST_TIMEOUT_SECS, "0"),
        (env_config::STATS_CACHE_TTL_SECS, "-5"),
        (env_config::DATABASE_URL, "postgres://localhost/recipes"),
    ] {
        clear_env();
        env::set_var(var, value);
        let error = ServerConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{var}={value}");
    }
    clear_env();
}

// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: HTTP binding, CORS origins, request timeout, statistics cache TTL, and startup import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::database::DatabaseConfig;
use crate::constants::cache::TTL_DISABLED_SECS;
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind host
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Allowed CORS origins, `*` for any
    pub cors_allowed_origins: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Statistics cache lifetime, `None` to keep until invalidated
    pub stats_cache_ttl: Option<Duration>,
    /// JSON document imported at startup when the catalog is empty
    pub import_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            database: DatabaseConfig::default(),
            cors_allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            stats_cache_ttl: None,
            import_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if any variable holds an unparsable value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let stats_cache_ttl = env::var(env_config::STATS_CACHE_TTL_SECS)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_value::<u64>(env_config::STATS_CACHE_TTL_SECS, &v))
            .transpose()?
            .filter(|secs| *secs != TTL_DISABLED_SECS)
            .map(Duration::from_secs);

        let import_path = env::var(env_config::RECIPES_IMPORT_PATH)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            http_host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST),
            http_port: parse_env(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            database: DatabaseConfig::from_env()?,
            cors_allowed_origins: env_var_or(
                env_config::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            ),
            request_timeout: Duration::from_secs(parse_env(
                env_config::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
            )?),
            stats_cache_ttl,
            import_path,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but make no sense
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for a zero request timeout or blank host
    pub fn validate(&self) -> AppResult<()> {
        if self.request_timeout.is_zero() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be greater than zero", env_config::REQUEST_TIMEOUT_SECS),
            ));
        }
        if self.http_host.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must not be empty", env_config::HTTP_HOST),
            ));
        }
        Ok(())
    }

    /// `host:port` the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http={} database={} max_connections={} cors={} timeout={}s stats_ttl={}",
            self.bind_address(),
            self.database.url,
            self.database.max_connections,
            self.cors_allowed_origins,
            self.request_timeout.as_secs(),
            self.stats_cache_ttl
                .map_or_else(|| "none".to_owned(), |ttl| format!("{}s", ttl.as_secs())),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {key} value '{value}': {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("HTTP_PORT", " 9000 ").unwrap(), 9000);
        let err = parse_value::<u16>("HTTP_PORT", "eighty").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("HTTP_PORT"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ServerConfig {
            request_timeout: Duration::ZERO,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:8080");
    }
}

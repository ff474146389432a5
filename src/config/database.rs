// ABOUTME: Database configuration types for the SQLite recipe store
// ABOUTME: Parses DATABASE_URL and pool settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:` and bare file paths.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or non-SQLite URL schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "Database URL must not be empty",
            ));
        }
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            if path_str == ":memory:" {
                return Ok(Self::Memory);
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            });
        }
        if s.contains("://") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unsupported database URL scheme: {s}"),
            ));
        }
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// File backing the database, if any
    #[must_use]
    pub const fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Self::SQLite { path } => Some(path),
            Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/recipes.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection and management configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Create the schema on startup
    pub auto_migrate: bool,
    /// Maximum pooled connections (forced to 1 for in-memory databases)
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            auto_migrate: true,
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for an in-memory database with the schema applied
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
            max_connections: 1,
        }
    }

    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if database environment variables are invalid
    pub fn from_env() -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(&env_var_or(
            env_config::DATABASE_URL,
            defaults::DATABASE_URL,
        ))?;
        let auto_migrate = env_var_or(env_config::DATABASE_AUTO_MIGRATE, "true")
            .parse()
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("Invalid {} value: {e}", env_config::DATABASE_AUTO_MIGRATE),
                )
            })?;
        let max_connections: u32 = env_var_or(
            env_config::DATABASE_MAX_CONNECTIONS,
            &defaults::DATABASE_MAX_CONNECTIONS.to_string(),
        )
        .parse()
        .map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {} value: {e}", env_config::DATABASE_MAX_CONNECTIONS),
            )
        })?;
        if max_connections == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be at least 1", env_config::DATABASE_MAX_CONNECTIONS),
            ));
        }

        Ok(Self {
            url,
            auto_migrate,
            max_connections,
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sqlite_file() {
        let url = DatabaseUrl::parse_url("sqlite:./data/recipes.db").unwrap();
        assert_eq!(
            url,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/recipes.db")
            }
        );
        assert_eq!(url.to_connection_string(), "sqlite:./data/recipes.db");
    }

    #[test]
    fn test_parse_memory() {
        let url = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert!(url.is_memory());
        assert!(url.file_path().is_none());
    }

    #[test]
    fn test_parse_bare_path() {
        let url = DatabaseUrl::parse_url("/tmp/recipes.db").unwrap();
        assert_eq!(url.file_path(), Some(&PathBuf::from("/tmp/recipes.db")));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = DatabaseUrl::parse_url("postgres://localhost/recipes").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(DatabaseUrl::parse_url("   ").is_err());
    }
}

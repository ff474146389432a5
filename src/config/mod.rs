// ABOUTME: Configuration management for the recipe catalog server
// ABOUTME: Environment-driven server, database, and cache settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: HTTP binding, CORS, timeouts, cache lifetime, startup import
//! - **Database**: SQLite location and pool settings

/// Database location and pool configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::ServerConfig;

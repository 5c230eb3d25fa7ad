// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, configuration, and application builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

//! Shared test utilities for fitlog integration tests

use axum::Router;
use fitlog::{
    config::environment::{
        CorsConfig, DatabaseConfig, DatabaseUrl, Environment, HttpConfig, LogLevel, ServerConfig,
    },
    database::Database,
    server::{HttpServer, ServerResources},
};
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup - isolated in-memory instance
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Configuration for tests - in-memory database, wildcard CORS
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::default(),
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        http: HttpConfig {
            static_dir: PathBuf::from("./static"),
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Build a full application router over a fresh in-memory database
pub async fn create_test_app() -> Router {
    let database = create_test_database().await;
    let resources = Arc::new(ServerResources::new(database, test_config()));
    HttpServer::new(resources).router()
}

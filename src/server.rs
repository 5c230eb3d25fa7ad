// ABOUTME: HTTP server assembly - router construction, middleware layers, and serving
// ABOUTME: Holds the shared ServerResources injected into every route handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! # HTTP Server
//!
//! Assembles the full router (entry CRUD, health, static assets) behind the
//! CORS, tracing, and request-id layers, and runs it on a TCP listener.
//!
//! [`ServerResources`] is the single dependency-injection point: the database
//! handle lives here and is passed in explicitly, never read from global
//! state, so tests can build a router over an isolated in-memory store.

use crate::{
    config::environment::ServerConfig,
    database::Database,
    middleware::cors::setup_cors,
    routes::{EntryRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::Router;
use http::header::HeaderName;
use std::sync::Arc;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

/// Shared resources injected into route handlers
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create the shared resource bundle
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// HTTP server for the fitlog API
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server over the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    #[must_use]
    pub fn router(&self) -> Router {
        let x_request_id = HeaderName::from_static("x-request-id");

        Router::new()
            .merge(EntryRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes(self.resources.clone()))
            .nest_service(
                "/static",
                ServeDir::new(&self.resources.config.http.static_dir),
            )
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
            .layer(setup_cors(&self.resources.config))
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails.
    pub async fn run(&self, port: u16) -> Result<()> {
        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("HTTP server listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}

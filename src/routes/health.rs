// ABOUTME: Health check endpoint for monitoring and orchestration
// ABOUTME: Probes the database and reports service status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! Health routes

use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health - report service and database status
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        match sqlx::query("SELECT 1").execute(resources.database.pool()).await {
            Ok(_) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ok",
                    "service": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                    "database": "connected",
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
                .into_response(),
            Err(e) => {
                error!("Health check database probe failed: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "unhealthy",
                        "database": "unavailable",
                    })),
                )
                    .into_response()
            }
        }
    }
}

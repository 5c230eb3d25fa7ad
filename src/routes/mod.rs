// ABOUTME: HTTP route handlers for the fitlog REST API
// ABOUTME: Groups the entry CRUD routes and the health endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! HTTP routes

/// CRUD routes for the three tracked record kinds
pub mod entries;

/// Liveness and readiness endpoint
pub mod health;

pub use entries::EntryRoutes;
pub use health::HealthRoutes;

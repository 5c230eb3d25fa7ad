// ABOUTME: Main library entry point for the fitlog fitness tracking backend
// ABOUTME: Provides REST CRUD for exercise, meal, and body-weight records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

#![deny(unsafe_code)]

//! # Fitlog
//!
//! A personal fitness-tracking backend exposing create/read/update/delete
//! operations over three independent record types — exercise sessions, meals,
//! and body-weight measurements — backed by SQLite.
//!
//! ## Architecture
//!
//! - **Models**: record shapes, request payloads, and pure field validators
//! - **Database**: connection management plus one generic entry store
//!   instantiated per record kind
//! - **Routes**: a uniform CRUD handler set per resource and a health probe
//! - **Server**: router assembly, middleware layers, and serving
//! - **Config**: environment-driven runtime configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlog::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Fitlog configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Database connection management and record storage
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Common data models for tracked records
pub mod models;

/// `HTTP` routes for the REST API
pub mod routes;

/// HTTP server assembly and shared resources
pub mod server;

// ABOUTME: Configuration management for the fitlog server
// ABOUTME: Exposes environment-driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! Configuration management

/// Environment-based configuration for deployment-specific settings
pub mod environment;

// ABOUTME: HTTP middleware for the fitlog server
// ABOUTME: Currently hosts the CORS layer configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! HTTP middleware

/// CORS layer configuration
pub mod cors;

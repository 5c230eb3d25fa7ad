// ABOUTME: Helper modules shared by integration tests
// ABOUTME: Re-exports the Axum HTTP testing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

#![allow(dead_code, clippy::expect_used)]

pub mod axum_test;

// ABOUTME: Route handlers for the entry REST API (exercises, meals, weights)
// ABOUTME: One generic handler set instantiated per record kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! Entry routes
//!
//! Each record kind exposes the same five operations:
//!
//! | Method | Path | Outcome |
//! |---|---|---|
//! | POST | `/{resource}` | 201 + stored record |
//! | GET | `/{resource}` | 200 + newest-first list |
//! | GET | `/{resource}/{id}` | 200 + record |
//! | PUT | `/{resource}/{id}` | 200 + updated record |
//! | DELETE | `/{resource}/{id}` | 200 + confirmation message |
//!
//! The handlers are generic over [`Entry`]; the router instantiates them for
//! exercises, meals, and weight entries. A malformed body is rejected with
//! 400 before validation, and validation runs before the store is touched —
//! for both create and full-replacement update.

use crate::{
    database::entries::{Entry, EntryStore},
    errors::AppError,
    models::{Exercise, Meal, WeightEntry},
    server::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Confirmation body returned by successful deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Entry routes handler
pub struct EntryRoutes;

impl EntryRoutes {
    /// Create the routes for all three record kinds
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .merge(Self::resource::<Exercise>())
            .merge(Self::resource::<Meal>())
            .merge(Self::resource::<WeightEntry>())
            .with_state(resources)
    }

    /// Build the uniform route set for one record kind
    fn resource<E: Entry>() -> Router<Arc<ServerResources>> {
        let collection = format!("/{}", E::TABLE);
        let item = format!("/{}/:id", E::TABLE);
        Router::new()
            .route(&collection, post(Self::handle_create::<E>))
            .route(&collection, get(Self::handle_list::<E>))
            .route(&item, get(Self::handle_get::<E>))
            .route(&item, put(Self::handle_update::<E>))
            .route(&item, delete(Self::handle_delete::<E>))
    }

    /// Get a store for the record kind from the shared pool
    fn store<E: Entry>(resources: &Arc<ServerResources>) -> EntryStore<E> {
        EntryStore::new(resources.database.pool().clone())
    }

    /// Parse an id path segment; anything that is not a stored id maps to
    /// not-found, matching the store's behavior for unknown ids
    fn parse_id<E: Entry>(raw: &str) -> Result<i64, AppError> {
        raw.parse().map_err(|_| AppError::not_found(E::DISPLAY))
    }

    /// Handle POST /{resource} - create a record
    async fn handle_create<E: Entry>(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<E::Payload>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(payload) =
            body.map_err(|_| AppError::invalid_format("Invalid request format"))?;
        E::validate(&payload)?;

        let record = Self::store::<E>(&resources).create(&payload).await?;
        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// Handle GET /{resource} - list records, newest first
    async fn handle_list<E: Entry>(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let records = Self::store::<E>(&resources).list().await?;
        Ok((StatusCode::OK, Json(records)).into_response())
    }

    /// Handle GET /{resource}/{id} - get a single record
    async fn handle_get<E: Entry>(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id::<E>(&raw_id)?;
        let record = Self::store::<E>(&resources)
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::DISPLAY))?;

        Ok((StatusCode::OK, Json(record)).into_response())
    }

    /// Handle PUT /{resource}/{id} - full-replacement update
    ///
    /// Existence is checked before the body is decoded, so an unknown id is
    /// 404 even when the body is malformed.
    async fn handle_update<E: Entry>(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
        body: Result<Json<E::Payload>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id::<E>(&raw_id)?;
        let store = Self::store::<E>(&resources);
        if store.get(id).await?.is_none() {
            return Err(AppError::not_found(E::DISPLAY));
        }

        let Json(payload) =
            body.map_err(|_| AppError::invalid_format("Invalid request format"))?;
        E::validate(&payload)?;

        let record = store
            .update(id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found(E::DISPLAY))?;

        Ok((StatusCode::OK, Json(record)).into_response())
    }

    /// Handle DELETE /{resource}/{id} - soft-delete a record
    async fn handle_delete<E: Entry>(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        E::check_delete_token(&raw_id)?;
        let id = Self::parse_id::<E>(&raw_id)?;

        let deleted = Self::store::<E>(&resources).delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(E::DISPLAY));
        }

        let response = MessageResponse {
            message: format!("{} deleted successfully", E::DISPLAY),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

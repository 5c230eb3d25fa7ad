// ABOUTME: Generic resource store for tracked entries over SQLite
// ABOUTME: One CRUD implementation parameterized by record kind via the Entry trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! # Resource Store
//!
//! The three record kinds share one CRUD contract, so storage is a single
//! generic [`EntryStore`] parameterized by the [`Entry`] capability rather
//! than three near-identical managers. The trait carries everything that is
//! kind-specific: table name, column list, message nouns, the pure validator,
//! and the row/bind mappings.
//!
//! Deletion is a soft delete: the row keeps its storage slot with `deleted_at`
//! set, and every read path filters it out. A deleted id is never reused
//! (AUTOINCREMENT) and never returns to the active state.

use crate::errors::{AppError, AppResult};
use crate::models::{
    Exercise, ExercisePayload, Meal, MealPayload, WeightEntry, WeightEntryPayload,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{
    sqlite::{SqliteArguments, SqliteRow},
    Row, SqlitePool,
};
use std::marker::PhantomData;
use tracing::error;

/// Query type bound to the SQLite backend
type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>;

/// Record-kind capability: everything the generic store needs to know about
/// one tracked entry kind.
pub trait Entry: Serialize + Sized + Send + Sync + Unpin + 'static {
    /// Caller-supplied fields for create and full-replacement update
    type Payload: DeserializeOwned + Serialize + Default + Send + Sync + 'static;

    /// Backing table name
    const TABLE: &'static str;
    /// Payload column names, in bind order
    const COLUMNS: &'static [&'static str];
    /// Lower-case singular noun for messages ("exercise")
    const SINGULAR: &'static str;
    /// Lower-case plural noun for messages ("exercises")
    const PLURAL: &'static str;
    /// Capitalized noun for messages ("Exercise")
    const DISPLAY: &'static str;

    /// Accept or reject a payload before any storage interaction
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the kind's field constraints fail.
    fn validate(payload: &Self::Payload) -> AppResult<()>;

    /// Bind the payload columns onto a query, in [`Self::COLUMNS`] order
    fn bind_payload<'q>(query: SqliteQuery<'q>, payload: &'q Self::Payload) -> SqliteQuery<'q>;

    /// Convert a database row to a stored record
    ///
    /// # Errors
    ///
    /// Returns an error if a stored timestamp cannot be parsed.
    fn from_row(row: &SqliteRow) -> AppResult<Self>;

    /// Guard applied to the raw id path segment before a delete
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for kinds that reject sentinel tokens.
    fn check_delete_token(_token: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Parse an RFC 3339 timestamp column
fn parse_timestamp(row: &SqliteRow, column: &str) -> AppResult<DateTime<Utc>> {
    let raw: String = row.get(column);
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime in {column}: {e}")))
}

impl Entry for Exercise {
    type Payload = ExercisePayload;

    const TABLE: &'static str = "exercises";
    const COLUMNS: &'static [&'static str] = &["date", "movement", "sets", "reps", "weight", "type"];
    const SINGULAR: &'static str = "exercise";
    const PLURAL: &'static str = "exercises";
    const DISPLAY: &'static str = "Exercise";

    fn validate(payload: &Self::Payload) -> AppResult<()> {
        payload.validate()
    }

    fn bind_payload<'q>(query: SqliteQuery<'q>, payload: &'q Self::Payload) -> SqliteQuery<'q> {
        query
            .bind(&payload.date)
            .bind(&payload.movement)
            .bind(payload.sets)
            .bind(payload.reps)
            .bind(payload.weight)
            .bind(&payload.kind)
    }

    fn from_row(row: &SqliteRow) -> AppResult<Self> {
        Ok(Self {
            id: row.get("id"),
            date: row.get("date"),
            movement: row.get("movement"),
            sets: row.get("sets"),
            reps: row.get("reps"),
            weight: row.get("weight"),
            kind: row.get("type"),
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }
}

impl Entry for Meal {
    type Payload = MealPayload;

    const TABLE: &'static str = "meals";
    const COLUMNS: &'static [&'static str] =
        &["date", "name", "carbs", "protein", "fats", "calories"];
    const SINGULAR: &'static str = "meal";
    const PLURAL: &'static str = "meals";
    const DISPLAY: &'static str = "Meal";

    fn validate(payload: &Self::Payload) -> AppResult<()> {
        payload.validate()
    }

    fn bind_payload<'q>(query: SqliteQuery<'q>, payload: &'q Self::Payload) -> SqliteQuery<'q> {
        query
            .bind(&payload.date)
            .bind(&payload.name)
            .bind(payload.carbs)
            .bind(payload.protein)
            .bind(payload.fats)
            .bind(payload.calories)
    }

    fn from_row(row: &SqliteRow) -> AppResult<Self> {
        Ok(Self {
            id: row.get("id"),
            date: row.get("date"),
            name: row.get("name"),
            carbs: row.get("carbs"),
            protein: row.get("protein"),
            fats: row.get("fats"),
            calories: row.get("calories"),
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }

    fn check_delete_token(token: &str) -> AppResult<()> {
        // Browser clients have been seen sending the literal string "undefined"
        if token.is_empty() || token == "undefined" {
            return Err(AppError::invalid_input(format!(
                "Invalid {} ID",
                Self::SINGULAR
            )));
        }
        Ok(())
    }
}

impl Entry for WeightEntry {
    type Payload = WeightEntryPayload;

    const TABLE: &'static str = "weights";
    const COLUMNS: &'static [&'static str] = &["date", "weight"];
    const SINGULAR: &'static str = "weight entry";
    const PLURAL: &'static str = "weight entries";
    const DISPLAY: &'static str = "Weight entry";

    fn validate(payload: &Self::Payload) -> AppResult<()> {
        payload.validate()
    }

    fn bind_payload<'q>(query: SqliteQuery<'q>, payload: &'q Self::Payload) -> SqliteQuery<'q> {
        query.bind(&payload.date).bind(payload.weight)
    }

    fn from_row(row: &SqliteRow) -> AppResult<Self> {
        Ok(Self {
            id: row.get("id"),
            date: row.get("date"),
            weight: row.get("weight"),
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }

    fn check_delete_token(token: &str) -> AppResult<()> {
        if token.is_empty() || token == "undefined" {
            return Err(AppError::invalid_input(format!(
                "Invalid {} ID",
                Self::SINGULAR
            )));
        }
        Ok(())
    }
}

/// Generic store over one record kind
///
/// The pool is injected at construction so tests can substitute an isolated
/// in-memory database per run.
pub struct EntryStore<E: Entry> {
    pool: SqlitePool,
    _kind: PhantomData<E>,
}

impl<E: Entry> EntryStore<E> {
    /// Create a new store over the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    fn select_columns() -> String {
        format!("id, {}, created_at, updated_at", E::COLUMNS.join(", "))
    }

    /// Persist a new record, assigning its id and timestamps
    ///
    /// The payload is assumed to be already validated; the store performs no
    /// semantic checks of its own.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert or the read-back fails.
    pub async fn create(&self, payload: &E::Payload) -> AppResult<E> {
        let now = Utc::now().to_rfc3339();
        let placeholders: Vec<String> = (1..=E::COLUMNS.len() + 2)
            .map(|i| format!("${i}"))
            .collect();
        let sql = format!(
            "INSERT INTO {} ({}, created_at, updated_at) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders.join(", "),
        );

        let result = E::bind_payload(sqlx::query(&sql), payload)
            .bind(&now)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database insert into {} failed: {e}", E::TABLE);
                AppError::database(format!("Failed to create {}", E::SINGULAR))
            })?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| AppError::database(format!("Failed to create {}", E::SINGULAR)))
    }

    /// List all non-deleted records, most recently created first
    ///
    /// # Errors
    ///
    /// Returns a database error if the select fails.
    pub async fn list(&self) -> AppResult<Vec<E>> {
        // Secondary id sort keeps newest-first deterministic for records
        // created within the same timestamp tick.
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY created_at DESC, id DESC",
            Self::select_columns(),
            E::TABLE,
        );

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database select from {} failed: {e}", E::TABLE);
                AppError::database(format!("Failed to fetch {}", E::PLURAL))
            })?;

        rows.iter().map(E::from_row).collect()
    }

    /// Get a non-deleted record by id
    ///
    /// # Errors
    ///
    /// Returns a database error if the select fails.
    pub async fn get(&self, id: i64) -> AppResult<Option<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            Self::select_columns(),
            E::TABLE,
        );

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Database select from {} failed: {e}", E::TABLE);
                AppError::database(format!("Failed to fetch {}", E::PLURAL))
            })?;

        row.map(|r| E::from_row(&r)).transpose()
    }

    /// Replace every caller-supplied field of an existing record
    ///
    /// Identity and creation timestamp are preserved; the update timestamp is
    /// refreshed. Returns `None` when no active record has this id.
    ///
    /// Read-modify-write: concurrent updates to the same id race with
    /// last-writer-wins semantics and no conflict detection.
    ///
    /// # Errors
    ///
    /// Returns a database error if a statement fails.
    pub async fn update(&self, id: i64, payload: &E::Payload) -> AppResult<Option<E>> {
        if self.get(id).await?.is_none() {
            return Ok(None);
        }

        let now = Utc::now().to_rfc3339();
        let assignments: Vec<String> = E::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect();
        let n = E::COLUMNS.len();
        let sql = format!(
            "UPDATE {} SET {}, updated_at = ${} WHERE id = ${} AND deleted_at IS NULL",
            E::TABLE,
            assignments.join(", "),
            n + 1,
            n + 2,
        );

        let result = E::bind_payload(sqlx::query(&sql), payload)
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database update of {} failed: {e}", E::TABLE);
                AppError::database(format!("Failed to update {}", E::SINGULAR))
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(id).await
    }

    /// Soft-delete a record; returns whether a row was affected
    ///
    /// A second delete of the same id affects zero rows, which callers report
    /// as not-found rather than silent success.
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let now = Utc::now().to_rfc3339();
        let sql = format!(
            "UPDATE {} SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
            E::TABLE,
        );

        let result = sqlx::query(&sql)
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database delete from {} failed: {e}", E::TABLE);
                AppError::database(format!("Failed to delete {}", E::SINGULAR))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

// ABOUTME: Database connection management and schema migrations
// ABOUTME: Owns the SQLite pool and the per-kind table definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! # Database Management
//!
//! Connection handling and schema setup for the fitlog backend. The
//! [`Database`] handle wraps a `SqlitePool` and is injected into every
//! consumer explicitly; nothing in the crate reaches for a global connection.

pub mod entries;

use crate::errors::{AppError, AppResult};
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database handle for record storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a table or index cannot be created.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_exercises().await?;
        self.migrate_meals().await?;
        self.migrate_weights().await?;
        Ok(())
    }

    async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL DEFAULT '',
                movement TEXT NOT NULL DEFAULT '',
                sets INTEGER NOT NULL DEFAULT 0,
                reps INTEGER NOT NULL DEFAULT 0,
                weight REAL NOT NULL DEFAULT 0,
                type TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercises_deleted_at ON exercises(deleted_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises index: {e}")))?;

        Ok(())
    }

    async fn migrate_meals(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL DEFAULT '',
                name TEXT NOT NULL DEFAULT '',
                carbs INTEGER NOT NULL DEFAULT 0,
                protein INTEGER NOT NULL DEFAULT 0,
                fats INTEGER NOT NULL DEFAULT 0,
                calories INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create meals table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_meals_deleted_at ON meals(deleted_at)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create meals index: {e}")))?;

        Ok(())
    }

    async fn migrate_weights(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weights (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL DEFAULT '',
                weight REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create weights table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_weights_deleted_at ON weights(deleted_at)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create weights index: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use sqlx::Row;

    async fn create_test_db() -> Database {
        // In-memory database, isolated per test run
        Database::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_migrate_creates_all_tables() {
        let db = create_test_db().await;

        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<String> = rows.iter().map(|r| r.get("name")).collect();
        assert!(names.contains(&"exercises".to_owned()));
        assert!(names.contains(&"meals".to_owned()));
        assert!(names.contains(&"weights".to_owned()));
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = create_test_db().await;
        db.migrate().await.unwrap();
        db.migrate().await.unwrap();
    }
}

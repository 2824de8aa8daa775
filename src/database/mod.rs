// ABOUTME: Database management for the Health Buddy record store
// ABOUTME: Owns the SQLite pool and creates the schema on first connection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! # Record Store
//!
//! `Database` wraps a `sqlx` SQLite pool. Every operation acquires its
//! connection from the pool for the duration of its statements and releases
//! it on every exit path. The (username, date) uniqueness of health and habit
//! rows is a logical invariant enforced by the upsert operations here, not a
//! hard schema constraint.

mod goals;
mod habits;
mod health_records;
mod users;

use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::{error, info};

use crate::errors::{AppError, AppResult};

/// Log a storage failure with its operation context, then wrap it.
///
/// Validation never reaches this path; only the persistence layer does, and
/// it is logged exactly once, here.
fn storage_error(operation: &str, e: &sqlx::Error) -> AppError {
    error!(operation, error = %e, "storage operation failed");
    AppError::database(format!("{operation} failed: {e}"))
}

/// Database manager for user, record, habit, and goal storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if necessary) the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the connection or schema creation fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await.map_err(|e| {
            AppError::database(format!("Failed to open database at {database_url}: {e}"))
        })?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database_url, "database ready");
        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create all tables and indexes.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_health_data().await?;
        self.migrate_daily_habits().await?;
        self.migrate_health_goals().await?;
        Ok(())
    }

    async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                salt TEXT NOT NULL,
                name TEXT NOT NULL DEFAULT '',
                age INTEGER NOT NULL DEFAULT 0,
                gender TEXT NOT NULL DEFAULT '',
                height REAL NOT NULL DEFAULT 0,
                target_weight REAL NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create users table: {e}")))?;

        Ok(())
    }

    async fn migrate_health_data(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL REFERENCES users(username),
                date TEXT NOT NULL,
                weight REAL NOT NULL,
                bmi REAL,
                steps INTEGER NOT NULL,
                blood_pressure TEXT NOT NULL,
                heart_rate INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create health_data table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_health_data_user_date ON health_data(username, date)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create health_data index: {e}")))?;

        Ok(())
    }

    async fn migrate_daily_habits(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS daily_habits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL REFERENCES users(username),
                date TEXT NOT NULL,
                water_intake INTEGER NOT NULL,
                diet TEXT NOT NULL,
                sleep_hours INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create daily_habits table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_daily_habits_user_date ON daily_habits(username, date)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create daily_habits index: {e}")))?;

        Ok(())
    }

    async fn migrate_health_goals(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_goals (
                username TEXT PRIMARY KEY REFERENCES users(username),
                target_weight REAL NOT NULL DEFAULT 0,
                target_steps INTEGER NOT NULL DEFAULT 0,
                target_water_intake INTEGER NOT NULL DEFAULT 0,
                target_sleep_hours INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create health_goals table: {e}")))?;

        Ok(())
    }
}

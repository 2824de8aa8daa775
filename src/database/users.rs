// ABOUTME: User management database operations
// ABOUTME: Handles registration, login verification, and profile persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

use sqlx::Row;

use super::{storage_error, Database};
use crate::crypto::{generate_salt, hash_password, verify_password};
use crate::errors::{AppError, AppResult};
use crate::models::{ProfileData, User};
use crate::session::SessionContext;

impl Database {
    /// Create a new user with a freshly salted password hash.
    ///
    /// # Errors
    ///
    /// Returns `UsernameTaken` if the username already exists, a
    /// configuration error if hashing fails, or a storage error if the
    /// insert fails. Nothing is written on any error path.
    pub async fn register_user(&self, username: &str, password: &str) -> AppResult<()> {
        if self.username_exists(username).await? {
            return Err(AppError::username_taken(username));
        }

        let salt = generate_salt();
        let password_hash = hash_password(password, &salt)?;

        sqlx::query("INSERT INTO users (username, password_hash, salt) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(&password_hash)
            .bind(&salt)
            .execute(self.pool())
            .await
            .map_err(|e| storage_error("register_user", &e))?;

        Ok(())
    }

    /// Check whether a username is already taken.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(self.pool())
            .await
            .map_err(|e| storage_error("username_exists", &e))?;
        Ok(count > 0)
    }

    /// Verify a login attempt against the stored (hash, salt) pair.
    ///
    /// Returns `false` both for an unknown username and for a wrong
    /// password, so callers cannot distinguish the two.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup fails, or a configuration
    /// error if the stored salt is corrupt.
    pub async fn verify_login(&self, username: &str, password: &str) -> AppResult<bool> {
        let row = sqlx::query("SELECT password_hash, salt FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| storage_error("verify_login", &e))?;

        match row {
            Some(row) => {
                let stored_hash: String = row.get("password_hash");
                let salt: String = row.get("salt");
                verify_password(password, &stored_hash, &salt)
            }
            None => Ok(false),
        }
    }

    /// Authenticate and build the session context for a user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` when the pair does not match, plus the
    /// storage/configuration errors of the underlying lookups.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<SessionContext> {
        if !self.verify_login(username, password).await? {
            return Err(AppError::invalid_credentials());
        }

        let user = self
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::user_not_found(username))?;
        let goals = self.get_health_goals(username).await?.unwrap_or_default();

        Ok(SessionContext::new(user, goals))
    }

    /// Load a user row with its profile.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT username, password_hash, salt, name, age, gender, height, target_weight
            FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("get_user", &e))?;

        Ok(row.map(|row| Self::row_to_user(&row)))
    }

    /// Save edited profile attributes for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if no row matched, or a storage error if the
    /// update fails.
    pub async fn update_profile(&self, username: &str, profile: &ProfileData) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET name = $1, age = $2, gender = $3, height = $4, target_weight = $5
            WHERE username = $6
            ",
        )
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(profile.height_cm)
        .bind(profile.target_weight_kg)
        .bind(username)
        .execute(self.pool())
        .await
        .map_err(|e| storage_error("update_profile", &e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::user_not_found(username));
        }
        Ok(())
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> User {
        User {
            username: row.get("username"),
            password_hash: row.get("password_hash"),
            salt: row.get("salt"),
            profile: ProfileData {
                name: row.get("name"),
                age: row.get("age"),
                gender: row.get("gender"),
                height_cm: row.get("height"),
                target_weight_kg: row.get("target_weight"),
            },
        }
    }
}

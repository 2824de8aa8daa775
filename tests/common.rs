// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy
#![allow(dead_code, clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Shared test utilities for `health_buddy`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use health_buddy::database::Database;
use health_buddy::models::ProfileData;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Register a user with a complete profile (175 cm, 70 kg target)
pub async fn create_test_user(database: &Database, username: &str) -> Result<()> {
    database.register_user(username, "Sup3r$ecret").await?;
    database
        .update_profile(
            username,
            &ProfileData {
                name: "Test User".into(),
                age: 30,
                gender: "other".into(),
                height_cm: 175.0,
                target_weight_kg: 70.0,
            },
        )
        .await?;
    Ok(())
}

/// Register a user whose profile height was never set
pub async fn create_user_without_height(database: &Database, username: &str) -> Result<()> {
    database.register_user(username, "Sup3r$ecret").await?;
    Ok(())
}

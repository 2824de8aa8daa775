// ABOUTME: Main library entry point for the Health Buddy tracking core
// ABOUTME: Provides credential, validation, and per-day record storage APIs for the desktop UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

#![deny(unsafe_code)]

//! # Health Buddy Core
//!
//! The non-UI core of the Health Buddy desktop tracker. The windowing layer
//! collects raw text from the user; this crate validates it, manages
//! credentials, and persists one health record and one daily habit entry per
//! user per calendar day.
//!
//! ## Architecture
//!
//! - **`crypto`**: salted password hashing and verification
//! - **`validation`**: pure pass/fail checks for every user-entered field
//! - **`database`**: per-user, per-date upsert and time-ranged series queries
//! - **`session`**: the in-memory context for the logged-in user
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_buddy::config::AppConfig;
//! use health_buddy::database::Database;
//! use health_buddy::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env();
//!     let db = Database::new(&config.database_url).await?;
//!     let session = db.login("alice", "correct horse").await?;
//!     println!("welcome back, {}", session.profile.name);
//!     Ok(())
//! }
//! ```

/// Runtime configuration loaded from the environment
pub mod config;

/// Application constants: validation limits, date formats, defaults
pub mod constants;

/// Salted password hashing, verification, and strength scoring
pub mod crypto;

/// SQLite-backed record store for users, health data, habits, and goals
pub mod database;

/// Unified error handling with a standard error-code taxonomy
pub mod errors;

/// Delimited text export of metric series
pub mod export;

/// Logging configuration and structured logging setup
pub mod logging;

/// Data structures for profiles, records, habits, goals, and series
pub mod models;

/// The logged-in user's session context and UI event seam
pub mod session;

/// Stateless field validators for raw user input
pub mod validation;

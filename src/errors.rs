// ABOUTME: Unified error handling system with standard error codes
// ABOUTME: Separates validation, auth, storage, and configuration failures for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! # Unified Error Handling
//!
//! One error type for the whole core. Validation and auth errors are
//! recoverable and carry a message the UI can show verbatim; storage errors
//! are logged where they occur and surface a generic user-facing message
//! distinct from the raw driver detail; configuration errors abort the
//! operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (1000-1999)
    /// Input failed a field rule (format, charset, emptiness)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1000,
    /// Input parsed but lies outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 1001,

    // Authentication (2000-2999)
    /// Username/password pair did not match a stored credential
    #[serde(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials = 2000,
    /// Sign-up attempted with a username that already exists
    #[serde(rename = "USERNAME_TAKEN")]
    UsernameTaken = 2001,
    /// Operation referenced a user that does not exist
    #[serde(rename = "USER_NOT_FOUND")]
    UserNotFound = 2002,

    // Storage (9000-9099)
    /// The persistence layer failed (connectivity, constraint, lock)
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9000,

    // Configuration (9100-9199)
    /// Missing or corrupt runtime material (e.g. undecodable stored salt)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 9100,
}

impl ErrorCode {
    /// Whether the user can fix this by correcting their input
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::ValueOutOfRange
                | Self::InvalidCredentials
                | Self::UsernameTaken
                | Self::UserNotFound
        )
    }

    /// Get a user-friendly description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidCredentials => "The username or password is incorrect",
            Self::UsernameTaken => "A user with this username already exists",
            Self::UserNotFound => "The requested user was not found",
            Self::DatabaseError => "Database operation failed",
            Self::ConfigError => "Configuration error encountered",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Message safe to show the user. Storage errors collapse to a generic
    /// string so driver details never reach a dialog box.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.code {
            ErrorCode::DatabaseError => map_storage_message(&self.message),
            _ => self.message.clone(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Credential mismatch at login
    pub fn invalid_credentials() -> Self {
        Self::new(
            ErrorCode::InvalidCredentials,
            "The username or password is incorrect",
        )
    }

    /// Duplicate username at sign-up
    pub fn username_taken(username: &str) -> Self {
        Self::new(
            ErrorCode::UsernameTaken,
            format!("Username '{username}' already exists, please choose another"),
        )
    }

    /// Referenced user does not exist
    pub fn user_not_found(username: &str) -> Self {
        Self::new(
            ErrorCode::UserNotFound,
            format!("No user named '{username}'"),
        )
    }

    /// Storage failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Map raw storage detail onto the generic strings the UI shows.
fn map_storage_message(detail: &str) -> String {
    let lower = detail.to_lowercase();
    if lower.contains("constraint") {
        "Data violates integrity constraints, please check your input".into()
    } else if lower.contains("unable to open") || lower.contains("not a database") {
        "Unable to read the database, please check the database file".into()
    } else if lower.contains("locked") || lower.contains("busy") {
        "The database is currently in use, please try again later".into()
    } else {
        "Database operation failed, please try again".into()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(ErrorCode::InvalidInput.is_recoverable());
        assert!(ErrorCode::UsernameTaken.is_recoverable());
        assert!(!ErrorCode::DatabaseError.is_recoverable());
        assert!(!ErrorCode::ConfigError.is_recoverable());
    }

    #[test]
    fn test_storage_user_message_is_generic() {
        let err = AppError::database("UNIQUE constraint failed: health_data.id");
        assert_eq!(
            err.user_message(),
            "Data violates integrity constraints, please check your input"
        );
        // the raw detail never leaks into the user message
        assert!(!err.user_message().contains("health_data"));
    }

    #[test]
    fn test_validation_user_message_passes_through() {
        let err = AppError::out_of_range("Weight must be between 20.0 and 300.0 kg");
        assert_eq!(err.user_message(), "Weight must be between 20.0 and 300.0 kg");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UsernameTaken).unwrap();
        assert_eq!(json, "\"USERNAME_TAKEN\"");
    }
}

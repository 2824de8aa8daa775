// ABOUTME: Environment configuration for deployment-specific settings
// ABOUTME: Database location and log level with sensible desktop defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! Environment-based configuration. The core consumes nothing beyond these
//! ambient settings; all domain inputs arrive through the APIs.

use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::defaults;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Developer diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string, falling back to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime configuration for the core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Log level for the tracing subscriber
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.into(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, with defaults for anything
    /// unset.
    #[must_use]
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into());
        let log_level = env::var("RUST_LOG")
            .map(|level| LogLevel::from_str_or_default(&level))
            .unwrap_or_default();

        Self {
            database_url,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse_fallback() {
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }

    #[test]
    fn test_default_database_url() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite:health_buddy.db");
    }
}

// ABOUTME: Application constants and configuration values
// ABOUTME: Validation limits, date formats, and environment defaults in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! Centralized constants so limits are never duplicated across modules

/// Numeric range limits for user-entered health fields
pub mod limits {
    /// Minimum accepted body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum accepted body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum accepted height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum accepted age in years
    pub const MIN_AGE: u32 = 1;
    /// Maximum accepted age in years
    pub const MAX_AGE: u32 = 150;
    /// Minimum accepted daily step count
    pub const MIN_STEPS: u32 = 0;
    /// Maximum accepted daily step count
    pub const MAX_STEPS: u32 = 100_000;
    /// Minimum accepted resting heart rate in bpm
    pub const MIN_HEART_RATE: u32 = 30;
    /// Maximum accepted resting heart rate in bpm
    pub const MAX_HEART_RATE: u32 = 250;
    /// Minimum accepted daily water intake in cups
    pub const MIN_WATER_INTAKE: u32 = 0;
    /// Maximum accepted daily water intake in cups
    pub const MAX_WATER_INTAKE: u32 = 50;
    /// Minimum accepted sleep duration in hours
    pub const MIN_SLEEP_HOURS: u32 = 0;
    /// Maximum accepted sleep duration in hours
    pub const MAX_SLEEP_HOURS: u32 = 24;
    /// Systolic blood pressure bounds in mmHg
    pub const SYSTOLIC_RANGE: (u32, u32) = (50, 250);
    /// Diastolic blood pressure bounds in mmHg
    pub const DIASTOLIC_RANGE: (u32, u32) = (30, 180);
    /// Username length bounds in characters
    pub const USERNAME_LENGTH: (usize, usize) = (3, 20);
    /// Password length bounds in characters
    pub const PASSWORD_LENGTH: (usize, usize) = (6, 50);
    /// Maximum display-name length in characters
    pub const MAX_NAME_LENGTH: usize = 50;
}

/// Date format strings used at the UI boundary
pub mod date_format {
    /// Display format the entry pages use (month/day/year)
    pub const DISPLAY: &str = "%m/%d/%Y";
    /// Human-readable form of [`DISPLAY`] for error messages
    pub const DISPLAY_LABEL: &str = "MM/DD/YYYY";
}

/// Environment defaults
pub mod defaults {
    /// Default SQLite database URL next to the executable
    pub const DATABASE_URL: &str = "sqlite:health_buddy.db";
    /// Service name used in structured log output
    pub const SERVICE_NAME: &str = "health-buddy";
}

/// Cryptographic parameters for the credential engine
pub mod credentials {
    /// Random salt length in bytes before base64 encoding
    pub const SALT_LENGTH: usize = 16;
    /// Characters counted as "special" when scoring password strength
    pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
}

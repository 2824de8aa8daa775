// ABOUTME: Stateless field validators for every user-entered value
// ABOUTME: Each validator returns pass/fail plus a message the UI shows verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! # Validation Engine
//!
//! Pure functions over raw text: no I/O, no side effects. Numeric validators
//! trim, then parse, then range-check; empty or whitespace-only input fails
//! before any parsing happens. Range checks are inclusive on both ends.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::constants::{date_format, limits};
use crate::crypto::{password_strength, PasswordStrength};
use crate::errors::{AppError, AppResult};

#[allow(clippy::unwrap_used)] // literal pattern
static BLOOD_PRESSURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}/\d{1,3}$").unwrap());

/// Outcome of a single field validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the input may be accepted
    pub valid: bool,
    /// Message for the UI: the rejection reason, or an advisory on success
    pub message: String,
}

impl ValidationResult {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Whether the input may be accepted
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate a username: 3-20 characters from `[A-Za-z0-9_]`.
#[must_use]
pub fn validate_username(username: &str) -> ValidationResult {
    let (min, max) = limits::USERNAME_LENGTH;
    if username.trim().is_empty() {
        return ValidationResult::fail("Username cannot be empty");
    }
    if username.len() < min {
        return ValidationResult::fail(format!("Username must be at least {min} characters"));
    }
    if username.len() > max {
        return ValidationResult::fail(format!("Username cannot exceed {max} characters"));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return ValidationResult::fail("Username may only contain letters, digits, and underscores");
    }
    ValidationResult::pass("Username is valid")
}

/// Validate a password: 6-50 characters. A weak password is accepted but the
/// result carries an advisory message instead of a plain confirmation.
#[must_use]
pub fn validate_password(password: &str) -> ValidationResult {
    let (min, max) = limits::PASSWORD_LENGTH;
    if password.is_empty() {
        return ValidationResult::fail("Password cannot be empty");
    }
    if password.len() < min {
        return ValidationResult::fail(format!("Password must be at least {min} characters"));
    }
    if password.len() > max {
        return ValidationResult::fail(format!("Password cannot exceed {max} characters"));
    }

    if password_strength(password) == PasswordStrength::Weak {
        return ValidationResult::pass(
            "Password strength is weak; consider mixing upper and lower case letters, digits, and special characters",
        );
    }
    ValidationResult::pass("Password is valid")
}

/// Validate a display name: non-empty, at most 50 characters.
#[must_use]
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::fail("Name cannot be empty");
    }
    if name.len() > limits::MAX_NAME_LENGTH {
        return ValidationResult::fail(format!(
            "Name cannot exceed {} characters",
            limits::MAX_NAME_LENGTH
        ));
    }
    ValidationResult::pass("Name is valid")
}

/// Validate an age in years.
#[must_use]
pub fn validate_age(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Age cannot be empty");
    }
    match trimmed.parse::<u32>() {
        Ok(age) if (limits::MIN_AGE..=limits::MAX_AGE).contains(&age) => {
            ValidationResult::pass("Age is valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Age must be between {} and {}",
            limits::MIN_AGE,
            limits::MAX_AGE
        )),
        Err(_) => ValidationResult::fail("Please enter a valid age"),
    }
}

/// Validate a height in centimeters.
#[must_use]
pub fn validate_height(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Height cannot be empty");
    }
    match trimmed.parse::<f64>() {
        Ok(height) if (limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&height) => {
            ValidationResult::pass("Height is valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Height must be between {:.1} and {:.1} cm",
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM
        )),
        Err(_) => ValidationResult::fail("Please enter a valid height number"),
    }
}

/// Validate a body weight in kilograms.
#[must_use]
pub fn validate_weight(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Weight cannot be empty");
    }
    match trimmed.parse::<f64>() {
        Ok(weight) if (limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&weight) => {
            ValidationResult::pass("Weight is valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Weight must be between {:.1} and {:.1} kg",
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG
        )),
        Err(_) => ValidationResult::fail("Please enter a valid weight number"),
    }
}

/// Validate a daily step count.
#[must_use]
pub fn validate_steps(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Steps cannot be empty");
    }
    match trimmed.parse::<u32>() {
        Ok(steps) if (limits::MIN_STEPS..=limits::MAX_STEPS).contains(&steps) => {
            ValidationResult::pass("Steps are valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Steps must be between {} and {}",
            limits::MIN_STEPS,
            limits::MAX_STEPS
        )),
        Err(_) => ValidationResult::fail("Please enter a valid step count"),
    }
}

/// Validate a heart rate in bpm.
#[must_use]
pub fn validate_heart_rate(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Heart rate cannot be empty");
    }
    match trimmed.parse::<u32>() {
        Ok(rate) if (limits::MIN_HEART_RATE..=limits::MAX_HEART_RATE).contains(&rate) => {
            ValidationResult::pass("Heart rate is valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Heart rate must be between {} and {}",
            limits::MIN_HEART_RATE,
            limits::MAX_HEART_RATE
        )),
        Err(_) => ValidationResult::fail("Please enter a valid heart rate"),
    }
}

/// Validate a blood pressure reading in "systolic/diastolic" form.
///
/// Both components must parse, lie in their clinical ranges, and systolic
/// must be strictly greater than diastolic (ties are rejected).
#[must_use]
pub fn validate_blood_pressure(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Blood pressure cannot be empty");
    }
    if !BLOOD_PRESSURE_PATTERN.is_match(trimmed) {
        return ValidationResult::fail("Blood pressure format must be XXX/XXX (e.g., 120/80)");
    }

    let mut parts = trimmed.split('/');
    let (Some(systolic), Some(diastolic)) = (
        parts.next().and_then(|p| p.parse::<u32>().ok()),
        parts.next().and_then(|p| p.parse::<u32>().ok()),
    ) else {
        return ValidationResult::fail("Please enter valid blood pressure numbers");
    };

    let (sys_min, sys_max) = limits::SYSTOLIC_RANGE;
    let (dia_min, dia_max) = limits::DIASTOLIC_RANGE;
    if !(sys_min..=sys_max).contains(&systolic) {
        return ValidationResult::fail(format!(
            "Systolic pressure must be between {sys_min} and {sys_max}"
        ));
    }
    if !(dia_min..=dia_max).contains(&diastolic) {
        return ValidationResult::fail(format!(
            "Diastolic pressure must be between {dia_min} and {dia_max}"
        ));
    }
    if systolic <= diastolic {
        return ValidationResult::fail("Systolic pressure must be greater than diastolic");
    }
    ValidationResult::pass("Blood pressure is valid")
}

/// Validate a daily water intake in cups.
#[must_use]
pub fn validate_water_intake(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Water intake cannot be empty");
    }
    match trimmed.parse::<u32>() {
        Ok(cups) if (limits::MIN_WATER_INTAKE..=limits::MAX_WATER_INTAKE).contains(&cups) => {
            ValidationResult::pass("Water intake is valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Water intake must be between {} and {} cups",
            limits::MIN_WATER_INTAKE,
            limits::MAX_WATER_INTAKE
        )),
        Err(_) => ValidationResult::fail("Please enter a valid water intake amount"),
    }
}

/// Validate a sleep duration in hours.
#[must_use]
pub fn validate_sleep_hours(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Sleep hours cannot be empty");
    }
    match trimmed.parse::<u32>() {
        Ok(hours) if (limits::MIN_SLEEP_HOURS..=limits::MAX_SLEEP_HOURS).contains(&hours) => {
            ValidationResult::pass("Sleep hours are valid")
        }
        Ok(_) => ValidationResult::fail(format!(
            "Sleep hours must be between {} and {}",
            limits::MIN_SLEEP_HOURS,
            limits::MAX_SLEEP_HOURS
        )),
        Err(_) => ValidationResult::fail("Please enter valid sleep hours"),
    }
}

/// Validate a date in the display format. The date may not lie in the future.
#[must_use]
pub fn validate_date(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Date cannot be empty");
    }
    match NaiveDate::parse_from_str(trimmed, date_format::DISPLAY) {
        Ok(date) if date > today() => ValidationResult::fail("The date cannot be in the future"),
        Ok(_) => ValidationResult::pass("Date is valid"),
        Err(_) => ValidationResult::fail(format!(
            "Please enter the date in {} format",
            date_format::DISPLAY_LABEL
        )),
    }
}

/// Parse a boundary date (display format) into the normalized internal form.
///
/// # Errors
///
/// Returns a validation error when the text does not match the display
/// format; nothing is written downstream of a malformed date.
pub fn parse_display_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), date_format::DISPLAY).map_err(|e| {
        AppError::invalid_input(format!(
            "Please enter the date in {} format",
            date_format::DISPLAY_LABEL
        ))
        .with_source(e)
    })
}

/// Render a normalized date back in the display format.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(date_format::DISPLAY).to_string()
}

/// The current local calendar day.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

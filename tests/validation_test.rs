// ABOUTME: Unit tests for the validation engine
// ABOUTME: Exercises range boundaries, format rules, and edge cases for every field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, Local};
use health_buddy::validation::{
    format_display_date, parse_display_date, validate_age, validate_blood_pressure, validate_date,
    validate_heart_rate, validate_height, validate_name, validate_password, validate_sleep_hours,
    validate_steps, validate_username, validate_water_intake, validate_weight,
};

#[test]
fn test_weight_boundaries_inclusive() {
    assert!(validate_weight("20.0").is_valid());
    assert!(!validate_weight("19.9").is_valid());
    assert!(validate_weight("300.0").is_valid());
    assert!(!validate_weight("300.1").is_valid());
}

#[test]
fn test_weight_not_a_number() {
    let result = validate_weight("abc");
    assert!(!result.is_valid());
    assert_eq!(result.message, "Please enter a valid weight number");
}

#[test]
fn test_weight_empty_fails_before_parsing() {
    assert!(!validate_weight("").is_valid());
    assert!(!validate_weight("   ").is_valid());
}

#[test]
fn test_weight_trims_whitespace() {
    assert!(validate_weight(" 75.5 ").is_valid());
}

#[test]
fn test_weight_rejects_nan() {
    assert!(!validate_weight("NaN").is_valid());
}

#[test]
fn test_height_range() {
    assert!(validate_height("100.0").is_valid());
    assert!(validate_height("250.0").is_valid());
    assert!(!validate_height("99.9").is_valid());
    assert!(!validate_height("250.1").is_valid());
    assert!(!validate_height("tall").is_valid());
}

#[test]
fn test_age_range() {
    assert!(validate_age("1").is_valid());
    assert!(validate_age("150").is_valid());
    assert!(!validate_age("0").is_valid());
    assert!(!validate_age("151").is_valid());
    assert!(!validate_age("-5").is_valid());
    assert!(!validate_age("twelve").is_valid());
}

#[test]
fn test_steps_range() {
    assert!(validate_steps("0").is_valid());
    assert!(validate_steps("100000").is_valid());
    assert!(!validate_steps("100001").is_valid());
    assert!(!validate_steps("many").is_valid());
}

#[test]
fn test_heart_rate_range() {
    assert!(validate_heart_rate("30").is_valid());
    assert!(validate_heart_rate("250").is_valid());
    assert!(!validate_heart_rate("29").is_valid());
    assert!(!validate_heart_rate("251").is_valid());
}

#[test]
fn test_water_intake_range() {
    assert!(validate_water_intake("0").is_valid());
    assert!(validate_water_intake("50").is_valid());
    assert!(!validate_water_intake("51").is_valid());
}

#[test]
fn test_sleep_hours_range() {
    assert!(validate_sleep_hours("0").is_valid());
    assert!(validate_sleep_hours("24").is_valid());
    assert!(!validate_sleep_hours("25").is_valid());
}

#[test]
fn test_blood_pressure_accepts_normal_reading() {
    assert!(validate_blood_pressure("120/80").is_valid());
}

#[test]
fn test_blood_pressure_rejects_inverted_reading() {
    let result = validate_blood_pressure("80/120");
    assert!(!result.is_valid());
    assert_eq!(result.message, "Systolic pressure must be greater than diastolic");
}

#[test]
fn test_blood_pressure_rejects_ties() {
    assert!(!validate_blood_pressure("120/120").is_valid());
}

#[test]
fn test_blood_pressure_rejects_wrong_separator() {
    let result = validate_blood_pressure("120-80");
    assert!(!result.is_valid());
    assert_eq!(
        result.message,
        "Blood pressure format must be XXX/XXX (e.g., 120/80)"
    );
}

#[test]
fn test_blood_pressure_component_ranges() {
    assert!(!validate_blood_pressure("49/40").is_valid());
    assert!(!validate_blood_pressure("251/80").is_valid());
    assert!(!validate_blood_pressure("120/29").is_valid());
    assert!(!validate_blood_pressure("200/181").is_valid());
    assert!(validate_blood_pressure("50/30").is_valid());
}

#[test]
fn test_blood_pressure_empty() {
    assert!(!validate_blood_pressure("").is_valid());
    assert!(!validate_blood_pressure("  ").is_valid());
}

#[test]
fn test_username_rules() {
    assert!(validate_username("alice_01").is_valid());
    assert!(!validate_username("").is_valid());
    assert!(!validate_username("ab").is_valid());
    assert!(!validate_username("a".repeat(21).as_str()).is_valid());
    assert!(!validate_username("alice 01").is_valid());
    assert!(!validate_username("alice-01").is_valid());
}

#[test]
fn test_password_length_rules() {
    assert!(!validate_password("").is_valid());
    assert!(!validate_password("short").is_valid());
    assert!(!validate_password("x".repeat(51).as_str()).is_valid());
}

#[test]
fn test_weak_password_accepted_with_advisory() {
    let result = validate_password("abcdef");
    assert!(result.is_valid());
    assert!(result.message.contains("weak"));
}

#[test]
fn test_strong_password_no_advisory() {
    let result = validate_password("Abcdef1!");
    assert!(result.is_valid());
    assert!(!result.message.contains("weak"));
}

#[test]
fn test_name_rules() {
    assert!(validate_name("Alice").is_valid());
    assert!(!validate_name("  ").is_valid());
    assert!(!validate_name("a".repeat(51).as_str()).is_valid());
}

#[test]
fn test_date_today_is_accepted() {
    let today = Local::now().date_naive();
    assert!(validate_date(&format_display_date(today)).is_valid());
}

#[test]
fn test_date_future_is_rejected() {
    let tomorrow = Local::now().date_naive().checked_add_days(Days::new(1)).unwrap();
    let result = validate_date(&format_display_date(tomorrow));
    assert!(!result.is_valid());
    assert_eq!(result.message, "The date cannot be in the future");
}

#[test]
fn test_date_wrong_format_is_rejected() {
    assert!(!validate_date("2024-06-01").is_valid());
    assert!(!validate_date("13/40/2024").is_valid());
    assert!(!validate_date("").is_valid());
}

#[test]
fn test_display_date_round_trip() {
    let date = parse_display_date("06/15/2024").unwrap();
    assert_eq!(format_display_date(date), "06/15/2024");
}

#[test]
fn test_parse_display_date_rejects_iso() {
    assert!(parse_display_date("2024-06-15").is_err());
}

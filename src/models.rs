// ABOUTME: Core data structures for users, health records, habits, and goals
// ABOUTME: Metric and time-range enums whose string forms are the UI combo-box labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! Data model shared by the record store and the UI boundary

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A stored credential and its profile, as read from the `users` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique username, the primary key for every record
    pub username: String,
    /// Base64 SHA-256 digest of the salted password
    pub password_hash: String,
    /// Base64 per-user salt
    pub salt: String,
    /// Profile attributes editable on the settings page
    pub profile: ProfileData,
}

/// Profile attributes and the weight goal stored on the user row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-text gender as the settings page stores it
    pub gender: String,
    /// Height in centimeters; 0.0 means never set
    pub height_cm: f64,
    /// Target weight in kilograms; 0.0 means never set
    pub target_weight_kg: f64,
}

/// The measurements entered on the health data page for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMeasurements {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Step count for the day
    pub steps: u32,
    /// Blood pressure in validated "systolic/diastolic" form
    pub blood_pressure: String,
    /// Heart rate in bpm
    pub heart_rate: u32,
}

/// One persisted health record: at most one per (username, date)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Owning user
    pub username: String,
    /// Calendar day the record belongs to
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Derived body mass index; `None` when the profile height was unset
    pub bmi: Option<f64>,
    /// Step count for the day
    pub steps: u32,
    /// Blood pressure in "systolic/diastolic" form
    pub blood_pressure: String,
    /// Heart rate in bpm
    pub heart_rate: u32,
}

impl HealthRecord {
    /// Whether this day met the user's goals: weight at or under target and
    /// steps at or over target.
    #[must_use]
    pub fn meets_goals(&self, goals: &HealthGoals) -> bool {
        self.weight_kg <= goals.target_weight_kg && self.steps >= goals.target_steps
    }
}

/// The habit fields entered on the daily habit page for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Water intake in cups
    pub water_intake: u32,
    /// Free-text diet notes
    pub diet: String,
    /// Sleep duration in hours
    pub sleep_hours: u32,
}

/// One persisted daily habit row: at most one per (username, date)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyHabit {
    /// Owning user
    pub username: String,
    /// Calendar day the entry belongs to
    pub date: NaiveDate,
    /// Water intake in cups
    pub water_intake: u32,
    /// Free-text diet notes
    pub diet: String,
    /// Sleep duration in hours
    pub sleep_hours: u32,
}

/// Target values per user; only the weight target is populated in practice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthGoals {
    /// Target weight in kilograms
    pub target_weight_kg: f64,
    /// Target daily steps
    pub target_steps: u32,
    /// Target daily water intake in cups
    pub target_water_intake: u32,
    /// Target sleep hours per night
    pub target_sleep_hours: u32,
}

/// Derive BMI from weight and profile height.
///
/// Returns `None` when height is zero or unset so callers surface "N/A"
/// instead of a division-by-zero artifact.
#[must_use]
pub fn bmi_for(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// A chartable health metric; `Display`/`FromStr` carry the combo-box labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Body weight in kilograms
    Weight,
    /// Derived body mass index
    Bmi,
    /// Daily step count
    Steps,
    /// Blood pressure, charted by its systolic component
    BloodPressure,
    /// Heart rate in bpm
    HeartRate,
}

impl Metric {
    /// Column name in the `health_data` table
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Bmi => "bmi",
            Self::Steps => "steps",
            Self::BloodPressure => "blood_pressure",
            Self::HeartRate => "heart_rate",
        }
    }

    /// Y-axis label for the chart collaborator
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Weight => "Weight (kg)",
            Self::Bmi => "BMI",
            Self::Steps => "Steps",
            Self::BloodPressure => "Blood Pressure (mmHg)",
            Self::HeartRate => "Heart Rate (bpm)",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Weight => write!(f, "Weight"),
            Self::Bmi => write!(f, "BMI"),
            Self::Steps => write!(f, "Steps"),
            Self::BloodPressure => write!(f, "Blood Pressure"),
            Self::HeartRate => write!(f, "Heart Rate"),
        }
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "bmi" => Ok(Self::Bmi),
            "steps" => Ok(Self::Steps),
            "blood pressure" => Ok(Self::BloodPressure),
            "heart rate" => Ok(Self::HeartRate),
            _ => Err(AppError::invalid_input(format!("Unknown metric: {s}"))),
        }
    }
}

/// Sliding lookback window ending at today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// The last 7 days
    LastWeek,
    /// The last calendar month
    LastMonth,
    /// The last three calendar months
    Last3Months,
    /// The last year
    LastYear,
}

impl TimeRange {
    /// Inclusive start of the window ending at `today`
    #[must_use]
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::LastWeek => today.checked_sub_days(Days::new(7)).unwrap_or(today),
            Self::LastMonth => today.checked_sub_months(Months::new(1)).unwrap_or(today),
            Self::Last3Months => today.checked_sub_months(Months::new(3)).unwrap_or(today),
            Self::LastYear => today.checked_sub_months(Months::new(12)).unwrap_or(today),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::LastWeek => write!(f, "Last Week"),
            Self::LastMonth => write!(f, "Last Month"),
            Self::Last3Months => write!(f, "Last 3 Months"),
            Self::LastYear => write!(f, "Last Year"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last week" => Ok(Self::LastWeek),
            "last month" => Ok(Self::LastMonth),
            "last 3 months" => Ok(Self::Last3Months),
            "last year" => Ok(Self::LastYear),
            _ => Err(AppError::invalid_input(format!("Unknown time range: {s}"))),
        }
    }
}

/// A single sampled value in a metric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Numeric sample (weight, BMI, steps, heart rate)
    Number(f64),
    /// Blood pressure kept in its stored "systolic/diastolic" text form
    Pressure(String),
}

impl MetricValue {
    /// Numeric projection for charting; blood pressure contributes its
    /// systolic component.
    #[must_use]
    pub fn chart_value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Pressure(text) => text
                .split('/')
                .next()
                .and_then(|systolic| systolic.parse().ok())
                .unwrap_or(0.0),
        }
    }
}

/// One (date, value) sample returned by the series queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar day of the sample
    pub date: NaiveDate,
    /// Sampled value
    pub value: MetricValue,
}

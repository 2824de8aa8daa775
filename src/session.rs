// ABOUTME: Session context for the authenticated user and the UI event seam
// ABOUTME: Plain data holder created at login/signup and discarded at logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! # Session Model
//!
//! The session mirrors the `users` and `health_goals` rows for the one
//! logged-in user. It is passed explicitly to whatever needs the current
//! identity; there is no process-wide "current user" singleton. It is never
//! persisted itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HealthGoals, ProfileData, User};

/// The authenticated identity plus its profile and goals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Username of the logged-in user
    pub username: String,
    /// Profile attributes as loaded at login
    pub profile: ProfileData,
    /// Goal targets as loaded at login
    pub goals: HealthGoals,
}

impl SessionContext {
    /// Build a session from a freshly loaded user row and goals.
    #[must_use]
    pub fn new(user: User, goals: HealthGoals) -> Self {
        Self {
            username: user.username,
            profile: user.profile,
            goals,
        }
    }
}

/// Events the core raises toward the UI collaborator.
///
/// The entry pages implement this instead of being wired up by concrete
/// widget type; the core never names a widget.
pub trait EntryEvents {
    /// A calendar day was chosen; the page should reload that day's data.
    fn date_selected(&mut self, date: NaiveDate);

    /// A save attempt finished with the given outcome.
    fn record_saved(&mut self, outcome: &SaveOutcome);
}

/// What a save attempt produced, for the UI to display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SaveOutcome {
    /// The record was written; BMI is present unless profile height is unset
    Saved {
        /// Derived BMI for the saved weight, when computable
        bmi: Option<f64>,
    },
    /// The input was rejected before any write
    Rejected {
        /// The validation message to show
        message: String,
    },
}

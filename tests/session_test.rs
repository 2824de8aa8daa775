// ABOUTME: Integration tests for the session model and the UI event seam
// ABOUTME: Drives a save flow end to end through an EntryEvents test double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use health_buddy::models::{HealthGoals, HealthMeasurements};
use health_buddy::session::{EntryEvents, SaveOutcome};
use health_buddy::validation::validate_weight;

/// Stand-in for an entry page: records what the core told it
#[derive(Default)]
struct RecordingPage {
    selected_dates: Vec<NaiveDate>,
    outcomes: Vec<SaveOutcome>,
}

impl EntryEvents for RecordingPage {
    fn date_selected(&mut self, date: NaiveDate) {
        self.selected_dates.push(date);
    }

    fn record_saved(&mut self, outcome: &SaveOutcome) {
        self.outcomes.push(outcome.clone());
    }
}

#[tokio::test]
async fn test_save_flow_reports_outcome_through_the_seam() {
    let db = common::create_test_database().await.unwrap();
    common::create_test_user(&db, "alice").await.unwrap();

    let mut page = RecordingPage::default();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    page.date_selected(date);

    // the UI validates the raw text, then asks the store to save
    let check = validate_weight("72.5");
    assert!(check.is_valid());

    let entry = HealthMeasurements {
        weight_kg: 72.5,
        steps: 8000,
        blood_pressure: "120/80".into(),
        heart_rate: 60,
    };
    let bmi = db.upsert_health_record("alice", date, &entry).await.unwrap();
    page.record_saved(&SaveOutcome::Saved { bmi });

    assert_eq!(page.selected_dates, vec![date]);
    assert!(matches!(page.outcomes[0], SaveOutcome::Saved { bmi: Some(_) }));
}

#[tokio::test]
async fn test_rejected_input_never_reaches_the_store() {
    let db = common::create_test_database().await.unwrap();
    common::create_test_user(&db, "alice").await.unwrap();

    let mut page = RecordingPage::default();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let check = validate_weight("19.9");
    assert!(!check.is_valid());
    page.record_saved(&SaveOutcome::Rejected {
        message: check.message,
    });

    assert!(matches!(page.outcomes[0], SaveOutcome::Rejected { .. }));
    // nothing was written
    assert!(db.get_health_record("alice", date).await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_mirrors_profile_and_goals_rows() {
    let db = common::create_test_database().await.unwrap();
    common::create_test_user(&db, "alice").await.unwrap();
    db.upsert_health_goals(
        "alice",
        &HealthGoals {
            target_weight_kg: 68.0,
            target_steps: 9000,
            target_water_intake: 8,
            target_sleep_hours: 8,
        },
    )
    .await
    .unwrap();

    let session = db.login("alice", "Sup3r$ecret").await.unwrap();
    assert_eq!(session.username, "alice");
    assert!((session.goals.target_weight_kg - 68.0).abs() < f64::EPSILON);
    assert_eq!(session.goals.target_steps, 9000);
}

#[tokio::test]
async fn test_goal_comparison_from_session() {
    let db = common::create_test_database().await.unwrap();
    common::create_test_user(&db, "alice").await.unwrap();
    db.upsert_health_goals(
        "alice",
        &HealthGoals {
            target_weight_kg: 75.0,
            target_steps: 6000,
            target_water_intake: 0,
            target_sleep_hours: 0,
        },
    )
    .await
    .unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let entry = HealthMeasurements {
        weight_kg: 72.0,
        steps: 8000,
        blood_pressure: "120/80".into(),
        heart_rate: 60,
    };
    db.upsert_health_record("alice", date, &entry).await.unwrap();

    let session = db.login("alice", "Sup3r$ecret").await.unwrap();
    let record = db.get_health_record("alice", date).await.unwrap().unwrap();
    assert!(record.meets_goals(&session.goals));
}

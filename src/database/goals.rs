// ABOUTME: Health goal storage and target value resolution
// ABOUTME: One goals row per user; only the weight target is read in practice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

use sqlx::Row;

use super::{storage_error, Database};
use crate::errors::AppResult;
use crate::models::{HealthGoals, Metric};

impl Database {
    /// Insert or replace the goals row for a user.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the statement fails.
    pub async fn upsert_health_goals(
        &self,
        username: &str,
        goals: &HealthGoals,
    ) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO health_goals (username, target_weight, target_steps, target_water_intake, target_sleep_hours)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT(username) DO UPDATE SET
                target_weight = $2,
                target_steps = $3,
                target_water_intake = $4,
                target_sleep_hours = $5
            ",
        )
        .bind(username)
        .bind(goals.target_weight_kg)
        .bind(goals.target_steps)
        .bind(goals.target_water_intake)
        .bind(goals.target_sleep_hours)
        .execute(self.pool())
        .await
        .map_err(|e| storage_error("upsert_health_goals", &e))?;

        Ok(())
    }

    /// Load the goals row for a user, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn get_health_goals(&self, username: &str) -> AppResult<Option<HealthGoals>> {
        let row = sqlx::query(
            r"
            SELECT target_weight, target_steps, target_water_intake, target_sleep_hours
            FROM health_goals WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("get_health_goals", &e))?;

        Ok(row.map(|row| HealthGoals {
            target_weight_kg: row.get("target_weight"),
            target_steps: row.get("target_steps"),
            target_water_intake: row.get("target_water_intake"),
            target_sleep_hours: row.get("target_sleep_hours"),
        }))
    }

    /// Resolve the chart target line for a metric.
    ///
    /// Only the weight target exists today. A goals row takes precedence;
    /// otherwise the profile's target weight is used; 0.0 means unset.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a lookup fails.
    pub async fn get_target_value(&self, username: &str, metric: Metric) -> AppResult<f64> {
        if metric != Metric::Weight {
            return Ok(0.0);
        }

        if let Some(goals) = self.get_health_goals(username).await? {
            if goals.target_weight_kg > 0.0 {
                return Ok(goals.target_weight_kg);
            }
        }

        let profile_target = self
            .get_user(username)
            .await?
            .map(|user| user.profile.target_weight_kg);
        Ok(profile_target.unwrap_or(0.0))
    }
}

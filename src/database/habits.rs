// ABOUTME: Daily habit upsert and single-day lookup
// ABOUTME: Same one-row-per-user-per-day discipline as health records, independent table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

use chrono::NaiveDate;
use sqlx::Row;

use super::{storage_error, Database};
use crate::errors::AppResult;
use crate::models::{DailyHabit, HabitEntry};

impl Database {
    /// Insert or update the daily habit entry for one (username, date).
    ///
    /// # Errors
    ///
    /// Returns a storage error if any statement fails; a failed statement
    /// leaves prior state unchanged.
    pub async fn upsert_daily_habit(
        &self,
        username: &str,
        date: NaiveDate,
        entry: &HabitEntry,
    ) -> AppResult<()> {
        let exists = self.daily_habit_exists(username, date).await?;
        if exists {
            sqlx::query(
                r"
                UPDATE daily_habits SET water_intake = $1, diet = $2, sleep_hours = $3
                WHERE username = $4 AND date = $5
                ",
            )
            .bind(entry.water_intake)
            .bind(&entry.diet)
            .bind(entry.sleep_hours)
            .bind(username)
            .bind(date)
            .execute(self.pool())
            .await
            .map_err(|e| storage_error("update_daily_habit", &e))?;
        } else {
            sqlx::query(
                r"
                INSERT INTO daily_habits (username, date, water_intake, diet, sleep_hours)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(username)
            .bind(date)
            .bind(entry.water_intake)
            .bind(&entry.diet)
            .bind(entry.sleep_hours)
            .execute(self.pool())
            .await
            .map_err(|e| storage_error("insert_daily_habit", &e))?;
        }

        Ok(())
    }

    /// Load the habit entry for one calendar day, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn get_daily_habit(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> AppResult<Option<DailyHabit>> {
        let row = sqlx::query(
            r"
            SELECT username, date, water_intake, diet, sleep_hours
            FROM daily_habits WHERE username = $1 AND date = $2
            ",
        )
        .bind(username)
        .bind(date)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("get_daily_habit", &e))?;

        Ok(row.map(|row| DailyHabit {
            username: row.get("username"),
            date: row.get("date"),
            water_intake: row.get("water_intake"),
            diet: row.get("diet"),
            sleep_hours: row.get("sleep_hours"),
        }))
    }

    async fn daily_habit_exists(&self, username: &str, date: NaiveDate) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM daily_habits WHERE username = $1 AND date = $2",
        )
        .bind(username)
        .bind(date)
        .fetch_one(self.pool())
        .await
        .map_err(|e| storage_error("daily_habit_exists", &e))?;
        Ok(count > 0)
    }
}

// ABOUTME: Health record upsert and time-ranged series queries
// ABOUTME: One record per user per calendar day, BMI derived from profile height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

use chrono::NaiveDate;
use sqlx::Row;

use super::{storage_error, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{
    bmi_for, HealthMeasurements, HealthRecord, Metric, MetricValue, SeriesPoint, TimeRange,
};
use crate::validation::today;

impl Database {
    /// Insert or update the health record for one (username, date).
    ///
    /// BMI is derived from the weight being saved and the height stored on
    /// the user's profile; when the height is unset the record is stored
    /// with a NULL BMI and `None` is returned so the caller can show "N/A".
    ///
    /// Returns the derived BMI.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown username, or a storage error
    /// if any statement fails; a failed statement leaves prior state
    /// unchanged.
    pub async fn upsert_health_record(
        &self,
        username: &str,
        date: NaiveDate,
        entry: &HealthMeasurements,
    ) -> AppResult<Option<f64>> {
        let user = self
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::user_not_found(username))?;
        let bmi = bmi_for(entry.weight_kg, user.profile.height_cm);

        let exists = self.health_record_exists(username, date).await?;
        if exists {
            sqlx::query(
                r"
                UPDATE health_data
                SET weight = $1, bmi = $2, steps = $3, blood_pressure = $4, heart_rate = $5
                WHERE username = $6 AND date = $7
                ",
            )
            .bind(entry.weight_kg)
            .bind(bmi)
            .bind(entry.steps)
            .bind(&entry.blood_pressure)
            .bind(entry.heart_rate)
            .bind(username)
            .bind(date)
            .execute(self.pool())
            .await
            .map_err(|e| storage_error("update_health_record", &e))?;
        } else {
            sqlx::query(
                r"
                INSERT INTO health_data (username, date, weight, bmi, steps, blood_pressure, heart_rate)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ",
            )
            .bind(username)
            .bind(date)
            .bind(entry.weight_kg)
            .bind(bmi)
            .bind(entry.steps)
            .bind(&entry.blood_pressure)
            .bind(entry.heart_rate)
            .execute(self.pool())
            .await
            .map_err(|e| storage_error("insert_health_record", &e))?;
        }

        Ok(bmi)
    }

    /// Load the health record for one calendar day, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn get_health_record(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> AppResult<Option<HealthRecord>> {
        let row = sqlx::query(
            r"
            SELECT username, date, weight, bmi, steps, blood_pressure, heart_rate
            FROM health_data WHERE username = $1 AND date = $2
            ",
        )
        .bind(username)
        .bind(date)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("get_health_record", &e))?;

        Ok(row.map(|row| HealthRecord {
            username: row.get("username"),
            date: row.get("date"),
            weight_kg: row.get("weight"),
            bmi: row.get("bmi"),
            steps: row.get("steps"),
            blood_pressure: row.get("blood_pressure"),
            heart_rate: row.get("heart_rate"),
        }))
    }

    /// Metric samples for the window `[today - range, today]`, ascending by
    /// date. Blood pressure samples keep their stored textual form.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn get_series(
        &self,
        username: &str,
        metric: Metric,
        range: TimeRange,
    ) -> AppResult<Vec<SeriesPoint>> {
        let end = today();
        let start = range.start(end);
        self.series_between(username, metric, start, end, true).await
    }

    /// Metric samples for the window strictly preceding the current one:
    /// `[today - 2*days_offset, today - days_offset)`, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn get_comparison_series(
        &self,
        username: &str,
        metric: Metric,
        days_offset: i64,
    ) -> AppResult<Vec<SeriesPoint>> {
        let now = today();
        let end = now - chrono::Duration::days(days_offset);
        let start = now - chrono::Duration::days(2 * days_offset);
        self.series_between(username, metric, start, end, false).await
    }

    async fn series_between(
        &self,
        username: &str,
        metric: Metric,
        start: NaiveDate,
        end: NaiveDate,
        inclusive_end: bool,
    ) -> AppResult<Vec<SeriesPoint>> {
        let end_op = if inclusive_end { "<=" } else { "<" };
        let query = format!(
            "SELECT date, {column} AS value FROM health_data \
             WHERE username = $1 AND date >= $2 AND date {end_op} $3 \
             ORDER BY date ASC",
            column = metric.column(),
        );

        let rows = sqlx::query(&query)
            .bind(username)
            .bind(start)
            .bind(end)
            .fetch_all(self.pool())
            .await
            .map_err(|e| storage_error("get_series", &e))?;

        let mut points = Vec::with_capacity(rows.len());
        for row in rows {
            let date: NaiveDate = row.get("date");
            let value = match metric {
                Metric::BloodPressure => MetricValue::Pressure(row.get("value")),
                // NULL BMI rows (height unset at save time) are skipped
                Metric::Bmi => match row.get::<Option<f64>, _>("value") {
                    Some(v) => MetricValue::Number(v),
                    None => continue,
                },
                Metric::Weight => MetricValue::Number(row.get("value")),
                Metric::Steps | Metric::HeartRate => {
                    let v: i64 = row.get("value");
                    MetricValue::Number(v as f64)
                }
            };
            points.push(SeriesPoint { date, value });
        }
        Ok(points)
    }

    async fn health_record_exists(&self, username: &str, date: NaiveDate) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM health_data WHERE username = $1 AND date = $2",
        )
        .bind(username)
        .bind(date)
        .fetch_one(self.pool())
        .await
        .map_err(|e| storage_error("health_record_exists", &e))?;
        Ok(count > 0)
    }
}

// ABOUTME: Delimited text export of metric series
// ABOUTME: Produces the Date,Metric,Value rows the analysis page writes to disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

use std::fmt::Write as _;

use crate::models::{Metric, SeriesPoint};
use crate::validation::format_display_date;

/// Render a metric series as comma-delimited text with a header row.
///
/// Dates use the display format; values carry two decimals, with blood
/// pressure contributing its systolic component.
#[must_use]
pub fn to_delimited(metric: Metric, series: &[SeriesPoint]) -> String {
    let mut out = String::from("Date,Metric,Value\n");
    for point in series {
        let _ = writeln!(
            out,
            "{},{metric},{:.2}",
            format_display_date(point.date),
            point.value.chart_value()
        );
    }
    out
}

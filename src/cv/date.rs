// SPDX-License-Identifier: MPL-2.0
//! ISO calendar dates as exchanged with the form fields.
//!
//! Field values are `YYYY-MM-DD` strings, or the empty string for "unset".
//! Parsing is permissive: surrounding whitespace and unpadded month/day
//! numbers are accepted, and anything that does not name a real calendar day
//! yields `None` instead of an error.

use chrono::{Datelike, NaiveDate};

/// Wire format used for every date value.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` field value.
///
/// Returns `None` for the empty string and for strings that do not name a
/// real calendar day (e.g. `2023-02-30`).
#[must_use]
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_FORMAT).ok()
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Number of days in `month0` (0 = January) of `year`.
///
/// Computed as the day before the first of the following month, so leap
/// years need no special casing. Returns 0 for an out-of-range month.
#[must_use]
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    if month0 > 11 {
        return 0;
    }
    let (next_year, next_month) = if month0 == 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day())
}

/// Weekday of the first day of `month0` in `year`, with Sunday = 0.
#[must_use]
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map_or(0, |first| first.weekday().num_days_from_sunday())
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a timestamp as "<Month> <Day>", e.g. "April 3".
///
/// Month and day are read in the timestamp's own zone.
pub fn format_month_day<Tz: TimeZone>(date: DateTime<Tz>) -> String {
    // month0() is always in 0..12
    let month = MONTHS[date.month0() as usize];
    format!("{} {}", month, date.day())
}

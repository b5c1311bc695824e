// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date enumeration and timestamp formatting.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};

/// Iterate every calendar day from `start` to `end` inclusive, ascending.
///
/// Yields nothing when `start > end`. The iterator is lazy and can be
/// re-created from the same bounds to restart the sequence.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Format a calendar date as an RFC3339 timestamp at midnight UTC with a
/// `Z` suffix, e.g. `2024-01-01T00:00:00Z`.
pub fn midnight_utc_rfc3339(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

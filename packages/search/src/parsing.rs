//! Lenient value parsing for fixture fields.
//!
//! Nothing in here fails: a value that cannot be understood becomes `None`
//! (dates) or `0.0` (confidence), and callers decide what that means.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use hotlist_vehicle_models::{Scalar, VehicleRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal number, the same prefix a JavaScript `parseFloat` accepts.
static LEADING_FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

/// Naive date-time layouts seen in fixtures, tried in order.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a confidence value into a number.
///
/// Numbers pass through. Strings lose their first `%` and are then read up
/// to the end of the leading number, so `"92%"`, `"92.5 %"` and `"92 (cam)"`
/// all parse. Missing, unparseable, and non-finite values yield `0.0`.
#[must_use]
pub fn parse_confidence(value: Option<&Scalar>) -> f64 {
    let parsed = match value {
        Some(Scalar::Number(n)) => *n,
        Some(Scalar::Text(s)) => parse_float_prefix(&s.replacen('%', "", 1)).unwrap_or(0.0),
        None => 0.0,
    };

    if parsed.is_finite() && parsed != 0.0 {
        parsed
    } else {
        0.0
    }
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let prefix = LEADING_FLOAT_RE.find(s)?;
    prefix.as_str().trim_start().parse::<f64>().ok()
}

/// Parses a date or date-time string into a UTC instant.
///
/// Accepts RFC 3339 (with offset), naive `YYYY-MM-DDTHH:MM[:SS[.f]]` and
/// `YYYY-MM-DD HH:MM[:SS[.f]]` (read as UTC), and bare `YYYY-MM-DD` (UTC
/// midnight).
#[must_use]
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

/// UTC midnight at the start of `date`.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// The record's theft date as an instant, if present and parseable.
#[must_use]
pub fn theft_instant(record: &VehicleRecord) -> Option<DateTime<Utc>> {
    record.theft_date.as_deref().and_then(parse_instant)
}

/// The record's latest detection as an instant.
///
/// Tries `detectionTimestamp`, then `detectionTime`, and falls back to the
/// Unix epoch when neither parses.
#[must_use]
pub fn detection_instant(record: &VehicleRecord) -> DateTime<Utc> {
    record
        .detection_times()
        .find_map(parse_instant)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

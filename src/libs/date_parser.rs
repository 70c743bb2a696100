//! Parsing of the date expressions accepted on the command line.
//!
//! Two entry points exist:
//!
//! - [`parse`] turns `today`, `yesterday`, `last friday`, `2026-01-15` or
//!   `01-15` into a calendar date that is not in the future. Mood commands use
//!   it for `--date`.
//! - [`parse_timestamp`] is the lenient local-time parser behind
//!   `task done --completed-at`.

use super::error::{DewitError, Result};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};

const ACCEPTED_FORMATS: &str = "today, yesterday, last monday, YYYY-MM-DD, MM-DD";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parses `input` relative to the local current date.
pub fn parse(input: &str) -> Result<NaiveDate> {
    parse_relative_to(input, Local::now().date_naive())
}

/// Parses `input` as if the current date were `today`.
///
/// Fails with [`DewitError::InvalidInput`] when the expression is not
/// recognized or resolves to a date after `today`.
pub fn parse_relative_to(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let normalized = input.trim().to_lowercase();

    let date = match normalized.as_str() {
        "today" => today,
        "yesterday" => today - Duration::days(1),
        other => parse_natural_or_formatted(other, today).ok_or_else(|| {
            DewitError::InvalidInput(format!("Cannot parse date '{input}'. Accepted formats: {ACCEPTED_FORMATS}."))
        })?,
    };

    if date > today {
        return Err(DewitError::InvalidInput(format!(
            "Date '{input}' is in the future. Only past or today dates are allowed."
        )));
    }

    Ok(date)
}

fn parse_natural_or_formatted(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(day) = input.strip_prefix("last ") {
        if let Ok(weekday) = day.trim().parse::<Weekday>() {
            return Some(last_weekday(today, weekday));
        }
    }

    if let Ok(full) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(full);
    }

    // MM-DD, year taken from `today`
    NaiveDate::parse_from_str(&format!("{}-{}", today.year(), input), "%Y-%m-%d").ok()
}

/// Most recent `target` strictly before `today`.
fn last_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    let mut days_back = (current - wanted + 7) % 7;
    if days_back == 0 {
        days_back = 7;
    }
    today - Duration::days(days_back)
}

/// Leniently parses a point in time, assuming local time when no offset is given.
///
/// RFC 3339 values are converted to local time; a bare date means midnight.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight);
            }
        }
    }

    Err(DewitError::InvalidInput(format!("Invalid date format: {input}")))
}

//! Calendar date helpers shared by the ledger and the command surface.

use jiff::{
    Unit,
    civil::{Date, DateTime},
};
use thiserror::Error;

/// The only accepted date shape for user input.
pub const DATE_FORMAT: &str = "YYYY-MM-DD";

/// Input that is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date format. Use {DATE_FORMAT}")]
pub struct DateFormatError;

/// Parse a `YYYY-MM-DD` string into a date-time at midnight.
///
/// # Errors
///
/// Returns [`DateFormatError`] for any input that is not exactly a zero-padded
/// calendar date, including otherwise valid ISO-8601 variants such as
/// `2025-6-1` or `2025-06-01T10:00`.
pub fn parse_date(raw: &str) -> Result<DateTime, DateFormatError> {
    let raw = raw.trim();

    raw.parse::<Date>()
        .ok()
        .filter(|date| date.to_string() == raw)
        .map(|date| date.at(0, 0, 0, 0))
        .ok_or(DateFormatError)
}

/// Whole days from `start` to `end`, truncated towards zero.
///
/// Returns `None` when the span cannot be represented.
pub fn whole_days_between(start: DateTime, end: DateTime) -> Option<i64> {
    start
        .until((Unit::Day, end))
        .ok()
        .map(|span| i64::from(span.get_days()))
}

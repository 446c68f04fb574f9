//! Calendar-date helpers for the `YYYY-MM-DD` strings used in clinical data.

use chrono::NaiveDate;

use crate::error::{VitalError, VitalResult};

/// The on-disk date format. ISO-8601 dates order lexicographically.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string, attributing failures to `record_id`.
///
/// Only the zero-padded form is accepted: "2024-9-15" is rejected because it
/// would sort after "2024-10-01".
pub fn parse_date(record_id: &str, date: &str) -> VitalResult<NaiveDate> {
    let invalid = || VitalError::InvalidDate {
        record_id: record_id.to_string(),
        date: date.to_string(),
    };
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid())?;
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Format a stored date for display ("2024-01-15" → "Jan 15, 2024").
///
/// Strings that do not parse are returned unchanged.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Short chart-axis label ("2024-01-15" → "Jan 15").
pub fn axis_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) => d.format("%b %d").to_string(),
        Err(_) => date.to_string(),
    }
}

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Parse a target date given as YYYY-MM-DD.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // chrono accepts unpadded months and days, the log format does not
    if s.len() == 10
        && let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT)
    {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// ISO-8601 shapes outside RFC 3339: minutes-only times, offsets without a
/// colon or without minutes, and the basic (no separator) form.
const ISO_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%#z",
];

/// Parse an ISO-8601 timestamp carrying its own UTC offset.
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts);
    }
    ISO_OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
}

/// Calendar date of a timestamp, taken in the timestamp's own offset.
pub(crate) fn local_date(ts: &DateTime<FixedOffset>) -> NaiveDate {
    ts.date_naive()
}

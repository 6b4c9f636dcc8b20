//! Calendar date parsing for daily observations.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a day value such as `2010-01-15`.
///
/// A trailing time part (`T...` or space-separated, with or without zone
/// suffix) is accepted and ignored. Anything else yields None.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    // Date followed by a time we do not need (fractional seconds, offsets).
    let (date_part, rest) = trimmed.split_at_checked(10)?;
    if rest.starts_with('T') || rest.starts_with(' ') {
        return NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok();
    }
    None
}

/// Year of a day value, or None when the value is not a date.
pub fn year_of_day(value: &str) -> Option<i32> {
    parse_day(value).map(|date| date.year())
}

//! Date normalization for post records.
//!
//! Every record in the index carries a `YYYY-MM-DD` date. Authors write dates
//! in whatever form they like, so normalization is forgiving: anything that
//! reads as a calendar date is reformatted, and anything else falls back to a
//! caller-supplied value (the file's modification date). Normalization never
//! fails; one bad header must not abort a whole build.

use chrono::{DateTime, Local, NaiveDate};
use std::time::SystemTime;

/// Canonical output format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats that must consume the entire input.
const FULL_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%Y년 %m월 %d일",
    "%Y. %m. %d.",
    "%Y. %m. %d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Formats allowed to be followed by a time-of-day remainder.
const PREFIX_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// A date-like value as it appears in front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Native(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Native(date)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

/// Normalize `value` to `YYYY-MM-DD`, returning `fallback` when it is absent,
/// blank, or unparsable.
pub fn normalize_date(value: Option<&DateValue>, fallback: &str) -> String {
    match value {
        None => fallback.to_string(),
        Some(DateValue::Native(date)) => date.format(DATE_FORMAT).to_string(),
        Some(DateValue::Text(text)) => match parse_date(text) {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => fallback.to_string(),
        },
    }
}

/// Parse free-form text as a calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = FULL_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc2822(text) {
        return Some(timestamp.date_naive());
    }

    PREFIX_FORMATS.iter().find_map(|format| {
        let (date, remainder) = NaiveDate::parse_and_remainder(text, format).ok()?;
        starts_time_of_day(remainder).then_some(date)
    })
}

/// The strict leading `YYYY-MM-DD` of an index date, used for ordering.
pub fn leading_iso_date(text: &str) -> Option<NaiveDate> {
    let head = text.get(..10)?;
    if !head.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    }) {
        return None;
    }
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// A remainder like `T10:00:00Z`, ` 10:00:00 +09:00` or nothing at all.
fn starts_time_of_day(remainder: &str) -> bool {
    let rest = remainder
        .strip_prefix('T')
        .or_else(|| remainder.strip_prefix('t'))
        .unwrap_or(remainder)
        .trim_start();
    rest.is_empty() || rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Map a front matter value to a date candidate. Numbers are read as text so
/// compact dates like `20240101` survive YAML's integer typing.
pub fn date_from_value(value: &serde_yaml::Value) -> Option<DateValue> {
    crate::frontmatter::scalar_text(value).map(DateValue::Text)
}

/// A file timestamp as a local calendar date.
pub fn format_system_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}

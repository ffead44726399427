//! # Date Format Helpers
//!
//! Events carry their start and end as text. Which pattern applies depends on
//! the frequency: weekly events use a bare date, every other frequency uses a
//! date with hours and minutes.
//!
//! Parsing here is strict. The input must have exactly the shape of the
//! pattern (zero-padded, no seconds, no offset, no surrounding whitespace) and
//! must name a real calendar date. Anything else is `None`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_ONLY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

static DATE_TIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("valid date-time regex")
});

static TIME_OF_DAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("valid time regex"));

/// `HH:mm`, 24-hour
pub const TIME_OF_DAY_PATTERN: &str = "%H:%M";

/// The two textual encodings an event timestamp can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    DateOnly,
    /// `YYYY-MM-DD HH:mm`
    DateTime,
}

impl DateFormat {
    /// The chrono pattern for this format
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DateOnly => "%Y-%m-%d",
            DateFormat::DateTime => "%Y-%m-%d %H:%M",
        }
    }

    fn shape(self) -> &'static Regex {
        match self {
            DateFormat::DateOnly => &*DATE_ONLY_SHAPE,
            DateFormat::DateTime => &*DATE_TIME_SHAPE,
        }
    }
}

/// Parses `value` under exactly `format`.
///
/// Date-only values resolve to midnight so both formats compare on the same
/// axis.
///
/// # Example
///
/// ```
/// use evently_core::date_format::{parse_strict, DateFormat};
///
/// assert!(parse_strict("2024-01-01 09:00", DateFormat::DateTime).is_some());
/// assert!(parse_strict("2024-1-1 09:00", DateFormat::DateTime).is_none());
/// assert!(parse_strict("2024-01-01 09:00", DateFormat::DateOnly).is_none());
/// ```
pub fn parse_strict(value: &str, format: DateFormat) -> Option<NaiveDateTime> {
    if !format.shape().is_match(value) {
        return None;
    }

    match format {
        DateFormat::DateOnly => NaiveDate::parse_from_str(value, format.pattern())
            .ok()?
            .and_hms_opt(0, 0, 0),
        DateFormat::DateTime => NaiveDateTime::parse_from_str(value, format.pattern()).ok(),
    }
}

/// Formats `value` with `format`. Date-only output drops the time of day.
pub fn format(value: &NaiveDateTime, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

/// Re-encodes a value written in either format into `target`.
///
/// Returns `None` when `value` matches neither format.
pub fn reformat(value: &str, target: DateFormat) -> Option<String> {
    parse_strict(value, DateFormat::DateTime)
        .or_else(|| parse_strict(value, DateFormat::DateOnly))
        .map(|parsed| format(&parsed, target))
}

/// Parses a 24-hour `HH:mm` time of day.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    if !TIME_OF_DAY_SHAPE.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_OF_DAY_PATTERN).ok()
}

/// Serde adapter writing a `NaiveTime` as `HH:mm`
pub mod serde_time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{TIME_OF_DAY_PATTERN, parse_time_of_day};

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIME_OF_DAY_PATTERN).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time_of_day(&raw)
            .ok_or_else(|| D::Error::custom(format!("expected HH:mm, got {raw:?}")))
    }
}

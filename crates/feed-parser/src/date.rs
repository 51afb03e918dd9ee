// crates/feed-parser/src/date.rs
//! Multi-format timestamp parsing
//!
//! Feeds in the wild use RFC 822 style dates (with or without weekday and
//! seconds, with a zone name or a numeric offset) as well as ISO 8601 machine
//! timestamps. Patterns are tried in a fixed order and the first full match
//! wins. Month and weekday names are always English; results are UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::borrow::Cow;

/// One entry of the ordered pattern list
#[derive(Debug, Clone, Copy)]
enum DatePattern {
    /// RFC 822 email date: optional weekday and seconds, zone name or offset
    Rfc822,
    /// chrono format that ends in a numeric `%z` offset
    NumericZone(&'static str),
    /// RFC 3339, optionally with fractional seconds and `Z`
    Rfc3339,
    /// Calendar date only, taken as midnight UTC
    DateOnly(&'static str),
}

const PATTERNS: &[DatePattern] = &[
    DatePattern::Rfc822,
    DatePattern::NumericZone("%Y-%m-%dT%H:%M:%S%z"),
    DatePattern::Rfc3339,
    DatePattern::DateOnly("%Y-%m-%d"),
];

/// Parses feed timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct DateParser;

impl DateParser {
    /// Creates a date parser
    pub fn new() -> Self {
        Self
    }

    /// Parses a timestamp, returning `None` when no known pattern matches
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed = PATTERNS
            .iter()
            .find_map(|pattern| pattern.apply(trimmed));

        if parsed.is_none() {
            log::trace!("No date pattern matched {:?}", trimmed);
        }
        parsed
    }

    /// Nil-preserving variant used by the field extractors
    pub fn parse_opt(&self, text: Option<&str>) -> Option<DateTime<Utc>> {
        text.and_then(|t| self.parse(t))
    }
}

impl DatePattern {
    fn apply(self, text: &str) -> Option<DateTime<Utc>> {
        let fixed = match self {
            Self::Rfc822 => parse_rfc822(text)?,
            Self::NumericZone(format) => DateTime::parse_from_str(text, format).ok()?,
            Self::Rfc3339 => DateTime::parse_from_rfc3339(text).ok()?,
            Self::DateOnly(format) => {
                let date = NaiveDate::parse_from_str(text, format).ok()?;
                return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
            }
        };
        Some(fixed.with_timezone(&Utc))
    }
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// chrono's RFC 2822 parser, plus a `UTC` zone name and a weekday that
/// disagrees with the date
fn parse_rfc822(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = utc_as_offset(text);
    if let Ok(parsed) = DateTime::parse_from_rfc2822(&text) {
        return Some(parsed);
    }

    // chrono rejects a weekday that does not match; the weekday is optional
    let (weekday, rest) = text.split_once(',')?;
    let weekday = weekday.trim();
    if !WEEKDAYS.iter().any(|day| day.eq_ignore_ascii_case(weekday)) {
        return None;
    }
    DateTime::parse_from_rfc2822(rest.trim_start()).ok()
}

fn utc_as_offset(text: &str) -> Cow<'_, str> {
    match text.rsplit_once(' ') {
        Some((rest, zone)) if zone.eq_ignore_ascii_case("UTC") => {
            Cow::Owned(format!("{} +0000", rest))
        }
        _ => Cow::Borrowed(text),
    }
}

//! Clock time and date parsing.
//!
//! Teaching slots run on an hour-granularity 24-hour clock; dates are
//! local calendar dates with no time-zone offset. Both arrive from form
//! layers as strings, so the parsers here are tolerant of the common
//! variants and reject the rest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An hour-granularity time of day on a 24-hour clock.
///
/// Serialized as `"HH:00"`. Deserialization also accepts `"HH"` and a
/// bare integer hour; minutes, if present, are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Creates a clock time at the given hour.
    pub fn new(hour: u32) -> Self {
        Self(hour)
    }

    /// The hour component.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Hour(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Hour(hour) => Ok(ClockTime::new(hour)),
            Raw::Text(text) => parse_clock(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid clock time {text:?}"))),
        }
    }
}

/// Parses `"HH:MM"` or `"HH"` into a clock time, ignoring minutes.
pub fn parse_clock(raw: &str) -> Option<ClockTime> {
    let hour_part = raw.trim().split(':').next().unwrap_or(raw);
    hour_part.parse::<u32>().ok().map(ClockTime::new)
}

/// Parses a form-supplied date string into a calendar date.
///
/// Accepts ISO `YYYY-MM-DD`, an ISO datetime (everything after `T` is
/// discarded), and `DD/MM/YYYY`. Anything else yields `None` — callers
/// treat that as "no anchor date" and produce an empty schedule branch.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%d/%m/%Y") {
        return Some(date);
    }

    tracing::debug!("unparseable date string {raw:?}");
    None
}

//! Timestamp parsing and display formatting.
//!
//! Source timestamps may or may not carry an offset. Values without one are
//! taken to be UTC before being converted into the display timezone.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Result, TranscriptError};

/// Full date-time format with a 24-hour clock.
pub const FULL_FORMAT_24H: &str = "%A, %e %B %Y %H:%M";
/// Full date-time format with a 12-hour clock.
pub const FULL_FORMAT_12H: &str = "%A, %e %B %Y %I:%M %p";
/// Time-of-day shown beside continuation rows (24-hour clock).
pub const SHORT_FORMAT_24H: &str = "%H:%M";
/// Time-of-day shown beside continuation rows (12-hour clock).
pub const SHORT_FORMAT_12H: &str = "%I:%M %p";
/// Compact timestamp rendered in block headers.
pub const DEFAULT_FORMAT: &str = "%d-%m-%Y %H:%M";
/// Calendar date used in the participant roster.
pub const DATE_FORMAT: &str = "%b %d, %Y";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp, treating values without an offset as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TranscriptError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| TranscriptError::InvalidTimezone {
        name: name.to_string(),
    })
}

/// Serde adapter for required timestamps.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339.
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserialize, accepting values without an offset as UTC.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional timestamps.
pub mod timestamp_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339 or null.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize, accepting values without an offset as UTC.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Formats instants in the transcript's display timezone.
#[derive(Debug, Clone, Copy)]
pub struct TimeFormatter {
    tz: Tz,
    military_time: bool,
}

impl TimeFormatter {
    /// Create a formatter for the given zone and clock style.
    #[must_use]
    pub const fn new(tz: Tz, military_time: bool) -> Self {
        Self { tz, military_time }
    }

    /// Long form, e.g. `Monday,  5 February 2024 13:45`.
    #[must_use]
    pub fn full(&self, ts: &DateTime<Utc>) -> String {
        let fmt = if self.military_time { FULL_FORMAT_24H } else { FULL_FORMAT_12H };
        ts.with_timezone(&self.tz).format(fmt).to_string()
    }

    /// Time of day only.
    #[must_use]
    pub fn time_of_day(&self, ts: &DateTime<Utc>) -> String {
        let fmt = if self.military_time { SHORT_FORMAT_24H } else { SHORT_FORMAT_12H };
        ts.with_timezone(&self.tz).format(fmt).to_string()
    }

    /// Header timestamp, always `dd-mm-YYYY HH:MM`.
    #[must_use]
    pub fn header(&self, ts: &DateTime<Utc>) -> String {
        ts.with_timezone(&self.tz).format(DEFAULT_FORMAT).to_string()
    }

    /// Calendar date.
    #[must_use]
    pub fn date(&self, ts: &DateTime<Utc>) -> String {
        ts.with_timezone(&self.tz).format(DATE_FORMAT).to_string()
    }

    /// Display timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

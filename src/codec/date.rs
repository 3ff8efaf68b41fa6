//! Timestamp codec.
//!
//! Inbound timestamps come in two shapes:
//! - zoned: `2016-08-12T22:59:42.405Z`, `2016-08-12T22:59:42.405-07:00`
//! - local: `2016-08-12T22:59:42.405` (read as UTC)
//!
//! The zoned pattern is tried first, then the local one. Nothing else is
//! guessed. The empty string means "absent". Outbound timestamps are always
//! written in UTC with a literal `Z`.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Milliseconds plus zone offset (`Z`, `+hh`, `+hhmm` or `+hh:mm`).
pub const ZONED_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f%#z";
/// Milliseconds, no zone.
pub const LOCAL_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f";
/// Pattern used when serializing.
pub const OUTBOUND_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse a wire timestamp. `Ok(None)` for the empty string.
pub fn parse_date(text: &str) -> Result<Option<DateTime<Utc>>> {
    if text.is_empty() {
        return Ok(None);
    }
    if !has_millis_shape(text) {
        return Err(Error::decoding(format!(
            "unparseable date '{}': expected 'yyyy-MM-ddTHH:mm:ss.SSS' with an optional zone",
            text
        )));
    }

    if let Ok(zoned) = DateTime::parse_from_str(text, ZONED_PATTERN) {
        return Ok(Some(zoned.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(text, LOCAL_PATTERN)
        .map(|naive| Some(Utc.from_utc_datetime(&naive)))
        .map_err(|e| {
            Error::decoding(format!(
                "unparseable date '{}': matches neither '{}' nor '{}' ({})",
                text, ZONED_PATTERN, LOCAL_PATTERN, e
            ))
        })
}

/// chrono treats `%.3f` as optional and skips leading blanks, so the exact
/// `ss.SSS` shape is checked up front: a dot and three digits right after the
/// seconds, then nothing or a zone designator, and no whitespace anywhere.
fn has_millis_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() < 23 || bytes.iter().any(u8::is_ascii_whitespace) {
        return false;
    }
    bytes[19] == b'.'
        && bytes[20..23].iter().all(u8::is_ascii_digit)
        && matches!(bytes.get(23), None | Some(b'Z' | b'z' | b'+' | b'-'))
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format(OUTBOUND_PATTERN).to_string()
}

/// Serde adapter for required timestamp fields.
pub mod required {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_date(&text)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("empty date where a value is required"))
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Use together with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&super::format_date(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => super::parse_date(&text).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

//! Lenient timestamp decoding.
//!
//! The backend sends RFC 3339 timestamps, or naive ones without an offset
//! for datetimes it stores without a zone. Naive values are read as UTC.
//! Anything else decodes to `None` so one odd field never fails a list.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse))
}

pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn offset_timestamps_are_converted_to_utc() {
        let at = parse("2024-05-01T14:34:56+02:00").unwrap();
        assert_eq!(at.hour(), 12);
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let at = parse("2024-05-01T12:34:56.123456").unwrap();
        assert_eq!((at.year(), at.month(), at.day()), (2024, 5, 1));
        assert_eq!((at.hour(), at.minute(), at.second()), (12, 34, 56));

        assert!(parse("2024-05-01 12:34:56").is_some());
    }

    #[test]
    fn garbage_is_none() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}

//! Calendar date codec for the durable format.
//!
//! Dates are written as UTC midnight date-times (`2024-01-10T00:00:00.000Z`)
//! and read back by taking the UTC calendar date, so the date component never
//! drifts with the local timezone.

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{LopError, Result};

/// Formats a date as an ISO-8601 date-time at UTC midnight.
pub fn format_date(date: Date) -> String {
    format!("{date}T00:00:00.000Z")
}

/// Parses a calendar date from an RFC 3339 timestamp, a civil date-time or a
/// plain `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `LopError::InvalidInput` for the `date` field when none of the
/// accepted forms match.
pub fn parse_date(raw: &str) -> Result<Date> {
    let raw = raw.trim();
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(dt) = raw.parse::<DateTime>() {
        return Ok(dt.date());
    }
    raw.parse::<Date>().map_err(|e| {
        LopError::invalid_input("date").with_reason(format!("'{raw}' is not a date: {e}"))
    })
}

pub(crate) fn serialize<S>(date: &Date, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_format_is_utc_midnight() {
        assert_eq!(format_date(date(2024, 1, 10)), "2024-01-10T00:00:00.000Z");
    }

    #[test]
    fn test_parse_accepted_forms() {
        let expected = date(2024, 1, 10);
        assert_eq!(parse_date("2024-01-10").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10T00:00:00.000Z").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10T08:30:00").unwrap(), expected);
        assert_eq!(parse_date(" 2024-01-10 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_uses_utc_date_of_timestamp() {
        // 23:30 at -05:00 is already the next day in UTC
        assert_eq!(
            parse_date("2024-01-10T23:30:00-05:00").unwrap(),
            date(2024, 1, 11)
        );
    }

    #[test]
    fn test_written_date_reads_back_unchanged() {
        for d in [date(2024, 2, 29), date(1999, 12, 31), date(2030, 1, 1)] {
            assert_eq!(parse_date(&format_date(d)).unwrap(), d);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_date("next tuesday").unwrap_err();
        assert!(matches!(err, LopError::InvalidInput { ref field, .. } if field == "date"));
        assert!(parse_date("").is_err());
    }
}

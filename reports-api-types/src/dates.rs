//! Calendar date conventions
//!
//! Stored records and query bounds both reduce to a UTC calendar date, so
//! comparisons never shift by a day because of a sender's time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Naive date-time layouts accepted after plain dates and RFC 3339
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Reduce a date or date-time string to its UTC calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 (converted to UTC before the date is
/// taken) and date-times without an offset, which are read as UTC.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

/// `deserialize_with` helper applying [`parse_calendar_date`]
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_offsets_convert_to_utc_date() {
        assert_eq!(parse_calendar_date("2025-11-01"), Some(date("2025-11-01")));
        assert_eq!(parse_calendar_date("2025-11-01T00:00:00.000Z"), Some(date("2025-11-01")));
        assert_eq!(parse_calendar_date("2025-11-01T23:30:00-05:00"), Some(date("2025-11-02")));
        assert_eq!(parse_calendar_date("2025-11-01T00:30:00+02:00"), Some(date("2025-10-31")));
        assert_eq!(parse_calendar_date("2025-11-01 08:15:00"), Some(date("2025-11-01")));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("2025-13-01"), None);
    }
}

//! Calendar date handling.
//!
//! Entity dates are stored as naive timestamps (no offset) and serialized as
//! `YYYY-MM-DDTHH:MM:SS`, with a fractional part only when one is stored.
//! List bounds only care about the calendar day, so time-of-day is dropped
//! before any comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::ValidationError;

/// Wire format used when serializing `dateValue`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a timestamp in any of the accepted input shapes.
///
/// Accepted, in order:
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` (naive)
/// - RFC 3339 with an offset (converted to UTC, offset dropped)
/// - `YYYY-MM-DD` (midnight)
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` if none of the shapes match.
///
/// # Examples
///
/// ```
/// use entity_registry::time::parse_date_time;
///
/// let dt = parse_date_time("1980-01-01").unwrap();
/// assert_eq!(dt.to_string(), "1980-01-01 00:00:00");
/// ```
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a value and keeps only its calendar day.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` if the value is not a recognised date.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, ValidationError> {
    parse_date_time(value).map(|dt| dt.date())
}

/// Serde adapter for optional `dateValue` fields.
pub mod optional_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_date_time, DATE_TIME_FORMAT};

    /// Serializes `Some` as `YYYY-MM-DDTHH:MM:SS[.fff]`, `None` as null.
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.collect_str(&dt.format(DATE_TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes null or any shape accepted by [`parse_date_time`].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|text| parse_date_time(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_date_time("1975-05-10").unwrap();
        assert_eq!(dt, ymd(1975, 5, 10).and_time(NaiveTime::MIN));
    }

    #[test]
    fn test_parse_naive_timestamp_with_fraction() {
        let dt = parse_date_time("1980-01-01T13:45:00.250").unwrap();
        assert_eq!(dt.date(), ymd(1980, 1, 1));
        assert_eq!(dt.format("%H:%M").to_string(), "13:45");
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let dt = parse_date_time("1980-01-01T23:30:00-02:00").unwrap();
        assert_eq!(dt.date(), ymd(1980, 1, 2));
    }

    #[test]
    fn test_calendar_date_drops_time_of_day() {
        let date = parse_calendar_date(" 1980-01-01T18:00:00 ").unwrap();
        assert_eq!(date, ymd(1980, 1, 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_calendar_date("not-a-date").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate { value } if value == "not-a-date"));
    }
}

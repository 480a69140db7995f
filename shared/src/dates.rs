//! Single parsing/formatting boundary for calendar dates.
//!
//! Every date that crosses the storage layer is a plain UTC calendar date in
//! `YYYY-MM-DD` form. Anything else is rejected here, before it can reach a
//! comparison or a formatter.

use crate::{Result, SharedError};
use chrono::{NaiveDate, Utc};

pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Also accepts an RFC 3339 timestamp and takes its date part, since older
/// stored records carried full timestamps for single-day events.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SharedError::MissingField("date".to_string()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, CALENDAR_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    Err(SharedError::InvalidDate(trimmed.to_string()))
}

/// Formats a calendar date for storage and form inputs (`YYYY-MM-DD`).
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// Formats a calendar date for display (`Mar 05, 2024`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Today's date in UTC. The app never consults the local timezone for
/// calendar comparisons.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Validates that a date range is ordered (`start <= end`).
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(SharedError::InvalidDateRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_parse_plain_calendar_date() {
        let date = parse_calendar_date("2024-01-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_accepts_rfc3339_timestamps() {
        let date = parse_calendar_date("2024-01-05T14:30:00-03:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_rejects_free_form_dates() {
        assert!(parse_calendar_date("Jan 5, 2024").is_err());
        assert!(parse_calendar_date("05/01/2024").is_err());
        assert!(parse_calendar_date("not a date").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_as_missing_field() {
        let err = parse_calendar_date("  ").unwrap_err();
        assert!(matches!(err, SharedError::MissingField(_)));
    }

    #[test]
    fn test_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_calendar_date(&format_calendar_date(date)).unwrap(), date);
    }

    #[test]
    fn test_display_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_display_date(date), "Mar 05, 2024");
    }

    #[test]
    fn test_validate_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
        assert!(matches!(
            validate_date_range(end, start),
            Err(SharedError::InvalidDateRange { .. })
        ));
    }
}

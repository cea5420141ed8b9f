//! Date type for the snapshot pipeline.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{TermCurveError, TermCurveResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// parsing and arithmetic the snapshot pipeline needs and ensuring type
/// safety at the crate boundaries.
///
/// # Example
///
/// ```rust
/// use termcurve_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 2).unwrap();
/// let window_start = date - 7;
/// assert_eq!(window_start.to_string(), "2023-12-26");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TermCurveError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TermCurveResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| TermCurveError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `TermCurveError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> TermCurveResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| TermCurveError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Creates a date from a US-style string (MM/DD/YYYY), the format used
    /// for configured target dates.
    ///
    /// # Errors
    ///
    /// Returns `TermCurveError::InvalidDate` if the string is not a valid date.
    pub fn parse_mdy(s: &str) -> TermCurveResult<Self> {
        NaiveDate::parse_from_str(s, "%m/%d/%Y")
            .map(Date)
            .map_err(|_| TermCurveError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Creates a date from a Unix timestamp (seconds), interpreted in UTC.
    ///
    /// Quote feeds stamp daily bars with a Unix epoch; only the calendar day
    /// is meaningful here.
    ///
    /// # Errors
    ///
    /// Returns `TermCurveError::InvalidDate` if the timestamp is out of range.
    pub fn from_unix_timestamp(secs: i64) -> TermCurveResult<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(|dt| Date(dt.date_naive()))
            .ok_or_else(|| TermCurveError::invalid_date(format!("Timestamp out of range: {secs}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns midnight UTC of this date as a Unix timestamp (seconds).
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
            .timestamp()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 2);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_parse_iso() {
        let date = Date::parse("2024-01-02").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 2).unwrap());
        assert!(Date::parse("01/02/2024").is_err());
    }

    #[test]
    fn test_parse_mdy() {
        let date = Date::parse_mdy("01/02/2024").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 2).unwrap());
        assert!(Date::parse_mdy("2024-01-02").is_err());
        assert!(Date::parse_mdy("13/01/2024").is_err());
    }

    #[test]
    fn test_unix_timestamp_roundtrip() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        let ts = date.unix_timestamp();
        assert_eq!(Date::from_unix_timestamp(ts).unwrap(), date);
        // Intraday timestamps collapse to the same calendar day.
        assert_eq!(Date::from_unix_timestamp(ts + 3600).unwrap(), date);
    }

    #[test]
    fn test_day_arithmetic() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();

        let start = date - 7;
        assert_eq!(start, Date::from_ymd(2023, 12, 26).unwrap());

        let end = date + 1;
        assert_eq!(end, Date::from_ymd(2024, 1, 3).unwrap());

        assert_eq!(start.days_between(&end), 8);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(format!("{date}"), "2024-01-02");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-01-02\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}

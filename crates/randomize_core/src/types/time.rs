//! Calendar types for synthetic data generation.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Business-day (Monday to Friday) arithmetic
//! - `business_days`: the first N business days from a start date
//!
//! Generated series are spaced in business days only. No holiday calendar is
//! applied.
//!
//! # Examples
//!
//! ```
//! use randomize_core::types::time::{business_days, Date};
//!
//! // 2024-01-06 is a Saturday, so the range rolls forward to Monday
//! let start = Date::from_ymd(2024, 1, 6).unwrap();
//! let days = business_days(start, 2);
//! assert_eq!(days[0].to_string(), "2024-01-08");
//! assert_eq!(days[1].to_string(), "2024-01-09");
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 (`YYYY-MM-DD`) formatting, which is the date format of
/// every CSV export, and business-day stepping.
///
/// # Examples
///
/// ```
/// use randomize_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert!(!date.is_business_day()); // Saturday
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomize_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use randomize_core::types::time::Date;
    ///
    /// let date = Date::parse("2020-01-01").unwrap();
    /// assert_eq!(date.month(), 1);
    ///
    /// assert!(Date::parse("01/01/2020").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true for Monday to Friday.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomize_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 1, 5).unwrap().is_business_day()); // Friday
    /// assert!(!Date::from_ymd(2024, 1, 7).unwrap().is_business_day()); // Sunday
    /// ```
    pub fn is_business_day(&self) -> bool {
        !matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns this date if it is a business day, otherwise the following Monday.
    ///
    /// Returns `None` only when the calendar runs out (near `NaiveDate::MAX`).
    pub fn roll_forward(self) -> Option<Self> {
        let mut date = self.0;
        while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            date = date.succ_opt()?;
        }
        Some(Date(date))
    }

    /// Returns the next business day strictly after this date.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomize_core::types::time::Date;
    ///
    /// let friday = Date::from_ymd(2024, 1, 5).unwrap();
    /// assert_eq!(friday.next_business_day().unwrap().to_string(), "2024-01-08");
    /// ```
    pub fn next_business_day(self) -> Option<Self> {
        Date(self.0.succ_opt()?).roll_forward()
    }
}

/// Returns the first `count` business days starting at `start` inclusive.
///
/// A start date on a weekend rolls forward to the following Monday. The
/// result is shorter than `count` only if the calendar is exhausted.
///
/// # Examples
///
/// ```
/// use randomize_core::types::time::{business_days, Date};
///
/// let days = business_days(Date::from_ymd(2024, 1, 4).unwrap(), 3);
/// let labels: Vec<String> = days.iter().map(|d| d.to_string()).collect();
/// assert_eq!(labels, ["2024-01-04", "2024-01-05", "2024-01-08"]);
/// ```
pub fn business_days(start: Date, count: usize) -> Vec<Date> {
    let first = if count == 0 { None } else { start.roll_forward() };
    std::iter::successors(first, |date| date.next_business_day())
        .take(count)
        .collect()
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of calendar days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

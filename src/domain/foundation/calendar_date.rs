//! CalendarDate value object for timezone-naive calendar days.
//!
//! All due-date arithmetic works at day precision. Timezone normalization
//! is the data-loading layer's responsibility; by the time a date reaches
//! the domain it is an unambiguous year-month-day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A calendar date with day precision and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a calendar date from year, month, and day components.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a valid calendar date", year, month, day),
                )
            })
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Malformed input is rejected; this type can never hold an invalid date.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }

    /// Creates a calendar date from a NaiveDate.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days in the given month.
    pub fn last_day_of_month(year: i32, month: u32) -> u32 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        // The first of the following month always exists; its predecessor
        // is the last day of this month.
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(28)
    }

    /// Advances by whole months, anchoring the day-of-month to `anchor_day`.
    ///
    /// The resulting day is `min(anchor_day, last day of the target month)`:
    /// a member who joined on the 31st is due on the 28th/29th/30th in
    /// shorter months, and back on the 31st when the month allows it. The
    /// date never overflows into the following month.
    pub fn add_months_anchored(&self, months: u32, anchor_day: u32) -> Self {
        let zero_based = self.0.year() * 12 + self.0.month0() as i32 + months as i32;
        let year = zero_based.div_euclid(12);
        let month = zero_based.rem_euclid(12) as u32 + 1;
        let day = anchor_day.clamp(1, Self::last_day_of_month(year, month));
        // Day is clamped into the month's valid range, so this cannot fail.
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    /// Returns the `YYYY-MM` grouping key for monthly aggregation.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.0.year(), self.0.month())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! World calendar date with year context.

use crate::error::CalendarError;
use crate::month::days_in_month;

/// A date in the 365-day world calendar.
///
/// Months are zero-based (0..=11) and days are 1-based, matching the
/// convention used everywhere in this workspace, including persisted
/// date keys. Dates are always derived from a day-count or validated on
/// construction, so a held `WorldDate` is guaranteed consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorldDate {
    year: i32,
    month: u8,
    day: u8,
}

impl WorldDate {
    /// Creates a new `WorldDate` from year, zero-based month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month (0..=11).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }
}

//! Error types for the worldcal-calendar crate.

/// Error type for all fallible operations in the worldcal-calendar crate.
///
/// This enum covers anchor validation, month and day range checks in the
/// 365-day world calendar, and use of a navigator before it has been
/// anchored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an anchor day-count is below 1.
    #[error("invalid day count: {day_count} (must be >= 1)")]
    InvalidDayCount {
        /// The invalid day-count value that was provided.
        day_count: i64,
    },

    /// Returned when a month number is outside the valid range 0..=11.
    #[error("invalid month: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when navigation or rendering is requested before an anchor is set.
    #[error("anchor not set (call set_anchor first)")]
    AnchorNotSet,
}

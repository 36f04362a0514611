//! Error types for the worldcal-events crate.

/// Error type for all fallible operations in the worldcal-events crate.
///
/// Bucket mutations are deliberately infallible (stale indices are
/// tolerated as no-ops), so the only failure mode is a date-key string
/// that does not parse at the persistence boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// Returned when a date-key string is not of the form `"year-month-day"`.
    #[error("invalid date key: {key:?} (expected \"year-month-day\")")]
    InvalidDateKey {
        /// The string that failed to parse.
        key: String,
    },
}

//! Month-length table for the 365-day world calendar.

use crate::error::CalendarError;

/// Days in each month, indexed by zero-based month number.
///
/// The table sums to exactly 365. There is no leap day: month 1 always
/// has 28 days, in every year.
pub const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in every year of the world calendar.
pub const DAYS_PER_YEAR: i64 = 365;

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Returns the number of days in the given zero-based month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11.
pub fn days_in_month(month: u8) -> Result<u8, CalendarError> {
    if month >= MONTHS_PER_YEAR {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_LENGTHS[month as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sums_to_365() {
        let total: i64 = MONTH_LENGTHS.iter().copied().map(i64::from).sum();
        assert_eq!(total, DAYS_PER_YEAR);
    }

    #[test]
    fn days_in_month_values() {
        assert_eq!(days_in_month(0).unwrap(), 31);
        assert_eq!(days_in_month(1).unwrap(), 28);
        assert_eq!(days_in_month(3).unwrap(), 30);
        assert_eq!(days_in_month(11).unwrap(), 31);
    }

    #[test]
    fn days_in_month_invalid_12() {
        assert_eq!(
            days_in_month(12).unwrap_err(),
            CalendarError::InvalidMonth { month: 12 }
        );
    }

    #[test]
    fn no_month_shorter_than_28_or_longer_than_31() {
        for &len in &MONTH_LENGTHS {
            assert!((28..=31).contains(&len));
        }
    }
}

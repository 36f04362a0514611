//! Conversions between absolute day-counts and world calendar dates.
//!
//! Day-counts are 1-based: day-count 1 is the first day of year 0,
//! month 0. Every year is exactly [`DAYS_PER_YEAR`] days long, so the
//! calendar is strictly periodic and every conversion is pure table
//! arithmetic over [`MONTH_LENGTHS`].

use crate::date::WorldDate;
use crate::error::CalendarError;
use crate::month::{DAYS_PER_YEAR, MONTHS_PER_YEAR, MONTH_LENGTHS};

/// Resolves an absolute day-count into a [`WorldDate`].
///
/// The year is `(day_count - 1) / 365` and the remainder is walked
/// through the month table to find the month and day-of-month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayCount`] if `day_count < 1`.
pub fn date_from_day_count(day_count: i64) -> Result<WorldDate, CalendarError> {
    if day_count < 1 {
        return Err(CalendarError::InvalidDayCount { day_count });
    }
    let total = day_count - 1;
    let year = (total / DAYS_PER_YEAR) as i32;
    let day_of_year = (total % DAYS_PER_YEAR) as u16;

    let mut month = 0u8;
    let mut day = day_of_year + 1;
    for (m, &len) in MONTH_LENGTHS.iter().enumerate() {
        if day <= u16::from(len) {
            month = m as u8;
            break;
        }
        day -= u16::from(len);
    }
    // Cannot fire for day_of_year in 0..=364: the table sums to 365, so
    // the walk above always breaks. Kept as a no-op safeguard.
    if day > 31 {
        month = 0;
        day -= 31;
    }

    WorldDate::new(year, month, day as u8)
}

/// Computes the day-count of the first day of a viewed month, relative
/// to an anchor day-count.
///
/// The signed month-delta between the anchor's own month and
/// `(viewed_year, viewed_month)` is walked one month at a time, summing
/// the lengths of the months passed over in the direction of travel.
/// Month lengths are irregular (28..=31 days), so stepping by any fixed
/// day count would drift; the walk is the only correct way to cross
/// months.
///
/// For a delta of zero the result is exactly the first day-count of the
/// anchor's own month. Viewed months before the epoch yield day-counts
/// of zero or below; [`weekday_offset`] handles those consistently.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayCount`] if `anchor_day_count < 1`,
/// or [`CalendarError::InvalidMonth`] if `viewed_month` is not in 0..=11.
pub fn first_day_count_of_month(
    anchor_day_count: i64,
    viewed_year: i32,
    viewed_month: u8,
) -> Result<i64, CalendarError> {
    if viewed_month >= MONTHS_PER_YEAR {
        return Err(CalendarError::InvalidMonth {
            month: viewed_month,
        });
    }
    let anchor = date_from_day_count(anchor_day_count)?;

    let delta = (i64::from(viewed_year) - i64::from(anchor.year())) * i64::from(MONTHS_PER_YEAR)
        + (i64::from(viewed_month) - i64::from(anchor.month()));

    let mut offset = 0i64;
    for i in 0..delta.unsigned_abs() {
        if delta > 0 {
            // Forward: months from the anchor's month onward.
            let m = (u64::from(anchor.month()) + i) % 12;
            offset += i64::from(MONTH_LENGTHS[m as usize]);
        } else {
            // Backward: months immediately before the anchor's month.
            let m = (i64::from(anchor.month()) - i as i64 - 1).rem_euclid(12);
            offset -= i64::from(MONTH_LENGTHS[m as usize]);
        }
    }

    let first_of_anchor_month = anchor_day_count - i64::from(anchor.day()) + 1;
    Ok(first_of_anchor_month + offset)
}

/// Returns the weekday column (0..=6) for the first day of a month.
///
/// The `(day_count + 6) mod 7` rotation is a display convention, not a
/// real-world weekday; existing stored calendars depend on exactly this
/// rotation, so it must not be "corrected" to a conventional weekday
/// epoch. The remainder is Euclidean so that months before the epoch
/// (day-counts of zero or below) still land in 0..=6 and stay aligned
/// with the column tiling on the other side of the boundary.
pub fn weekday_offset(first_day_count: i64) -> u8 {
    (first_day_count + 6).rem_euclid(7) as u8
}

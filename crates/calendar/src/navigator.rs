//! Month navigation state machine over the epoch converter.
//!
//! A [`Navigator`] owns the session anchor (the "days played" count,
//! fixed once set) and the currently viewed month, which moves
//! independently of the anchor one month at a time. All arithmetic is
//! delegated to the [`epoch`](crate::epoch) module.

use crate::date::WorldDate;
use crate::epoch::{date_from_day_count, first_day_count_of_month, weekday_offset};
use crate::error::CalendarError;
use crate::month::days_in_month;

/// Direction of a single month navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One month backward.
    Previous,
    /// One month forward.
    Next,
}

impl Direction {
    /// Returns the signed month delta for this direction.
    pub fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Everything a front end needs to draw one month of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderInfo {
    year: i32,
    month: u8,
    days_in_month: u8,
    weekday_offset: u8,
    highlighted_day: Option<u8>,
}

impl RenderInfo {
    /// Returns the viewed year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the viewed zero-based month (0..=11).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the number of days in the viewed month.
    pub fn days_in_month(self) -> u8 {
        self.days_in_month
    }

    /// Returns the weekday column (0..=6) of day 1 of the viewed month.
    pub fn weekday_offset(self) -> u8 {
        self.weekday_offset
    }

    /// Returns the anchor's day-of-month when the viewed month is the
    /// anchor's own month, `None` otherwise.
    pub fn highlighted_day(self) -> Option<u8> {
        self.highlighted_day
    }
}

/// An anchored session: the fixed anchor plus the movable viewed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewing {
    anchor_day_count: i64,
    anchor_date: WorldDate,
    viewed_year: i32,
    viewed_month: u8,
}

/// Month navigator: owns the session anchor and the viewed month.
///
/// A navigator starts unanchored; [`set_anchor`](Navigator::set_anchor)
/// derives the anchor's own month and makes it the viewed month.
/// Navigation then moves the viewed month without touching the anchor.
/// There is no terminal state; the navigator lives for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    state: Option<Viewing>,
}

impl Navigator {
    /// Creates an unanchored navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an anchor has been set.
    pub fn is_anchored(&self) -> bool {
        self.state.is_some()
    }

    /// Anchors the session at `day_count` and resets the viewed month to
    /// the anchor's own month.
    ///
    /// Re-anchoring an already anchored navigator starts a new session,
    /// matching the product behavior of re-entering "days played."
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayCount`] if `day_count < 1`; the
    /// previous session, if any, is left untouched on failure.
    pub fn set_anchor(&mut self, day_count: i64) -> Result<(), CalendarError> {
        let anchor_date = date_from_day_count(day_count)?;
        self.state = Some(Viewing {
            anchor_day_count: day_count,
            anchor_date,
            viewed_year: anchor_date.year(),
            viewed_month: anchor_date.month(),
        });
        Ok(())
    }

    /// Moves the viewed month one step, rolling the year over at the
    /// month 0/11 boundaries. Backward navigation is unbounded, so the
    /// viewed year may become negative.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::AnchorNotSet`] before `set_anchor`.
    pub fn navigate(&mut self, direction: Direction) -> Result<(), CalendarError> {
        let viewing = self.state.as_mut().ok_or(CalendarError::AnchorNotSet)?;
        match (viewing.viewed_month, direction) {
            (0, Direction::Previous) => {
                viewing.viewed_month = 11;
                viewing.viewed_year -= 1;
            }
            (11, Direction::Next) => {
                viewing.viewed_month = 0;
                viewing.viewed_year += 1;
            }
            (month, direction) => {
                viewing.viewed_month = (i32::from(month) + direction.delta()) as u8;
            }
        }
        Ok(())
    }

    /// Returns the currently viewed `(year, month)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::AnchorNotSet`] before `set_anchor`.
    pub fn viewed(&self) -> Result<(i32, u8), CalendarError> {
        let viewing = self.state.as_ref().ok_or(CalendarError::AnchorNotSet)?;
        Ok((viewing.viewed_year, viewing.viewed_month))
    }

    /// Computes the render contract for the viewed month.
    ///
    /// The highlighted day is present exactly when the viewed month is
    /// the anchor's own month, and is then the anchor's day-of-month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::AnchorNotSet`] before `set_anchor`.
    pub fn render_info(&self) -> Result<RenderInfo, CalendarError> {
        let viewing = self.state.as_ref().ok_or(CalendarError::AnchorNotSet)?;
        let first = first_day_count_of_month(
            viewing.anchor_day_count,
            viewing.viewed_year,
            viewing.viewed_month,
        )?;
        let on_anchor_month = viewing.viewed_year == viewing.anchor_date.year()
            && viewing.viewed_month == viewing.anchor_date.month();
        Ok(RenderInfo {
            year: viewing.viewed_year,
            month: viewing.viewed_month,
            days_in_month: days_in_month(viewing.viewed_month)?,
            weekday_offset: weekday_offset(first),
            highlighted_day: on_anchor_month.then_some(viewing.anchor_date.day()),
        })
    }
}

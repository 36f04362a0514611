//! # worldcal-calendar
//!
//! Pure date arithmetic and month navigation for the perpetual 365-day
//! world calendar.
//!
//! The world clock is a single integer: the number of days played. Day 1
//! is the first day of year 0, month 0; every year is exactly 365 days
//! (no leap day), so the calendar repeats forever with the same shape.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["day-count (>= 1)"] -->|"date_from_day_count()"| B["WorldDate"]
//!     A -->|"first_day_count_of_month()"| C["first day-count of viewed month"]
//!     C -->|"weekday_offset()"| D["column 0..=6"]
//!     B --> E["Navigator"]
//!     E -->|"render_info()"| F["RenderInfo"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use worldcal_calendar::{Direction, Navigator};
//!
//! let mut navigator = Navigator::new();
//! navigator.set_anchor(32)?; // 32 days played: year 0, month 1, day 1
//!
//! let info = navigator.render_info()?;
//! assert_eq!(info.highlighted_day(), Some(1));
//!
//! navigator.navigate(Direction::Next)?;
//! assert_eq!(navigator.render_info()?.highlighted_day(), None);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month-length table and constants |
//! | `date` | World calendar date value type |
//! | `epoch` | Day-count conversions and the weekday rotation |
//! | `navigator` | Anchor + viewed-month state machine |
//! | `error` | Error types |

mod date;
mod epoch;
mod error;
mod month;
mod navigator;

pub use date::WorldDate;
pub use epoch::{date_from_day_count, first_day_count_of_month, weekday_offset};
pub use error::CalendarError;
pub use month::{days_in_month, DAYS_PER_YEAR, MONTHS_PER_YEAR, MONTH_LENGTHS};
pub use navigator::{Direction, Navigator, RenderInfo};

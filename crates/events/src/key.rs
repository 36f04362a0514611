//! Typed calendar-date keys for event buckets.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EventError;

/// Key identifying one calendar date: year, zero-based month, 1-based day.
///
/// In memory the key stays fully typed; it serialises as the string
/// `"year-month-day"` (e.g. `"0-1-1"` for day 1 of month 1 of year 0)
/// only at the persistence boundary, where it is the document map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    month: u8,
    day: u8,
}

impl DateKey {
    /// Creates a new `DateKey`.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = EventError;

    /// Parses a `"year-month-day"` key.
    ///
    /// The year may be negative (months navigated before the epoch), so
    /// the string is split from the right: the last two segments are the
    /// month and day, everything before them is the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EventError::InvalidDateKey { key: s.to_string() };
        let (rest, day) = s.rsplit_once('-').ok_or_else(invalid)?;
        let (year, month) = rest.rsplit_once('-').ok_or_else(invalid)?;
        Ok(Self {
            year: year.parse().map_err(|_| invalid())?,
            month: month.parse().map_err(|_| invalid())?,
            day: day.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = DateKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date key of the form \"year-month-day\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DateKey, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_form() {
        assert_eq!(DateKey::new(0, 1, 1).to_string(), "0-1-1");
        assert_eq!(DateKey::new(12, 11, 31).to_string(), "12-11-31");
    }

    #[test]
    fn display_form_negative_year() {
        assert_eq!(DateKey::new(-1, 11, 5).to_string(), "-1-11-5");
    }

    #[test]
    fn parse_round_trip() {
        for key in [
            DateKey::new(0, 0, 1),
            DateKey::new(0, 1, 1),
            DateKey::new(57, 6, 14),
            DateKey::new(-3, 11, 31),
        ] {
            let parsed: DateKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "0", "0-1", "a-b-c", "0-1-1-1x", "--", "0-1-"] {
            assert!(
                bad.parse::<DateKey>().is_err(),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_error_carries_input() {
        let err = "nope".parse::<DateKey>().unwrap_err();
        assert_eq!(
            err,
            EventError::InvalidDateKey {
                key: "nope".to_string()
            }
        );
    }

    #[test]
    fn serde_uses_string_form() {
        let key = DateKey::new(0, 1, 1);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"0-1-1\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn ord_follows_year_month_day() {
        let a = DateKey::new(0, 1, 28);
        let b = DateKey::new(0, 2, 1);
        let c = DateKey::new(1, 0, 1);
        assert!(a < b);
        assert!(b < c);
    }
}

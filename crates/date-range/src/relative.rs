//! Factories for the previous, current and next unit instance.
//!
//! Functions take an explicit "now" so they stay deterministic under test;
//! [`DateRange::relative_to_now`] is the convenience wrapper that reads the
//! system clock.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dst::resolve_local;
use crate::error::{DateRangeError, Result};
use crate::range::DateRange;
use crate::unit::TimeUnit;

/// Which unit instance, relative to the one containing "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Last,
    #[default]
    This,
    Next,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Last => -1,
            Direction::This => 0,
            Direction::Next => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Last => "last",
            Direction::This => "this",
            Direction::Next => "next",
        })
    }
}

impl FromStr for Direction {
    type Err = DateRangeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" | "previous" => Ok(Direction::Last),
            "this" | "current" => Ok(Direction::This),
            "next" => Ok(Direction::Next),
            _ => Err(DateRangeError::UnsupportedDirection(s.to_string())),
        }
    }
}

impl DateRange {
    /// The unit instance before, containing, or after `now`.
    ///
    /// The shift starts from the beginning of the current instance, so "next
    /// month" from Jan 31 is February rather than March.
    ///
    /// # Errors
    /// Returns [`DateRangeError::OutOfRange`] at the edge of the representable range.
    pub fn for_relative_period(unit: TimeUnit, direction: Direction, now: DateTime<Tz>) -> Result<Self> {
        let anchor = unit.start_of(&now);
        let target = unit.add(direction.delta(), &anchor).ok_or_else(|| {
            DateRangeError::OutOfRange(format!("{} {} from {}", direction, unit, now))
        })?;
        Ok(Self::for_time_period(unit, target))
    }

    /// [`for_relative_period`](Self::for_relative_period) anchored at the system clock in `tz`.
    pub fn relative_to_now(unit: TimeUnit, direction: Direction, tz: Tz) -> Result<Self> {
        Self::for_relative_period(unit, direction, Utc::now().with_timezone(&tz))
    }

    /// The calendar month `month` (1-12) of `year` in `tz`.
    ///
    /// # Errors
    /// Returns [`DateRangeError::InvalidDatetime`] for a month outside 1-12 or
    /// a year chrono cannot represent.
    pub fn for_month(year: i32, month: u32, tz: Tz) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DateRangeError::InvalidDatetime(format!("no month {} in year {}", month, year)))?;
        let instant = resolve_local(&tz, first.and_time(NaiveTime::MIN));
        Ok(Self::for_time_period(TimeUnit::Month, instant))
    }
}

//! Calendar units and the boundary arithmetic built on them.
//!
//! Every operation on a [`DateRange`](crate::DateRange) that mentions a unit
//! bottoms out here: finding the first and last second of the hour/day/week/
//! month/year containing an instant, and adding whole units to an instant.
//! Weeks start on Monday (ISO 8601).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dst::resolve_local;
use crate::error::DateRangeError;

/// A calendar granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Where an instant sits within the unit instance containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Start,
    End,
}

impl TimeUnit {
    /// Every unit, in the order [`DateRange::time_period`](crate::DateRange::time_period)
    /// tries them. The first match wins.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
        TimeUnit::Hour,
    ];

    /// Lowercase name, matching the serde and `FromStr` spelling.
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// The first second of the unit instance containing `dt`.
    ///
    /// Sub-second precision is dropped. Hours are trimmed on the absolute
    /// timeline so that both occurrences of a repeated hour keep their own
    /// start; the other units resolve local midnight in `dt`'s timezone.
    pub fn start_of(self, dt: &DateTime<Tz>) -> DateTime<Tz> {
        match self {
            TimeUnit::Hour => {
                let into_hour = i64::from(dt.minute()) * 60 + i64::from(dt.second());
                *dt - Duration::seconds(into_hour) - Duration::nanoseconds(i64::from(dt.nanosecond()))
            }
            _ => {
                let first = self.first_day(dt.date_naive());
                resolve_local(&dt.timezone(), first.and_time(NaiveTime::MIN))
            }
        }
    }

    /// The last second of the unit instance containing `dt`, i.e. one second
    /// before the next instance starts.
    pub fn end_of(self, dt: &DateTime<Tz>) -> DateTime<Tz> {
        match self {
            TimeUnit::Hour => self.start_of(dt) + Duration::seconds(59 * 60 + 59),
            _ => {
                // Only the last representable instance has no successor.
                let next = self
                    .next_first_day(self.first_day(dt.date_naive()))
                    .unwrap_or(NaiveDate::MAX);
                resolve_local(&dt.timezone(), next.and_time(NaiveTime::MIN)) - Duration::seconds(1)
            }
        }
    }

    /// Add `n` units to `dt` (negative `n` subtracts).
    ///
    /// Hours move along the absolute timeline; days and weeks keep the
    /// wall-clock time. Months and years set the field directly and let an
    /// out-of-range day spill forward into the following month, so Jan 31
    /// plus one month lands on Mar 2 (or Mar 3 outside leap years).
    ///
    /// Returns `None` only when the result leaves chrono's representable range.
    pub fn add(self, n: i32, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let n = i64::from(n);
        match self {
            TimeUnit::Hour => dt.checked_add_signed(Duration::hours(n)),
            TimeUnit::Day => shift_wall_clock(dt, Duration::days(n)),
            TimeUnit::Week => shift_wall_clock(dt, Duration::weeks(n)),
            TimeUnit::Month => {
                let month_index = i64::from(dt.year()) * 12 + i64::from(dt.month0()) + n;
                with_month_index(dt, month_index)
            }
            TimeUnit::Year => {
                let month_index = (i64::from(dt.year()) + n) * 12 + i64::from(dt.month0());
                with_month_index(dt, month_index)
            }
        }
    }

    /// Whether `dt` is the first or last second of its unit instance.
    pub fn position_of(self, dt: &DateTime<Tz>) -> Option<Position> {
        if *dt == self.start_of(dt) {
            Some(Position::Start)
        } else if *dt == self.end_of(dt) {
            Some(Position::End)
        } else {
            None
        }
    }

    /// Snap `dt` to the given position within its unit instance.
    pub fn snap(self, position: Position, dt: &DateTime<Tz>) -> DateTime<Tz> {
        match position {
            Position::Start => self.start_of(dt),
            Position::End => self.end_of(dt),
        }
    }

    fn first_day(self, date: NaiveDate) -> NaiveDate {
        match self {
            TimeUnit::Hour | TimeUnit::Day => date,
            TimeUnit::Week => date.week(Weekday::Mon).first_day(),
            TimeUnit::Month => date - Duration::days(i64::from(date.day0())),
            TimeUnit::Year => date - Duration::days(i64::from(date.ordinal0())),
        }
    }

    /// First day of the instance after the one starting on `first`.
    fn next_first_day(self, first: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeUnit::Hour | TimeUnit::Day => first.succ_opt(),
            TimeUnit::Week => first.checked_add_days(Days::new(7)),
            TimeUnit::Month => match first.month() {
                12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
                m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
            },
            TimeUnit::Year => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let unit = match normalized.strip_suffix('s').unwrap_or(&normalized) {
            "hour" => TimeUnit::Hour,
            "day" => TimeUnit::Day,
            "week" => TimeUnit::Week,
            "month" => TimeUnit::Month,
            "year" => TimeUnit::Year,
            _ => return Err(DateRangeError::UnsupportedTimePeriod(s.to_string())),
        };
        Ok(unit)
    }
}

fn shift_wall_clock(dt: &DateTime<Tz>, delta: Duration) -> Option<DateTime<Tz>> {
    let shifted = dt.naive_local().checked_add_signed(delta)?;
    Some(resolve_local(&dt.timezone(), shifted))
}

/// Move `dt` to the month `month_index` (`year * 12 + month0`), keeping the
/// day-of-month and wall-clock time. Days past the end of the target month
/// spill into the next one.
fn with_month_index(dt: &DateTime<Tz>, month_index: i64) -> Option<DateTime<Tz>> {
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(Duration::days(i64::from(dt.day0())))?;
    Some(resolve_local(&dt.timezone(), date.and_time(dt.time())))
}

//! Shifting ranges by whole calendar units.
//!
//! Hours, days and weeks have fixed lengths on the wall clock, so shifting
//! them is plain addition. Months and years do not: Jan 31 plus one month has
//! no canonical answer. The native behaviour lets the surplus days spill into
//! the following month (Mar 2); with `rollover` disabled the date is clamped to
//! the last day of the intended month instead, keeping its time of day.

use chrono::{DateTime, Datelike, NaiveTime, Timelike};
use chrono_tz::Tz;

use crate::dst::resolve_local;
use crate::error::{DateRangeError, Result};
use crate::range::DateRange;
use crate::unit::TimeUnit;

/// Policies applied by [`DateRange::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetOptions {
    /// Let month/year shifts spill into the following month when the
    /// day-of-month does not exist in the target month.
    pub rollover: bool,
    /// A bound sitting on the first or last second of its unit instance is
    /// re-snapped to the same position after the shift, so "end of month"
    /// stays "end of month" whatever the month lengths.
    pub keep_position: bool,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            rollover: true,
            keep_position: false,
        }
    }
}

impl DateRange {
    /// Shift both bounds by `count` instances of `unit` (negative moves back).
    ///
    /// A missing bound stays missing. The timezone is carried over; the name is not.
    ///
    /// # Errors
    /// Returns [`DateRangeError::OutOfRange`] if a shifted bound leaves the
    /// representable date range.
    pub fn offset(&self, count: i32, unit: TimeUnit, options: OffsetOptions) -> Result<Self> {
        let after = self
            .after()
            .map(|bound| offset_bound(bound, count, unit, options))
            .transpose()?;
        let before = self
            .before()
            .map(|bound| offset_bound(bound, count, unit, options))
            .transpose()?;

        Self::new(after, before)
    }
}

fn offset_bound(bound: DateTime<Tz>, count: i32, unit: TimeUnit, options: OffsetOptions) -> Result<DateTime<Tz>> {
    let position = unit.position_of(&bound);

    let mut shifted = unit.add(count, &bound).ok_or_else(|| {
        DateRangeError::OutOfRange(format!("{} shifted by {} {}(s)", bound, count, unit))
    })?;

    if !options.rollover {
        let expected_month = match unit {
            TimeUnit::Month => Some(offset_month(bound.month(), count)),
            TimeUnit::Year => Some(bound.month()),
            TimeUnit::Hour | TimeUnit::Day | TimeUnit::Week => None,
        };

        if expected_month.is_some_and(|month| month != shifted.month()) {
            let clamped = clamp_to_previous_month_end(&shifted, &bound).ok_or_else(|| {
                DateRangeError::OutOfRange(format!("end of the month before {}", shifted))
            })?;
            tracing::debug!(%bound, rolled_over = %shifted, %clamped, "clamped rolled-over date to month end");
            shifted = clamped;
        }
    }

    if options.keep_position {
        if let Some(position) = position {
            let snapped = unit.snap(position, &shifted);
            if snapped != shifted {
                tracing::debug!(%shifted, %snapped, ?position, %unit, "re-snapped bound to its period position");
            }
            shifted = snapped;
        }
    }

    Ok(shifted)
}

/// The month (1-12) reached from `month` after `count` months, ignoring days.
fn offset_month(month: u32, count: i32) -> u32 {
    let index = (i64::from(month) - 1 + i64::from(count)).rem_euclid(12);
    // rem_euclid(12) is always within 0..12.
    index as u32 + 1
}

/// Undo a month overflow: the last day of the month before `rolled`, at the
/// hour, minute and second of `original`.
fn clamp_to_previous_month_end(rolled: &DateTime<Tz>, original: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let last_day = rolled.date_naive().with_day(1)?.pred_opt()?;
    let time = NaiveTime::from_hms_opt(original.hour(), original.minute(), original.second())?;
    Some(resolve_local(&rolled.timezone(), last_day.and_time(time)))
}

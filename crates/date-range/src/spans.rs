//! Alignment of a range with exactly one calendar unit instance.
//!
//! A range "spans" a unit when its lower bound is the last second of one
//! instance, its upper bound is the first second of another, and only a single
//! instance lies between them. For example, after Monday 23:59:59 and before
//! Wednesday 00:00:00 spans one day (Tuesday).

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::range::{one_second, DateRange};
use crate::unit::TimeUnit;

/// Result of [`DateRange::spans`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "start", rename_all = "snake_case")]
pub enum Span {
    /// The range is open on at least one side; no single period can apply.
    NotApplicable,
    /// The range is bounded but does not cover exactly one unit instance.
    NotAligned,
    /// The range covers exactly one unit instance, which begins here.
    Aligned(DateTime<Tz>),
}

impl Span {
    /// The start of the spanned instance, if aligned.
    pub fn aligned(self) -> Option<DateTime<Tz>> {
        match self {
            Span::Aligned(start) => Some(start),
            Span::NotApplicable | Span::NotAligned => None,
        }
    }

    pub fn is_aligned(self) -> bool {
        matches!(self, Span::Aligned(_))
    }
}

impl DateRange {
    /// Check whether the range covers exactly one instance of `unit`.
    pub fn spans(&self, unit: TimeUnit) -> Span {
        let (Some(after), Some(before)) = (self.after(), self.before()) else {
            return Span::NotApplicable;
        };
        if !self.is_bounded() {
            return Span::NotApplicable;
        }

        // The lower bound must be the last second of an instance...
        if unit.end_of(&after) != after {
            tracing::trace!(%after, %unit, "lower bound is not at the end of a period");
            return Span::NotAligned;
        }

        // ...and the upper bound the first second of one.
        if unit.start_of(&before) != before {
            tracing::trace!(%before, %unit, "upper bound is not at the start of a period");
            return Span::NotAligned;
        }

        // Rejects ranges two or more instances wide.
        let start = after + one_second();
        if unit.start_of(&(before - one_second())) != start {
            tracing::trace!(%after, %before, %unit, "range covers more than one period");
            return Span::NotAligned;
        }

        Span::Aligned(start)
    }

    /// The first unit, in [`TimeUnit::ALL`] order, that the range spans.
    pub fn time_period(&self) -> Option<TimeUnit> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| self.spans(*unit).is_aligned())
    }
}

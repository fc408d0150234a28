//! The [`DateRange`] value: construction, bound accessors and predicates.
//!
//! Both bounds are stored *exclusively*: `after` is the instant immediately
//! before the range begins and `before` the instant immediately after it ends.
//! A missing bound means the range is unbounded on that side. Inclusive
//! `start()`/`end()` are derived by moving one second inwards.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{DateRangeError, Result};
use crate::unit::TimeUnit;

/// One second, the resolution at which exclusive and inclusive bounds differ.
pub(crate) fn one_second() -> Duration {
    Duration::seconds(1)
}

/// An interval between two optional, exclusive bounds in a single timezone.
///
/// Equality compares bounds and timezone; the name is a label only.
#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    after: Option<DateTime<Tz>>,
    before: Option<DateTime<Tz>>,
    timezone: Tz,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl DateRange {
    /// Build a range from exclusive bounds.
    ///
    /// # Errors
    /// Returns [`DateRangeError::MissingBounds`] if both bounds are `None` and
    /// [`DateRangeError::TimezoneMismatch`] if the bounds carry different timezones.
    pub fn new(after: Option<DateTime<Tz>>, before: Option<DateTime<Tz>>) -> Result<Self> {
        let timezone = match (&after, &before) {
            (None, None) => return Err(DateRangeError::MissingBounds),
            (Some(a), Some(b)) => {
                let (a_tz, b_tz) = (a.timezone(), b.timezone());
                if a_tz.name() != b_tz.name() {
                    return Err(DateRangeError::TimezoneMismatch {
                        after: a_tz.name().to_string(),
                        before: b_tz.name().to_string(),
                    });
                }
                a_tz
            }
            (Some(a), None) => a.timezone(),
            (None, Some(b)) => b.timezone(),
        };

        Ok(Self {
            after,
            before,
            timezone,
            name: None,
        })
    }

    /// Callers guarantee at least one bound and a shared timezone.
    pub(crate) fn from_bounds(after: Option<DateTime<Tz>>, before: Option<DateTime<Tz>>, timezone: Tz) -> Self {
        Self {
            after,
            before,
            timezone,
            name: None,
        }
    }

    /// Attach a label to the range.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// An inclusive range: `from` is the first second inside it, `to` the last.
    pub fn between(from: DateTime<Tz>, to: DateTime<Tz>) -> Result<Self> {
        Self::new(Some(from - one_second()), Some(to + one_second()))
    }

    /// Everything strictly before `before`.
    pub fn open_started(before: DateTime<Tz>) -> Self {
        let timezone = before.timezone();
        Self::from_bounds(None, Some(before), timezone)
    }

    /// Everything strictly after `after`.
    pub fn open_ended(after: DateTime<Tz>) -> Self {
        let timezone = after.timezone();
        Self::from_bounds(Some(after), None, timezone)
    }

    /// The range covering exactly the unit instance that contains `instant`.
    pub fn for_time_period(unit: TimeUnit, instant: DateTime<Tz>) -> Self {
        let start = unit.start_of(&instant);
        let end = unit.end_of(&instant);
        Self::from_bounds(
            Some(start - one_second()),
            Some(end + one_second()),
            instant.timezone(),
        )
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The exclusive lower bound.
    pub fn after(&self) -> Option<DateTime<Tz>> {
        self.after
    }

    /// The exclusive upper bound.
    pub fn before(&self) -> Option<DateTime<Tz>> {
        self.before
    }

    /// The first second inside the range.
    pub fn start(&self) -> Option<DateTime<Tz>> {
        self.after.map(|after| after + one_second())
    }

    /// The last second inside the range.
    pub fn end(&self) -> Option<DateTime<Tz>> {
        self.before.map(|before| before - one_second())
    }

    /// Both bounds, when present, with `before <= after` counts as degenerate
    /// and is reported as open on both sides.
    fn is_degenerate(&self) -> bool {
        matches!((self.after, self.before), (Some(after), Some(before)) if before <= after)
    }

    /// No upper bound (or a degenerate one).
    pub fn is_open_ended(&self) -> bool {
        self.before.is_none() || self.is_degenerate()
    }

    /// No lower bound (or a degenerate one).
    pub fn is_open_started(&self) -> bool {
        self.after.is_none() || self.is_degenerate()
    }

    pub fn is_bounded(&self) -> bool {
        !self.is_open_ended() && !self.is_open_started()
    }

    /// `after` lies strictly past `before`, as produced by [`invert`](Self::invert).
    pub fn is_inverted(&self) -> bool {
        matches!((self.after, self.before), (Some(after), Some(before)) if after > before)
    }

    /// Whether `instant` lies strictly between the bounds.
    ///
    /// A missing bound does not constrain its side, so an open-ended range
    /// contains every instant after its lower bound.
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        self.after.is_none_or(|after| *instant > after)
            && self.before.is_none_or(|before| *instant < before)
    }

    /// Whole days between the exclusive bounds, counted on the wall clock of
    /// the range's timezone, so a 23-hour spring-forward day still counts.
    ///
    /// # Errors
    /// Returns [`DateRangeError::Unbounded`] for open-ended or open-started ranges.
    pub fn days(&self) -> Result<i64> {
        match (self.after, self.before) {
            (Some(after), Some(before)) if self.is_bounded() => {
                Ok((before.naive_local() - after.naive_local()).num_days())
            }
            _ => Err(DateRangeError::Unbounded),
        }
    }

    /// Swap the bounds, re-exclusivizing each: the new `after` is the old
    /// inclusive end and the new `before` the old inclusive start.
    pub fn invert(&self) -> Self {
        Self::from_bounds(self.end(), self.start(), self.timezone)
    }

    /// Fold ranges into one whose `after` is the latest lower bound and whose
    /// `before` is the earliest upper bound.
    ///
    /// This is an intersection of the inputs' extremes, not a union. Inputs
    /// that do not overlap produce a degenerate range (`before <= after`).
    ///
    /// # Errors
    /// Returns [`DateRangeError::MissingBounds`] when no input contributes a bound.
    pub fn combine<'a, I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a DateRange>,
    {
        let (after, before) = ranges.into_iter().fold(
            (None, None),
            |(after, before): (Option<DateTime<Tz>>, Option<DateTime<Tz>>), range| {
                let after = match (after, range.after) {
                    (Some(acc), Some(cur)) => Some(acc.max(cur)),
                    (acc, cur) => acc.or(cur),
                };
                let before = match (before, range.before) {
                    (Some(acc), Some(cur)) => Some(acc.min(cur)),
                    (acc, cur) => acc.or(cur),
                };
                (after, before)
            },
        );

        Self::new(after, before)
    }
}

impl PartialEq for DateRange {
    fn eq(&self, other: &Self) -> bool {
        self.after == other.after && self.before == other.before && self.timezone == other.timezone
    }
}

impl Eq for DateRange {}

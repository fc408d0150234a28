//! Human-readable rendering of ranges.
//!
//! [`DateRange::for_humans_at`] prefers short relative phrases ("Tomorrow",
//! "Last Week", "In March") whenever the range spans a single day, week, month
//! or year, and falls back to spelling out the inclusive bounds. All relative
//! comparisons are made in the range's own timezone.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::range::DateRange;
use crate::unit::TimeUnit;

/// Glue placed between the two dates of a bounded range.
pub const DEFAULT_GLUE: &str = " to ";

impl DateRange {
    /// Describe the range relative to the system clock.
    pub fn for_humans(&self, glue: &str) -> String {
        self.for_humans_at(glue, Utc::now())
    }

    /// Describe the range relative to `now`.
    pub fn for_humans_at(&self, glue: &str, now: DateTime<Utc>) -> String {
        if !self.is_bounded() {
            return self.to_inclusive_string(glue);
        }

        let now = now.with_timezone(&self.timezone());

        if let Some(day) = self.spans(TimeUnit::Day).aligned() {
            return describe_day(&day, &now).unwrap_or_else(|| self.to_inclusive_string(glue));
        }

        if let Some(week) = self.spans(TimeUnit::Week).aligned() {
            return describe_week(&week, &now).unwrap_or_else(|| self.to_inclusive_string(glue));
        }

        if let Some(month) = self.spans(TimeUnit::Month).aligned() {
            return if month.year() != now.year() {
                format!("In {}", month.format("%B %Y"))
            } else {
                format!("In {}", month.format("%B"))
            };
        }

        if let Some(year) = self.spans(TimeUnit::Year).aligned() {
            return format!("In {}", year.year());
        }

        self.to_inclusive_string(glue)
    }

    /// The inclusive bounds as long dates, e.g.
    /// `"Thursday 1st of February 2024 to Thursday 29th of February 2024"`.
    ///
    /// Open ranges read `"Before <end>"` or `"After <start>"`.
    pub fn to_inclusive_string(&self, glue: &str) -> String {
        self.render_inclusive(glue, long_date)
    }

    /// Like [`to_inclusive_string`](Self::to_inclusive_string) with a chrono
    /// `strftime` pattern for each date.
    pub fn format_inclusive(&self, pattern: &str, glue: &str) -> String {
        self.render_inclusive(glue, |dt| dt.format(pattern).to_string())
    }

    fn render_inclusive<F>(&self, glue: &str, render: F) -> String
    where
        F: Fn(&DateTime<Tz>) -> String,
    {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => format!("{}{}{}", render(&start), glue, render(&end)),
            (Some(start), None) => format!("After {}", render(&start)),
            (None, Some(end)) => format!("Before {}", render(&end)),
            (None, None) => String::new(),
        }
    }
}

/// Renders the exclusive bounds in long-date form.
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.after(), self.before()) {
            (Some(after), _) if self.is_open_ended() => write!(f, "After {}", long_date(&after)),
            (_, Some(before)) if self.is_open_started() => write!(f, "Before {}", long_date(&before)),
            (Some(after), Some(before)) => {
                write!(f, "{}{}{}", long_date(&after), DEFAULT_GLUE, long_date(&before))
            }
            _ => Ok(()),
        }
    }
}

/// Start of the `unit` instance `n` steps away from the one containing `now`.
fn relative_start(unit: TimeUnit, n: i32, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    unit.add(n, &unit.start_of(now)).map(|dt| unit.start_of(&dt))
}

fn describe_day(day: &DateTime<Tz>, now: &DateTime<Tz>) -> Option<String> {
    let day_start = TimeUnit::Day.start_of(day);
    for (n, phrase) in [(0, "Today"), (1, "Tomorrow"), (-1, "Yesterday")] {
        if relative_start(TimeUnit::Day, n, now) == Some(day_start) {
            return Some(phrase.to_string());
        }
    }

    let week_start = TimeUnit::Week.start_of(day);
    let weekday = day.format("%A");
    for (n, prefix) in [(0, "On"), (-1, "Last"), (1, "Next")] {
        if relative_start(TimeUnit::Week, n, now) == Some(week_start) {
            return Some(format!("{} {}", prefix, weekday));
        }
    }

    None
}

fn describe_week(week: &DateTime<Tz>, now: &DateTime<Tz>) -> Option<String> {
    let week_start = TimeUnit::Week.start_of(week);
    for (n, phrase) in [(0, "This Week"), (-1, "Last Week"), (1, "Next Week")] {
        if relative_start(TimeUnit::Week, n, now) == Some(week_start) {
            return Some(phrase.to_string());
        }
    }
    None
}

/// `"Thursday 1st of February 2024"`.
pub fn long_date(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {}{} of {}",
        dt.format("%A"),
        dt.day(),
        ordinal_suffix(dt.day()),
        dt.format("%B %Y")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

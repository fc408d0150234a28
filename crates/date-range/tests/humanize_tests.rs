//! Tests for human-readable rendering.
//!
//! Every phrase is checked against a fixed "now" of Wednesday 31 January 2024,
//! 15:00 UTC.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use date_range::humanize::DEFAULT_GLUE;
use date_range::{DateRange, TimeUnit};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Tz> {
    Tz::UTC.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 31, 15, 0, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> DateRange {
    DateRange::for_time_period(TimeUnit::Day, utc(y, m, d, 12, 0, 0))
}

fn week(y: i32, m: u32, d: u32) -> DateRange {
    DateRange::for_time_period(TimeUnit::Week, utc(y, m, d, 12, 0, 0))
}

fn humanize(range: &DateRange) -> String {
    range.for_humans_at(DEFAULT_GLUE, now())
}

// ── Days ────────────────────────────────────────────────────────────────────

#[test]
fn today_tomorrow_yesterday() {
    assert_eq!(humanize(&day(2024, 1, 31)), "Today");
    assert_eq!(humanize(&day(2024, 2, 1)), "Tomorrow");
    assert_eq!(humanize(&day(2024, 1, 30)), "Yesterday");
}

#[test]
fn other_day_in_current_week() {
    assert_eq!(humanize(&day(2024, 1, 29)), "On Monday");
    assert_eq!(humanize(&day(2024, 2, 4)), "On Sunday");
}

#[test]
fn day_in_last_and_next_week() {
    assert_eq!(humanize(&day(2024, 1, 24)), "Last Wednesday");
    assert_eq!(humanize(&day(2024, 2, 7)), "Next Wednesday");
}

#[test]
fn other_day_is_spelled_out() {
    assert_eq!(
        humanize(&day(2024, 3, 15)),
        "Friday 15th of March 2024 to Friday 15th of March 2024"
    );
}

#[test]
fn today_is_judged_in_the_range_timezone() {
    // 15:00 UTC on Jan 31 is 00:00 on Feb 1 in Tokyo.
    let tokyo = Tz::Asia__Tokyo;
    let range = DateRange::for_time_period(TimeUnit::Day, tokyo.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap());
    assert_eq!(humanize(&range), "Today");
}

// ── Weeks ───────────────────────────────────────────────────────────────────

#[test]
fn this_last_and_next_week() {
    assert_eq!(humanize(&week(2024, 1, 31)), "This Week");
    assert_eq!(humanize(&week(2024, 1, 24)), "Last Week");
    assert_eq!(humanize(&week(2024, 2, 7)), "Next Week");
}

#[test]
fn other_week_is_spelled_out() {
    assert_eq!(
        humanize(&week(2024, 3, 13)),
        "Monday 11th of March 2024 to Sunday 17th of March 2024"
    );
}

// ── Months and years ────────────────────────────────────────────────────────

#[test]
fn month_in_current_year_omits_year() {
    let february = DateRange::for_month(2024, 2, Tz::UTC).unwrap();
    assert_eq!(humanize(&february), "In February");
}

#[test]
fn month_in_other_year_includes_year() {
    let february = DateRange::for_month(2023, 2, Tz::UTC).unwrap();
    assert_eq!(humanize(&february), "In February 2023");
}

#[test]
fn whole_year() {
    let year = DateRange::for_time_period(TimeUnit::Year, utc(2022, 7, 1, 0, 0, 0));
    assert_eq!(humanize(&year), "In 2022");
}

// ── Fallbacks ───────────────────────────────────────────────────────────────

#[test]
fn unaligned_range_is_spelled_out() {
    let range = DateRange::between(utc(2024, 1, 10, 0, 0, 0), utc(2024, 1, 12, 23, 59, 59)).unwrap();
    assert_eq!(
        humanize(&range),
        "Wednesday 10th of January 2024 to Friday 12th of January 2024"
    );
    assert_eq!(
        range.for_humans_at(" until ", now()),
        "Wednesday 10th of January 2024 until Friday 12th of January 2024"
    );
}

#[test]
fn open_ranges_use_before_and_after() {
    let open_ended = DateRange::open_ended(utc(2024, 1, 9, 23, 59, 59));
    let open_started = DateRange::open_started(utc(2024, 1, 13, 0, 0, 0));
    assert_eq!(humanize(&open_ended), "After Wednesday 10th of January 2024");
    assert_eq!(humanize(&open_started), "Before Friday 12th of January 2024");
}

#[test]
fn hour_range_falls_back_to_dates() {
    let hour = DateRange::for_time_period(TimeUnit::Hour, utc(2024, 1, 31, 10, 15, 0));
    assert_eq!(
        humanize(&hour),
        "Wednesday 31st of January 2024 to Wednesday 31st of January 2024"
    );
}

// ── Other renderings ────────────────────────────────────────────────────────

#[test]
fn format_inclusive_uses_strftime_pattern() {
    let range = day(2024, 2, 1);
    assert_eq!(
        range.format_inclusive("%Y-%m-%d %H:%M:%S", " / "),
        "2024-02-01 00:00:00 / 2024-02-01 23:59:59"
    );
}

#[test]
fn display_shows_exclusive_bounds() {
    assert_eq!(
        day(2024, 2, 1).to_string(),
        "Wednesday 31st of January 2024 to Friday 2nd of February 2024"
    );
    assert_eq!(
        DateRange::open_ended(utc(2024, 1, 9, 23, 59, 59)).to_string(),
        "After Tuesday 9th of January 2024"
    );
    assert_eq!(
        DateRange::open_started(utc(2024, 1, 13, 0, 0, 0)).to_string(),
        "Before Saturday 13th of January 2024"
    );
}

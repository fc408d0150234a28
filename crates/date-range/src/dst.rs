//! Resolution of local wall-clock times around DST transitions.
//!
//! Calendar boundaries are computed as naive local times (midnight, the first
//! of the month, ...) and then pinned to an instant in the range's timezone.
//! Most of the time that mapping is one-to-one; around a transition it is not.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Longest stretch of wall-clock time a transition can remove.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Pin a naive local time to an instant in `tz`.
///
/// - Unique local times map directly.
/// - Ambiguous local times (clocks fall back) take the earliest instant.
/// - Nonexistent local times (clocks spring forward) shift forward to the
///   first representable minute after the gap.
pub fn resolve_local(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt;
    }

    let mut probe = naive;
    for _ in 0..MAX_GAP_MINUTES {
        probe += Duration::minutes(1);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            tracing::trace!(%naive, shifted = %probe, tz = tz.name(), "local time fell in a DST gap");
            return dt;
        }
    }

    // No zone has a gap this long; treat the wall-clock reading as UTC.
    tz.from_utc_datetime(&naive)
}

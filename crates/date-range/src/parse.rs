//! Timezone and datetime string parsing.
//!
//! Explicit inputs are never guessed at: a local time that is ambiguous or
//! does not exist in the requested zone is an error, unlike the calendar
//! boundaries computed internally (see [`crate::dst`]).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{DateRangeError, Result};

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse an IANA timezone name such as `"Europe/London"` or `"UTC"`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DateRangeError::InvalidTimezone(format!("'{}'", s)))
}

/// Parse a datetime into `tz`.
///
/// Accepts RFC 3339 (any offset; converted into `tz`), or a local
/// `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` (midnight)
/// interpreted in `tz`.
pub fn parse_datetime(s: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| DateRangeError::InvalidDatetime(format!("'{}'", s)))?;

    tz.from_local_datetime(&naive).single().ok_or_else(|| {
        DateRangeError::InvalidDatetime(format!(
            "'{}' is ambiguous or does not exist in {}",
            s,
            tz.name()
        ))
    })
}

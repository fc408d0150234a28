//! # date-range
//!
//! Exclusive-bound date ranges that know about calendar units.
//!
//! A [`DateRange`] stores the instant immediately *before* it begins and the
//! instant immediately *after* it ends, either of which may be missing. On top
//! of that representation the crate answers three questions that are easy to
//! get wrong by hand:
//!
//! - does the range cover exactly one hour/day/week/month/year? ([`DateRange::spans`])
//! - what does it look like shifted by N units, without days spilling into the
//!   next month? ([`DateRange::offset`])
//! - how would a person say it? ([`DateRange::for_humans`])
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::TimeZone;
//! use chrono_tz::Tz;
//! use date_range::{DateRange, OffsetOptions, Span, TimeUnit};
//!
//! let instant = Tz::UTC.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
//! let january = DateRange::for_time_period(TimeUnit::Month, instant);
//! assert!(matches!(january.spans(TimeUnit::Month), Span::Aligned(_)));
//!
//! let options = OffsetOptions { rollover: false, keep_position: true };
//! let february = january.offset(1, TimeUnit::Month, options).unwrap();
//! assert_eq!(february.time_period(), Some(TimeUnit::Month));
//! ```
//!
//! ## Modules
//!
//! - [`range`]: the `DateRange` value, construction and bound predicates
//! - [`unit`]: calendar units and the boundary arithmetic built on them
//! - [`spans`]: alignment of a range with one unit instance
//! - [`offset`]: shifting ranges by whole units with rollover control
//! - [`relative`]: last/this/next period factories
//! - [`humanize`]: human-readable rendering
//! - [`parse`]: timezone and datetime string parsing
//! - [`dst`]: resolution of local times around DST transitions
//! - [`error`]: Error types

pub mod dst;
pub mod error;
pub mod humanize;
pub mod offset;
pub mod parse;
pub mod range;
pub mod relative;
pub mod spans;
pub mod unit;

pub use error::{DateRangeError, Result};
pub use offset::OffsetOptions;
pub use parse::{parse_datetime, parse_timezone};
pub use range::DateRange;
pub use relative::Direction;
pub use spans::Span;
pub use unit::{Position, TimeUnit};

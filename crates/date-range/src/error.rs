//! Error types for date-range operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Either an after date or before date must be provided")]
    MissingBounds,

    #[error("Multiple timezones are not supported: after is {after}, before is {before}")]
    TimezoneMismatch { after: String, before: String },

    #[error("Unsupported time period '{0}'")]
    UnsupportedTimePeriod(String),

    #[error("Unsupported direction '{0}', expected last, this or next")]
    UnsupportedDirection(String),

    /// `days()` and friends are undefined without both bounds.
    #[error("The number of days cannot be calculated for ranges that are open ended or open started")]
    Unbounded,

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, DateRangeError>;

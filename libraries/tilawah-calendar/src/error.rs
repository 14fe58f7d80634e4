//! Error types for calendar conversion

use thiserror::Error;

/// Calendar errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside 1..=12
    #[error("Invalid Hijri month: {0}")]
    InvalidMonth(u8),

    /// Day outside the month
    #[error("Invalid day {day} for a month of {month_length} days")]
    InvalidDay { day: u8, month_length: u8 },

    /// Date outside the range chrono can represent
    #[error("Date out of range")]
    OutOfRange,
}

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;

//! Error type for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar/lunar conversion and pillar derivation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The date falls outside the 1900..=2100 lunar table.
    UnsupportedDateRange {
        /// Gregorian year that was requested.
        year: i32,
    },
    /// A lunar date that does not exist (month/day out of range, or a
    /// leap month the year does not have).
    InvalidDate(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedDateRange { year } => {
                write!(f, "year {year} outside supported range 1900-2100")
            }
            Self::InvalidDate(msg) => write!(f, "invalid lunar date: {msg}"),
        }
    }
}

impl Error for CalendarError {}

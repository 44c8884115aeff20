//! Error type for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_calendar::CalendarError;
use ziwei_core::BirthError;

/// Errors from natal chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The birth record failed validation.
    Birth(BirthError),
    /// Calendar conversion failed.
    Calendar(CalendarError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Birth(e) => write!(f, "chart: {e}"),
            Self::Calendar(e) => write!(f, "chart: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Birth(e) => Some(e),
            Self::Calendar(e) => Some(e),
        }
    }
}

impl From<BirthError> for ChartError {
    fn from(e: BirthError) -> Self {
        Self::Birth(e)
    }
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

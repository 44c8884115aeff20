//! Error type for fortune-period computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_calendar::CalendarError;
use ziwei_chart::ChartError;

/// Errors from limit and transit computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FortuneError {
    /// The underlying chart could not be computed.
    Chart(ChartError),
    /// Calendar conversion failed while spanning a period.
    Calendar(CalendarError),
    /// The age precedes the first major limit, which opens at the
    /// bureau number.
    PreLimitAge { age: u16, start_age: u16 },
    /// Nominal age outside the supported period range.
    AgeOutOfRange { age: u16 },
}

impl Display for FortuneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "fortune: {e}"),
            Self::Calendar(e) => write!(f, "fortune: {e}"),
            Self::PreLimitAge { age, start_age } => {
                write!(f, "age {age} precedes first major limit at age {start_age}")
            }
            Self::AgeOutOfRange { age } => write!(f, "age {age} out of range"),
        }
    }
}

impl Error for FortuneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChartError> for FortuneError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<CalendarError> for FortuneError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

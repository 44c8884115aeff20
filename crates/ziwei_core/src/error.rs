//! Error type for birth-record validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth-record validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BirthError {
    /// A field of the birth record is out of its valid range.
    InvalidBirthRecord(&'static str),
}

impl Display for BirthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthRecord(msg) => write!(f, "invalid birth record: {msg}"),
        }
    }
}

impl Error for BirthError {}

//! Birth record: the immutable input value of every chart computation.

use crate::error::BirthError;

/// Gender of the subject; drives the major-limit walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Chinese label (男/女).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// An immutable birth instant plus subject metadata.
///
/// Coordinates are optional and informational only; no true-solar-time
/// correction is applied to the hour pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthRecord {
    pub year: i32,
    /// Gregorian month, 1..=12.
    pub month: u8,
    /// Gregorian day of month.
    pub day: u8,
    /// Clock hour, 0..=23.
    pub hour: u8,
    /// Clock minute, 0..=59.
    pub minute: u8,
    pub gender: Gender,
    /// Degrees east, -180.0..=180.0.
    pub longitude: Option<f64>,
    /// Degrees north, -90.0..=90.0.
    pub latitude: Option<f64>,
}

impl BirthRecord {
    /// Record without coordinates.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            gender,
            longitude: None,
            latitude: None,
        }
    }

    /// Check every field range. Calendar-table coverage is checked
    /// separately by the calendar converter.
    pub fn validate(&self) -> Result<(), BirthError> {
        if self.month < 1 || self.month > 12 {
            return Err(BirthError::InvalidBirthRecord("month out of range 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(BirthError::InvalidBirthRecord("day invalid for month"));
        }
        if self.hour > 23 {
            return Err(BirthError::InvalidBirthRecord("hour out of range 0-23"));
        }
        if self.minute > 59 {
            return Err(BirthError::InvalidBirthRecord("minute out of range 0-59"));
        }
        if let Some(lon) = self.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Err(BirthError::InvalidBirthRecord("longitude out of range"));
        }
        if let Some(lat) = self.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(BirthError::InvalidBirthRecord("latitude out of range"));
        }
        Ok(())
    }
}

/// Gregorian month length, leap-aware.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

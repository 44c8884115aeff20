//! Lunisolar calendar conversion and ganzhi pillar derivation.
//!
//! This crate covers the calendar half of chart computation:
//! - Gregorian <-> lunisolar conversion over 1900..=2100, driven by a
//!   packed per-year month table
//! - The four ganzhi pillars of a civil moment (year, month, day,
//!   hour), including the 23:00 child-hour rule
//!
//! Pure table arithmetic; no astronomical ephemeris is consulted.

pub mod error;
pub mod lunar;
pub mod pillars;

pub use error::CalendarError;
pub use lunar::{
    LunarDate, SolarDate, days_in_lunar_month, days_in_lunar_year, leap_month, lunar_to_solar,
    solar_to_lunar,
};
pub use pillars::{
    FourPillars, Moment, day_pillar, four_pillars, hour_branch, hour_pillar, month_pillar,
    pillars_of, year_pillar,
};

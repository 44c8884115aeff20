//! Core value types for Zi Wei Dou Shu chart computation.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with sexagenary
//!   cycle and ring arithmetic
//! - The immutable `BirthRecord` input value and its validation
//!
//! Everything here is a plain value; no I/O, no shared state.

pub mod birth;
pub mod error;
pub mod stem_branch;

pub use birth::{BirthRecord, Gender, days_in_month, is_leap_year};
pub use error::BirthError;
pub use stem_branch::{ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem, StemBranch};

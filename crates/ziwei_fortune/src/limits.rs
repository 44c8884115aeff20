//! Major (decade) and minor (annual) limits.
//!
//! Major limits walk the ring one house per decade, starting at the
//! Life palace in the year the subject's nominal age equals the
//! bureau number. Yang-stem males and yin-stem females walk clockwise,
//! the other two pairings counter-clockwise. The minor limit walks one
//! house per year of age from a branch fixed by the year branch's
//! triplet, always clockwise.

use ziwei_core::{EarthlyBranch, Gender, HeavenlyStem};

use ziwei_chart::Chart;

use crate::error::FortuneError;

/// Walking direction around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitDirection {
    Clockwise,
    CounterClockwise,
}

impl LimitDirection {
    /// Signed step for one period in this direction.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// One ten-year major limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorLimit {
    /// 0-based decade number.
    pub ordinal: u8,
    /// First nominal age of the decade.
    pub start_age: u16,
    /// Last nominal age of the decade.
    pub end_age: u16,
    /// House the decade sits on.
    pub branch: EarthlyBranch,
}

/// Major-limit direction for a year stem and gender.
pub fn major_limit_direction(year_stem: HeavenlyStem, gender: Gender) -> LimitDirection {
    if year_stem.is_yang() == (gender == Gender::Male) {
        LimitDirection::Clockwise
    } else {
        LimitDirection::CounterClockwise
    }
}

/// All twelve major limits of a chart.
pub fn major_limits(chart: &Chart, gender: Gender) -> Vec<MajorLimit> {
    let direction = major_limit_direction(chart.pillars.year.stem, gender);
    let first = chart.bureau.number() as u16;
    (0..12u8)
        .map(|i| MajorLimit {
            ordinal: i,
            start_age: first + 10 * i as u16,
            end_age: first + 10 * i as u16 + 9,
            branch: chart.life_palace.step(direction.sign() * i as i32),
        })
        .collect()
}

/// Major limit covering a nominal age.
pub fn major_limit_at(chart: &Chart, gender: Gender, age: u16) -> Result<MajorLimit, FortuneError> {
    let first = chart.bureau.number() as u16;
    if age < first {
        return Err(FortuneError::PreLimitAge {
            age,
            start_age: first,
        });
    }
    let ordinal = (age - first) / 10;
    if ordinal >= 12 {
        return Err(FortuneError::AgeOutOfRange { age });
    }
    let direction = major_limit_direction(chart.pillars.year.stem, gender);
    Ok(MajorLimit {
        ordinal: ordinal as u8,
        start_age: first + 10 * ordinal,
        end_age: first + 10 * ordinal + 9,
        branch: chart.life_palace.step(direction.sign() * ordinal as i32),
    })
}

// Minor-limit start by year branch: triplet rule (寅午戌→辰, 申子辰→戌,
// 巳酉丑→未, 亥卯未→丑).
const MINOR_START: [u8; 12] = [10, 7, 4, 1, 10, 7, 4, 1, 10, 7, 4, 1];

/// House of the minor limit at a nominal age (age 1 = birth year).
///
/// The walk is clockwise for everyone.
pub fn minor_limit(chart: &Chart, age: u16) -> Result<EarthlyBranch, FortuneError> {
    if age == 0 {
        return Err(FortuneError::AgeOutOfRange { age });
    }
    let start =
        ziwei_core::ALL_BRANCHES[MINOR_START[chart.pillars.year.branch.index() as usize] as usize];
    Ok(start.step(age as i32 - 1))
}

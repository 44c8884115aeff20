//! Four ganzhi pillars (year, month, day, hour) for a civil moment.
//!
//! Year and month pillars follow the lunisolar calendar (they roll at
//! lunar new year, not January 1), the day pillar follows the
//! continuous sexagenary day count, and the hour pillar follows the
//! twelve double-hours. The 23:00 hour opens the next day's 子 hour,
//! so only the hour pillar's stem basis advances at 23:00; the day
//! pillar itself stays on the civil date.

use ziwei_core::{EarthlyBranch, HeavenlyStem, StemBranch};

use crate::error::CalendarError;
use crate::lunar::{LunarDate, SolarDate, solar_to_lunar};

/// Sexagenary count of JDN 0; (jdn + 49) mod 60 names the day.
const DAY_CYCLE_OFFSET: i64 = 49;

/// A civil date-time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub date: SolarDate,
    pub hour: u8,
    pub minute: u8,
}

impl Moment {
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            date: SolarDate::new(year, month, day),
            hour,
            minute,
        }
    }
}

/// The four ganzhi pillars of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

/// Double-hour branch of a clock hour; 23:00 and 00:00 are both 子.
pub const fn hour_branch(hour: u8) -> EarthlyBranch {
    ziwei_core::ALL_BRANCHES[((hour as usize + 1) / 2) % 12]
}

/// Year pillar of a lunar year: 甲子 at 1984 (continuous cycle since
/// the epoch, anchored via year - 4).
pub fn year_pillar(lunar_year: i32) -> StemBranch {
    StemBranch::from_count(lunar_year as i64 - 4)
}

/// Month pillar via the five-tigers rule: the 寅 month's stem is fixed
/// by the year stem's group, then stems run on through the months.
pub fn month_pillar(year_stem: HeavenlyStem, lunar_month: u8) -> StemBranch {
    let start = (year_stem.group() * 2 + 2) % 10;
    StemBranch {
        stem: HeavenlyStem::from_count(start as i64 + lunar_month as i64 - 1),
        branch: EarthlyBranch::from_count(2 + lunar_month as i64 - 1),
    }
}

/// Day pillar from the continuous sexagenary day count.
pub fn day_pillar(date: SolarDate) -> StemBranch {
    StemBranch::from_count(date.julian_day_number() + DAY_CYCLE_OFFSET)
}

/// Hour pillar via the five-rats rule: the 子 hour's stem is fixed by
/// the day stem's group. At 23:00 the stem basis is the next day.
pub fn hour_pillar(date: SolarDate, hour: u8) -> StemBranch {
    let mut jdn = date.julian_day_number();
    if hour == 23 {
        jdn += 1;
    }
    let day_stem = HeavenlyStem::from_count(jdn + DAY_CYCLE_OFFSET);
    let branch = hour_branch(hour);
    StemBranch {
        stem: HeavenlyStem::from_count(
            (day_stem.group() * 2) as i64 + branch.index() as i64,
        ),
        branch,
    }
}

/// All four pillars of a moment, lunisolar year/month included.
pub fn four_pillars(moment: &Moment) -> Result<FourPillars, CalendarError> {
    let lunar = solar_to_lunar(moment.date)?;
    Ok(pillars_of(moment, &lunar))
}

/// Pillars when the lunisolar date is already at hand.
pub fn pillars_of(moment: &Moment, lunar: &LunarDate) -> FourPillars {
    let year = year_pillar(lunar.year);
    FourPillars {
        year,
        month: month_pillar(year.stem, lunar.month),
        day: day_pillar(moment.date),
        hour: hour_pillar(moment.date, moment.hour),
    }
}

//! Chinese lunisolar calendar conversion, 1900..=2100.
//!
//! Each year is encoded as one packed word: the low nibble is the leap
//! month number (0 = no leap month), bits 15..4 flag months 1..12 as
//! big (30 days) or small (29 days), and bit 16 flags a big leap
//! month. The epoch is 1900-01-31, lunar new year of 1900.
//!
//! Clean-room: the packed-year encoding is the widely published
//! lunisolar table, public domain.

use crate::error::CalendarError;

/// Lunar new year of 1900 (1900-01-31) as a Julian day number.
const EPOCH_JDN: i64 = 2415051;

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

/// A Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl SolarDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Julian day number of this date (Gregorian calendar).
    pub fn julian_day_number(self) -> i64 {
        let a = (14 - self.month as i64) / 12;
        let y = self.year as i64 + 4800 - a;
        let m = self.month as i64 + 12 * a - 3;
        self.day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Inverse of [`SolarDate::julian_day_number`].
    pub fn from_jdn(jdn: i64) -> Self {
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146097;
        let c = a - 146097 * b / 4;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        Self {
            year: (100 * b + d - 4800 + m / 10) as i32,
            month: (m + 3 - 12 * (m / 10)) as u8,
            day: (e - (153 * m + 2) / 5 + 1) as u8,
        }
    }
}

/// A lunisolar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    /// Lunar year (the year whose new year this date follows).
    pub year: i32,
    /// Lunar month, 1..=12. A leap month carries its host month number.
    pub month: u8,
    /// Lunar day of month, 1..=30.
    pub day: u8,
    /// Whether this date is inside the intercalary (leap) month.
    pub is_leap: bool,
}

fn year_info(year: i32) -> Result<u32, CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::UnsupportedDateRange { year });
    }
    Ok(LUNAR_INFO[(year - FIRST_YEAR) as usize])
}

/// Leap month number of a lunar year, or 0 if it has none.
pub fn leap_month(year: i32) -> Result<u8, CalendarError> {
    Ok((year_info(year)? & 0xf) as u8)
}

/// Day count of one lunar month (29 or 30).
///
/// `leap` selects the intercalary month hosted by `month`; it is an
/// error if the year has no such leap month.
pub fn days_in_lunar_month(year: i32, month: u8, leap: bool) -> Result<u8, CalendarError> {
    let info = year_info(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidDate("month out of range 1-12"));
    }
    if leap {
        if (info & 0xf) as u8 != month {
            return Err(CalendarError::InvalidDate("year has no such leap month"));
        }
        return Ok(if info & 0x10000 != 0 { 30 } else { 29 });
    }
    Ok(if info & (0x8000 >> (month - 1)) != 0 {
        30
    } else {
        29
    })
}

/// Total day count of a lunar year (353..=385).
pub fn days_in_lunar_year(year: i32) -> Result<u16, CalendarError> {
    let info = year_info(year)?;
    let mut days = 0u16;
    for month in 1..=12u8 {
        days += if info & (0x8000 >> (month - 1)) != 0 {
            30
        } else {
            29
        };
    }
    if info & 0xf != 0 {
        days += if info & 0x10000 != 0 { 30 } else { 29 };
    }
    Ok(days)
}

/// Convert a Gregorian date to its lunisolar date.
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError> {
    let mut offset = date.julian_day_number() - EPOCH_JDN;
    if offset < 0 {
        return Err(CalendarError::UnsupportedDateRange { year: date.year });
    }
    let mut year = FIRST_YEAR;
    loop {
        let span = days_in_lunar_year(year)? as i64;
        if offset < span {
            break;
        }
        offset -= span;
        year += 1;
    }
    let leap = leap_month(year)?;
    for month in 1..=12u8 {
        let span = days_in_lunar_month(year, month, false)? as i64;
        if offset < span {
            return Ok(LunarDate {
                year,
                month,
                day: offset as u8 + 1,
                is_leap: false,
            });
        }
        offset -= span;
        if leap == month {
            let span = days_in_lunar_month(year, month, true)? as i64;
            if offset < span {
                return Ok(LunarDate {
                    year,
                    month,
                    day: offset as u8 + 1,
                    is_leap: true,
                });
            }
            offset -= span;
        }
    }
    // Twelve months plus any leap month always cover the year's span.
    Err(CalendarError::InvalidDate("offset beyond lunar year"))
}

/// Convert a lunisolar date back to its Gregorian date.
pub fn lunar_to_solar(lunar: &LunarDate) -> Result<SolarDate, CalendarError> {
    let span = days_in_lunar_month(lunar.year, lunar.month, lunar.is_leap)?;
    if lunar.day < 1 || lunar.day > span {
        return Err(CalendarError::InvalidDate("day invalid for lunar month"));
    }
    let mut offset: i64 = 0;
    for year in FIRST_YEAR..lunar.year {
        offset += days_in_lunar_year(year)? as i64;
    }
    let leap = leap_month(lunar.year)?;
    for month in 1..lunar.month {
        offset += days_in_lunar_month(lunar.year, month, false)? as i64;
        if leap == month {
            offset += days_in_lunar_month(lunar.year, month, true)? as i64;
        }
    }
    if lunar.is_leap {
        offset += days_in_lunar_month(lunar.year, lunar.month, false)? as i64;
    }
    offset += lunar.day as i64 - 1;
    Ok(SolarDate::from_jdn(EPOCH_JDN + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trips() {
        let date = SolarDate::new(1900, 1, 31);
        assert_eq!(date.julian_day_number(), EPOCH_JDN);
        let lunar = solar_to_lunar(date).unwrap();
        assert_eq!(
            lunar,
            LunarDate {
                year: 1900,
                month: 1,
                day: 1,
                is_leap: false
            }
        );
        assert_eq!(lunar_to_solar(&lunar).unwrap(), date);
    }

    #[test]
    fn jdn_known_dates() {
        assert_eq!(SolarDate::new(1990, 5, 15).julian_day_number(), 2448027);
        assert_eq!(SolarDate::new(2000, 1, 1).julian_day_number(), 2451545);
    }

    #[test]
    fn jdn_inverse() {
        for jdn in [2415051, 2448027, 2451545, 2488069] {
            assert_eq!(SolarDate::from_jdn(jdn).julian_day_number(), jdn);
        }
    }

    #[test]
    fn solar_1990_05_15() {
        let lunar = solar_to_lunar(SolarDate::new(1990, 5, 15)).unwrap();
        assert_eq!(
            lunar,
            LunarDate {
                year: 1990,
                month: 4,
                day: 21,
                is_leap: false
            }
        );
    }

    #[test]
    fn leap_month_1990_is_fifth() {
        assert_eq!(leap_month(1990).unwrap(), 5);
        assert_eq!(leap_month(1991).unwrap(), 0);
        assert_eq!(leap_month(2023).unwrap(), 2);
    }

    #[test]
    fn leap_month_dates_flagged() {
        // 1990 repeats month 5: the host month begins 1990-05-24 and
        // the intercalary month begins 30 days later on 1990-06-23.
        let host = solar_to_lunar(SolarDate::new(1990, 5, 24)).unwrap();
        assert_eq!((host.month, host.day, host.is_leap), (5, 1, false));
        let leap = solar_to_lunar(SolarDate::new(1990, 6, 23)).unwrap();
        assert_eq!((leap.month, leap.day, leap.is_leap), (5, 1, true));
    }

    #[test]
    fn lunar_new_year_2024() {
        let lunar = solar_to_lunar(SolarDate::new(2024, 2, 10)).unwrap();
        assert_eq!(
            lunar,
            LunarDate {
                year: 2024,
                month: 1,
                day: 1,
                is_leap: false
            }
        );
        // Eve still belongs to the previous lunar year.
        let eve = solar_to_lunar(SolarDate::new(2024, 2, 9)).unwrap();
        assert_eq!(eve.year, 2023);
    }

    #[test]
    fn mid_century_leap_months() {
        for (year, leap) in [(2050, 3), (2052, 8), (2055, 6), (2057, 0), (2058, 4), (2061, 3)] {
            assert_eq!(leap_month(year).unwrap(), leap, "year {year}");
        }
    }

    #[test]
    fn new_year_stays_in_late_winter() {
        // Lunar new year always falls between Jan 21 and Feb 21; any
        // accumulated table drift pushes it out of that window.
        for year in (FIRST_YEAR + 1)..=LAST_YEAR {
            let cny = lunar_to_solar(&LunarDate {
                year,
                month: 1,
                day: 1,
                is_leap: false,
            })
            .unwrap();
            assert_eq!(cny.year, year, "new year of {year}");
            let ok = match cny.month {
                1 => cny.day >= 21,
                2 => cny.day <= 21,
                _ => false,
            };
            assert!(ok, "new year of {year}: {}-{}", cny.month, cny.day);
        }
    }

    #[test]
    fn table_covers_its_last_day() {
        let lunar = solar_to_lunar(SolarDate::new(2100, 12, 31)).unwrap();
        assert_eq!(lunar.year, 2100);
    }

    #[test]
    fn year_lengths_plausible() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let days = days_in_lunar_year(year).unwrap();
            assert!((353..=385).contains(&days), "year {year}: {days}");
        }
        assert_eq!(days_in_lunar_year(2024).unwrap(), 354);
    }

    #[test]
    fn round_trip_across_years() {
        for (y, m, d) in [
            (1900, 2, 1),
            (1949, 10, 1),
            (1990, 5, 15),
            (2000, 12, 31),
            (2024, 6, 1),
            (2100, 12, 31),
        ] {
            let date = SolarDate::new(y, m, d);
            let lunar = solar_to_lunar(date).unwrap();
            assert_eq!(lunar_to_solar(&lunar).unwrap(), date, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            solar_to_lunar(SolarDate::new(1899, 6, 1)),
            Err(CalendarError::UnsupportedDateRange { year: 1899 })
        ));
        assert!(matches!(
            days_in_lunar_year(2101),
            Err(CalendarError::UnsupportedDateRange { year: 2101 })
        ));
    }

    #[test]
    fn bogus_leap_month_rejected() {
        // 1991 has no leap month at all.
        assert!(days_in_lunar_month(1991, 5, true).is_err());
        let bad = LunarDate {
            year: 1991,
            month: 5,
            day: 1,
            is_leap: true,
        };
        assert!(lunar_to_solar(&bad).is_err());
    }
}

//! Annual, monthly and daily transit overlays.
//!
//! A transit re-runs the whole chart pipeline on the target moment and
//! reports the solar date span the overlay is valid for. Overlay and
//! natal rings align by branch, so a caller can read both charts house
//! by house.

use ziwei_calendar::{
    LunarDate, Moment, SolarDate, days_in_lunar_month, days_in_lunar_year, lunar_to_solar,
};
use ziwei_chart::{Chart, chart_at};

use crate::error::FortuneError;

/// Granularity of a transit overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitKind {
    Annual,
    Monthly,
    Daily,
}

/// A transit overlay chart and its validity span.
#[derive(Debug, Clone, PartialEq)]
pub struct Transit {
    pub kind: TransitKind,
    /// Overlay chart computed for the target moment.
    pub chart: Chart,
    /// First solar day the overlay covers.
    pub first_day: SolarDate,
    /// Last solar day the overlay covers.
    pub last_day: SolarDate,
}

/// Transit overlay for a civil moment.
pub fn transit(kind: TransitKind, moment: &Moment) -> Result<Transit, FortuneError> {
    let chart = chart_at(moment)?;
    let lunar = chart.lunar;
    let (first_day, last_day) = span_of(kind, &lunar, moment.date)?;
    Ok(Transit {
        kind,
        chart,
        first_day,
        last_day,
    })
}

fn span_of(
    kind: TransitKind,
    lunar: &LunarDate,
    date: SolarDate,
) -> Result<(SolarDate, SolarDate), FortuneError> {
    match kind {
        TransitKind::Annual => {
            let first = lunar_to_solar(&LunarDate {
                year: lunar.year,
                month: 1,
                day: 1,
                is_leap: false,
            })?;
            let days = days_in_lunar_year(lunar.year)? as i64;
            let last = SolarDate::from_jdn(first.julian_day_number() + days - 1);
            Ok((first, last))
        }
        TransitKind::Monthly => {
            let first = lunar_to_solar(&LunarDate {
                year: lunar.year,
                month: lunar.month,
                day: 1,
                is_leap: lunar.is_leap,
            })?;
            let days = days_in_lunar_month(lunar.year, lunar.month, lunar.is_leap)? as i64;
            let last = SolarDate::from_jdn(first.julian_day_number() + days - 1);
            Ok((first, last))
        }
        TransitKind::Daily => Ok((date, date)),
    }
}

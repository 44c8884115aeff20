//! Cross-crate fortune flows over the worked natal example.

use ziwei_calendar::Moment;
use ziwei_chart::{Star, natal_chart};
use ziwei_core::{BirthRecord, Gender};
use ziwei_fortune::{TransitKind, major_limit_at, major_limits, minor_limit, transit};

fn golden(gender: Gender) -> ziwei_chart::Chart {
    natal_chart(&BirthRecord::new(1990, 5, 15, 14, 30, gender)).unwrap()
}

#[test]
fn decades_start_on_the_life_palace() {
    for gender in [Gender::Male, Gender::Female] {
        let chart = golden(gender);
        let limits = major_limits(&chart, gender);
        assert_eq!(limits[0].branch, chart.life_palace);
        assert_eq!(limits[0].start_age, chart.bureau.number() as u16);
    }
}

#[test]
fn decade_ages_tile_without_gaps() {
    let chart = golden(Gender::Male);
    let limits = major_limits(&chart, Gender::Male);
    for pair in limits.windows(2) {
        assert_eq!(pair[0].end_age + 1, pair[1].start_age);
    }
    // Point queries agree with the enumeration.
    for l in &limits {
        assert_eq!(major_limit_at(&chart, Gender::Male, l.start_age).unwrap(), *l);
        assert_eq!(major_limit_at(&chart, Gender::Male, l.end_age).unwrap(), *l);
    }
}

#[test]
fn minor_limit_full_cycle() {
    let chart = golden(Gender::Male);
    let first = minor_limit(&chart, 1).unwrap();
    for age in 1..=24u16 {
        let expect = first.step(age as i32 - 1);
        assert_eq!(minor_limit(&chart, age).unwrap(), expect);
    }
}

#[test]
fn transit_ring_aligns_with_natal_by_branch() {
    let natal = golden(Gender::Male);
    let annual = transit(TransitKind::Annual, &Moment::new(2024, 6, 1, 12, 0)).unwrap();
    for branch in ziwei_core::ALL_BRANCHES {
        assert_eq!(natal.house(branch).branch, annual.chart.house(branch).branch);
    }
    // The overlay has its own layout and marks.
    assert_eq!(annual.chart.pillars.year.name(), "甲辰");
    assert!(annual.chart.star_branch(Star::Ziwei).is_some());
}

#[test]
fn nested_spans_agree() {
    let moment = Moment::new(2024, 6, 1, 12, 0);
    let year = transit(TransitKind::Annual, &moment).unwrap();
    let month = transit(TransitKind::Monthly, &moment).unwrap();
    let day = transit(TransitKind::Daily, &moment).unwrap();
    assert!(year.first_day.julian_day_number() <= month.first_day.julian_day_number());
    assert!(month.last_day.julian_day_number() <= year.last_day.julian_day_number());
    assert!(day.first_day.julian_day_number() >= month.first_day.julian_day_number());
    assert!(day.last_day.julian_day_number() <= month.last_day.julian_day_number());
}

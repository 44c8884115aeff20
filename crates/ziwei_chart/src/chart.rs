//! Natal chart assembly: palaces, stars and transformations in one
//! twelve-house ring.

use ziwei_calendar::{FourPillars, LunarDate, Moment, pillars_of, solar_to_lunar};
use ziwei_core::{ALL_BRANCHES, BirthRecord, EarthlyBranch, HeavenlyStem};

use crate::bureau::{Bureau, bureau};
use crate::error::ChartError;
use crate::palace::{PalaceName, body_palace, house_stem, life_palace, palace_label};
use crate::star::{ALL_STARS, Star, place_stars};
use crate::transform::{Transformation, transformation_of};

/// A star as it sits in a house, with its transformation mark if the
/// chart's stem promotes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedStar {
    pub star: Star,
    pub transformation: Option<Transformation>,
}

/// One house of the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    pub branch: EarthlyBranch,
    pub stem: HeavenlyStem,
    pub label: PalaceName,
    /// Stars in catalogue order.
    pub stars: Vec<PlacedStar>,
}

/// A complete chart for one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub lunar: LunarDate,
    pub pillars: FourPillars,
    pub life_palace: EarthlyBranch,
    pub body_palace: EarthlyBranch,
    pub bureau: Bureau,
    /// Houses indexed by branch (0 = 子).
    pub houses: [House; 12],
}

impl Chart {
    /// House at a branch.
    pub fn house(&self, branch: EarthlyBranch) -> &House {
        &self.houses[branch.index() as usize]
    }

    /// House carrying a label.
    pub fn house_of(&self, label: PalaceName) -> &House {
        self.house(self.life_palace.step(label.index() as i32))
    }

    /// Branch a star landed on. Always present for catalogue stars.
    pub fn star_branch(&self, star: Star) -> Option<EarthlyBranch> {
        self.houses
            .iter()
            .find(|h| h.stars.iter().any(|p| p.star == star))
            .map(|h| h.branch)
    }

    /// The same layout re-marked with another stem's transformations.
    ///
    /// Used for transit overlays and what-if readings; the natal chart
    /// always carries its own year stem's marks.
    pub fn with_transformations(&self, stem: HeavenlyStem) -> Chart {
        let mut chart = self.clone();
        for house in &mut chart.houses {
            for placed in &mut house.stars {
                placed.transformation = transformation_of(stem, placed.star);
            }
        }
        chart
    }

    /// Houses touched by a stem's four transformations, in 祿權科忌
    /// order.
    pub fn transformation_houses(
        &self,
        stem: HeavenlyStem,
    ) -> [(Star, Transformation, Option<EarthlyBranch>); 4] {
        let stars = crate::transform::transformed_stars(stem);
        std::array::from_fn(|i| {
            (
                stars[i],
                crate::transform::ALL_TRANSFORMATIONS[i],
                self.star_branch(stars[i]),
            )
        })
    }

    /// Taichi relabel: treat `anchor` as the Life palace and reassign
    /// the eleven other labels clockwise from it. Stars, stems and the
    /// Body palace stay where they are.
    pub fn relabeled_from(&self, anchor: EarthlyBranch) -> Chart {
        let mut chart = self.clone();
        chart.life_palace = anchor;
        for house in &mut chart.houses {
            house.label = palace_label(anchor, house.branch);
        }
        chart
    }
}

/// Chart for an arbitrary civil moment.
///
/// This is the shared pipeline behind natal charts and transit
/// overlays; it applies no birth-record validation of its own.
pub fn chart_at(moment: &Moment) -> Result<Chart, ChartError> {
    let lunar = solar_to_lunar(moment.date)?;
    let pillars = pillars_of(moment, &lunar);
    let hour = pillars.hour.branch;

    let life = life_palace(lunar.month, hour);
    let body = body_palace(life, hour);
    let life_stem = house_stem(pillars.year.stem, life);
    let bureau = bureau(life_stem, life);
    let placements = place_stars(bureau, lunar.month, lunar.day, hour, pillars.year);

    let houses = std::array::from_fn(|i| {
        let branch = ALL_BRANCHES[i];
        let stars = ALL_STARS
            .iter()
            .zip(placements.iter())
            .filter(|(_, at)| **at == branch)
            .map(|(star, _)| PlacedStar {
                star: *star,
                transformation: transformation_of(pillars.year.stem, *star),
            })
            .collect();
        House {
            branch,
            stem: house_stem(pillars.year.stem, branch),
            label: palace_label(life, branch),
            stars,
        }
    });

    Ok(Chart {
        lunar,
        pillars,
        life_palace: life,
        body_palace: body,
        bureau,
        houses,
    })
}

/// Natal chart of a validated birth record.
pub fn natal_chart(record: &BirthRecord) -> Result<Chart, ChartError> {
    record.validate()?;
    let moment = Moment::new(
        record.year,
        record.month,
        record.day,
        record.hour,
        record.minute,
    );
    chart_at(&moment)
}

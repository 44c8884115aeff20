//! The twelve palaces: Life/Body location, labels and house stems.
//!
//! The Life palace anchors the ring; the other eleven labels run
//! clockwise from it in fixed order. House stems follow the
//! five-tigers rule from the year stem, same as month pillars.

use ziwei_core::{EarthlyBranch, HeavenlyStem};

/// The twelve palace labels, in clockwise order from Life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Servants,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All twelve labels in ring order (offset from the Life palace).
pub const ALL_PALACES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Servants,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

const PALACE_NAMES: [&str; 12] = [
    "命宮", "兄弟", "夫妻", "子女", "財帛", "疾厄", "遷移", "交友", "官祿", "田宅", "福德", "父母",
];

impl PalaceName {
    /// 0-based offset from the Life palace, clockwise.
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Servants => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    /// Chinese label.
    pub fn name(self) -> &'static str {
        PALACE_NAMES[self.index() as usize]
    }
}

/// Life palace branch: count forward from 寅 by (lunar month - 1),
/// then back by the hour branch.
pub fn life_palace(lunar_month: u8, hour: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::from_count(2 + lunar_month as i64 - 1 - hour.index() as i64)
}

/// Body palace branch: the Life palace shifted by an hour-dependent
/// even offset (子午 hours put it on the Life palace itself).
pub fn body_palace(life: EarthlyBranch, hour: EarthlyBranch) -> EarthlyBranch {
    const OFFSETS: [i32; 6] = [0, 10, 8, 6, 4, 2];
    life.step(OFFSETS[hour.index() as usize % 6])
}

/// House stem at a branch via the five-tigers rule: the 寅 house's
/// stem is fixed by the year stem's group, stems run on clockwise.
pub fn house_stem(year_stem: HeavenlyStem, branch: EarthlyBranch) -> HeavenlyStem {
    let start = (year_stem.group() * 2 + 2) % 10;
    HeavenlyStem::from_count(start as i64 + EarthlyBranch::Yin.distance_to(branch) as i64)
}

/// Label of the house at `branch`, given the Life palace anchor.
pub fn palace_label(life: EarthlyBranch, branch: EarthlyBranch) -> PalaceName {
    ALL_PALACES[life.distance_to(branch) as usize]
}

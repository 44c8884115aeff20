//! Heavenly stems, earthly branches and the sexagenary (ganzhi) cycle.
//!
//! The 10 stems and 12 branches combine into the 60-term cycle used to
//! label years, months, days and hours. Branch positions double as the
//! fixed 12-house ring of a chart, so `EarthlyBranch::step` is the one
//! ring-arithmetic primitive every other component builds on.
//!
//! Clean-room: standard sexagenary cycle, public domain.

/// The 10 heavenly stems (天干), 甲 = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    /// 0-based cycle index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Chinese character for the stem.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Stem from an arbitrary signed cycle count (taken mod 10).
    pub fn from_count(count: i64) -> Self {
        ALL_STEMS[count.rem_euclid(10) as usize]
    }

    /// Yang (奇) stems are the even-indexed ones: 甲丙戊庚壬.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Stem group for the paired dun-tables (甲己=0, 乙庚=1, ..).
    pub const fn group(self) -> u8 {
        self.index() % 5
    }
}

/// The 12 earthly branches (地支), 子 = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in ring order (index 0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl EarthlyBranch {
    /// 0-based ring index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Chinese character for the branch.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Branch from an arbitrary signed cycle count (taken mod 12).
    pub fn from_count(count: i64) -> Self {
        ALL_BRANCHES[count.rem_euclid(12) as usize]
    }

    /// Walk `steps` positions around the ring (negative = backwards).
    pub fn step(self, steps: i32) -> Self {
        Self::from_count(self.index() as i64 + steps as i64)
    }

    /// Signed-free ring distance walking clockwise from `self` to `other`.
    pub fn distance_to(self, other: Self) -> u8 {
        (other.index() as i64 - self.index() as i64).rem_euclid(12) as u8
    }
}

/// A stem-branch pillar, one term of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl StemBranch {
    /// Pillar from a continuous sexagenary count (mod 10 / mod 12).
    pub fn from_count(count: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_count(count),
            branch: EarthlyBranch::from_count(count),
        }
    }

    /// Two-character ganzhi name, e.g. "庚午".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn stem_yang_alternates() {
        assert!(HeavenlyStem::Jia.is_yang());
        assert!(!HeavenlyStem::Yi.is_yang());
        assert!(HeavenlyStem::Geng.is_yang());
        assert!(!HeavenlyStem::Gui.is_yang());
    }

    #[test]
    fn step_full_circle_is_identity() {
        for b in ALL_BRANCHES {
            assert_eq!(b.step(12), b);
            assert_eq!(b.step(-12), b);
            assert_eq!(b.step(0), b);
        }
    }

    #[test]
    fn step_is_symmetric() {
        for b in ALL_BRANCHES {
            for k in -25i32..=25 {
                assert_eq!(b.step(k).step(-k), b);
            }
        }
    }

    #[test]
    fn step_negative_wraps() {
        assert_eq!(EarthlyBranch::Zi.step(-1), EarthlyBranch::Hai);
        assert_eq!(EarthlyBranch::Chou.step(-2), EarthlyBranch::Hai);
    }

    #[test]
    fn distance_matches_step() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                let d = a.distance_to(b);
                assert_eq!(a.step(d as i32), b);
            }
        }
    }

    #[test]
    fn sexagenary_count_anchor() {
        // Count 0 = 甲子; count 16 = 庚辰 (day pillar of 1990-05-15).
        let p = StemBranch::from_count(16);
        assert_eq!(p.stem, HeavenlyStem::Geng);
        assert_eq!(p.branch, EarthlyBranch::Chen);
        assert_eq!(p.name(), "庚辰");
    }

    #[test]
    fn sexagenary_negative_count() {
        // -1 = 癸亥, the last term of the cycle.
        let p = StemBranch::from_count(-1);
        assert_eq!(p.name(), "癸亥");
    }

    #[test]
    fn stem_group_pairs() {
        assert_eq!(HeavenlyStem::Jia.group(), HeavenlyStem::Ji.group());
        assert_eq!(HeavenlyStem::Yi.group(), HeavenlyStem::Geng.group());
        assert_eq!(HeavenlyStem::Wu.group(), HeavenlyStem::Gui.group());
    }
}

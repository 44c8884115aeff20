//! The 28-star catalogue and its placement rules.
//!
//! Fourteen major stars hang off two anchors: Ziwei's branch comes
//! from a bureau-by-day table, Tianfu mirrors it across the 寅-申
//! axis, and the rest sit at fixed offsets from one or the other.
//! Fourteen minor stars place directly from the year pillar, lunar
//! month and hour branch.
//!
//! Clean-room: classical placement tables, public domain.

use ziwei_core::{EarthlyBranch, StemBranch};

use crate::bureau::Bureau;

/// Broad reading category of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarCategory {
    Major,
    Lucky,
    Malefic,
    PeachBlossom,
}

/// The 28 stars, catalogue order (majors first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
    Lucun,
    Qingyang,
    Tuoluo,
    Tiankui,
    Tianyue,
    Zuofu,
    Youbi,
    Tianma,
    Wenchang,
    Wenqu,
    Dikong,
    Dijie,
    Hongluan,
    Tianxi,
}

/// All 28 stars in catalogue order; placement arrays index by this.
pub const ALL_STARS: [Star; 28] = [
    Star::Ziwei,
    Star::Tianji,
    Star::Taiyang,
    Star::Wuqu,
    Star::Tiantong,
    Star::Lianzhen,
    Star::Tianfu,
    Star::Taiyin,
    Star::Tanlang,
    Star::Jumen,
    Star::Tianxiang,
    Star::Tianliang,
    Star::Qisha,
    Star::Pojun,
    Star::Lucun,
    Star::Qingyang,
    Star::Tuoluo,
    Star::Tiankui,
    Star::Tianyue,
    Star::Zuofu,
    Star::Youbi,
    Star::Tianma,
    Star::Wenchang,
    Star::Wenqu,
    Star::Dikong,
    Star::Dijie,
    Star::Hongluan,
    Star::Tianxi,
];

const STAR_NAMES: [&str; 28] = [
    "紫微", "天機", "太陽", "武曲", "天同", "廉貞", "天府", "太陰", "貪狼", "巨門", "天相", "天梁",
    "七殺", "破軍", "祿存", "擎羊", "陀羅", "天魁", "天鉞", "左輔", "右弼", "天馬", "文昌", "文曲",
    "地空", "地劫", "紅鸞", "天喜",
];

impl Star {
    /// 0-based catalogue index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        STAR_NAMES[self.index() as usize]
    }

    pub const fn category(self) -> StarCategory {
        match self {
            Self::Ziwei
            | Self::Tianji
            | Self::Taiyang
            | Self::Wuqu
            | Self::Tiantong
            | Self::Lianzhen
            | Self::Tianfu
            | Self::Taiyin
            | Self::Tanlang
            | Self::Jumen
            | Self::Tianxiang
            | Self::Tianliang
            | Self::Qisha
            | Self::Pojun => StarCategory::Major,
            Self::Lucun
            | Self::Tiankui
            | Self::Tianyue
            | Self::Zuofu
            | Self::Youbi
            | Self::Tianma
            | Self::Wenchang
            | Self::Wenqu => StarCategory::Lucky,
            Self::Qingyang | Self::Tuoluo | Self::Dikong | Self::Dijie => StarCategory::Malefic,
            Self::Hongluan | Self::Tianxi => StarCategory::PeachBlossom,
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(self.category(), StarCategory::Major)
    }
}

// Ziwei branch by bureau (rows: water..fire) and lunar day (1..=30).
#[rustfmt::skip]
const ZIWEI_TABLE: [[u8; 30]; 5] = [
    [1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4],
    [4, 1, 2, 5, 2, 3, 6, 3, 4, 7, 4, 5, 8, 5, 6, 9, 6, 7, 10, 7, 8, 11, 8, 9, 0, 9, 10, 1, 10, 11],
    [11, 4, 1, 2, 0, 5, 2, 3, 1, 6, 3, 4, 2, 7, 4, 5, 3, 8, 5, 6, 4, 9, 6, 7, 5, 10, 7, 8, 6, 11],
    [6, 11, 4, 1, 2, 7, 0, 5, 2, 3, 8, 1, 6, 3, 4, 9, 2, 7, 4, 5, 10, 3, 8, 5, 6, 11, 4, 9, 6, 7],
    [9, 6, 11, 4, 1, 2, 10, 7, 0, 5, 2, 3, 11, 8, 1, 6, 3, 4, 0, 9, 2, 7, 4, 5, 1, 10, 3, 8, 5, 6],
];

// 祿存, 擎羊, 陀羅, 天魁, 天鉞 by year stem.
#[rustfmt::skip]
const LUCK_BY_STEM: [[u8; 5]; 10] = [
    [2, 3, 1, 1, 7],    // 甲
    [3, 4, 2, 0, 8],    // 乙
    [5, 6, 4, 11, 9],   // 丙
    [6, 7, 5, 11, 9],   // 丁
    [5, 6, 4, 1, 7],    // 戊
    [6, 7, 5, 0, 8],    // 己
    [8, 9, 7, 1, 7],    // 庚
    [9, 10, 8, 6, 2],   // 辛
    [11, 0, 10, 3, 5],  // 壬
    [0, 1, 11, 3, 5],   // 癸
];

// 天馬 by year branch (triplet rule: 寅午戌→申 etc).
const TIANMA_BY_BRANCH: [u8; 12] = [2, 11, 8, 5, 2, 11, 8, 5, 2, 11, 8, 5];

/// Ziwei's branch for a bureau and lunar day of month (1..=30).
///
/// The calendar converter guarantees the range; a bad day here is a
/// defect and panics on the table index.
pub fn ziwei_branch(bureau: Bureau, lunar_day: u8) -> EarthlyBranch {
    let row = (bureau.number() - 2) as usize;
    ziwei_core::ALL_BRANCHES[ZIWEI_TABLE[row][lunar_day as usize - 1] as usize]
}

/// Branch of every star, indexed by catalogue order.
pub fn place_stars(
    bureau: Bureau,
    lunar_month: u8,
    lunar_day: u8,
    hour: EarthlyBranch,
    year: StemBranch,
) -> [EarthlyBranch; 28] {
    let ziwei = ziwei_branch(bureau, lunar_day);
    // Tianfu mirrors Ziwei across the 寅-申 axis.
    let tianfu = EarthlyBranch::from_count(4 - ziwei.index() as i64);

    let luck = LUCK_BY_STEM[year.stem.index() as usize];
    let m = lunar_month as i64;
    let h = hour.index() as i64;
    let yb = year.branch.index() as i64;
    let hongluan = EarthlyBranch::from_count(3 - yb);

    let mut placed = [EarthlyBranch::Zi; 28];
    placed[Star::Ziwei.index() as usize] = ziwei;
    placed[Star::Tianji.index() as usize] = ziwei.step(-1);
    placed[Star::Taiyang.index() as usize] = ziwei.step(-3);
    placed[Star::Wuqu.index() as usize] = ziwei.step(-4);
    placed[Star::Tiantong.index() as usize] = ziwei.step(-5);
    placed[Star::Lianzhen.index() as usize] = ziwei.step(-8);
    placed[Star::Tianfu.index() as usize] = tianfu;
    placed[Star::Taiyin.index() as usize] = tianfu.step(1);
    placed[Star::Tanlang.index() as usize] = tianfu.step(2);
    placed[Star::Jumen.index() as usize] = tianfu.step(3);
    placed[Star::Tianxiang.index() as usize] = tianfu.step(4);
    placed[Star::Tianliang.index() as usize] = tianfu.step(5);
    placed[Star::Qisha.index() as usize] = tianfu.step(6);
    placed[Star::Pojun.index() as usize] = tianfu.step(10);
    placed[Star::Lucun.index() as usize] = ziwei_core::ALL_BRANCHES[luck[0] as usize];
    placed[Star::Qingyang.index() as usize] = ziwei_core::ALL_BRANCHES[luck[1] as usize];
    placed[Star::Tuoluo.index() as usize] = ziwei_core::ALL_BRANCHES[luck[2] as usize];
    placed[Star::Tiankui.index() as usize] = ziwei_core::ALL_BRANCHES[luck[3] as usize];
    placed[Star::Tianyue.index() as usize] = ziwei_core::ALL_BRANCHES[luck[4] as usize];
    placed[Star::Zuofu.index() as usize] = EarthlyBranch::from_count(4 + m - 1);
    placed[Star::Youbi.index() as usize] = EarthlyBranch::from_count(10 - (m - 1));
    placed[Star::Tianma.index() as usize] =
        ziwei_core::ALL_BRANCHES[TIANMA_BY_BRANCH[yb as usize] as usize];
    placed[Star::Wenchang.index() as usize] = EarthlyBranch::from_count(10 - h);
    placed[Star::Wenqu.index() as usize] = EarthlyBranch::from_count(4 + h);
    placed[Star::Dikong.index() as usize] = EarthlyBranch::from_count(11 - h);
    placed[Star::Dijie.index() as usize] = EarthlyBranch::from_count(11 + h);
    placed[Star::Hongluan.index() as usize] = hongluan;
    placed[Star::Tianxi.index() as usize] = hongluan.step(6);
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_core::{ALL_BRANCHES, ALL_STEMS, EarthlyBranch as B, HeavenlyStem as S};

    fn geng_wu_year() -> StemBranch {
        StemBranch {
            stem: S::Geng,
            branch: B::Wu,
        }
    }

    #[test]
    fn catalogue_indices_sequential() {
        for (i, s) in ALL_STARS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn category_counts() {
        let majors = ALL_STARS.iter().filter(|s| s.is_major()).count();
        assert_eq!(majors, 14);
        let lucky = ALL_STARS
            .iter()
            .filter(|s| s.category() == StarCategory::Lucky)
            .count();
        assert_eq!(lucky, 8);
    }

    #[test]
    fn ziwei_table_spot_checks() {
        assert_eq!(ziwei_branch(Bureau::Water2, 1), B::Chou);
        assert_eq!(ziwei_branch(Bureau::Earth5, 21), B::Xu);
        assert_eq!(ziwei_branch(Bureau::Fire6, 1), B::You);
    }

    #[test]
    fn tianfu_mirrors_ziwei() {
        // Ziwei and Tianfu indices always sum to 4 mod 12.
        for bureau in [
            Bureau::Water2,
            Bureau::Wood3,
            Bureau::Metal4,
            Bureau::Earth5,
            Bureau::Fire6,
        ] {
            for day in 1..=30u8 {
                let placed = place_stars(bureau, 4, day, B::Wei, geng_wu_year());
                let z = placed[Star::Ziwei.index() as usize].index() as i64;
                let f = placed[Star::Tianfu.index() as usize].index() as i64;
                assert_eq!((z + f).rem_euclid(12), 4);
            }
        }
    }

    #[test]
    fn golden_major_placements() {
        // 1990-05-15 14:30: bureau 土五局, lunar 4/21, 未 hour, 庚午 year.
        let p = place_stars(Bureau::Earth5, 4, 21, B::Wei, geng_wu_year());
        let at = |s: Star| p[s.index() as usize];
        assert_eq!(at(Star::Ziwei), B::Xu);
        assert_eq!(at(Star::Tianji), B::You);
        assert_eq!(at(Star::Taiyang), B::Wei);
        assert_eq!(at(Star::Wuqu), B::Wu);
        assert_eq!(at(Star::Tiantong), B::Si);
        assert_eq!(at(Star::Lianzhen), B::Yin);
        assert_eq!(at(Star::Tianfu), B::Wu);
        assert_eq!(at(Star::Taiyin), B::Wei);
        assert_eq!(at(Star::Tanlang), B::Shen);
        assert_eq!(at(Star::Jumen), B::You);
        assert_eq!(at(Star::Tianxiang), B::Xu);
        assert_eq!(at(Star::Tianliang), B::Hai);
        assert_eq!(at(Star::Qisha), B::Zi);
        assert_eq!(at(Star::Pojun), B::Chen);
    }

    #[test]
    fn golden_minor_placements() {
        let p = place_stars(Bureau::Earth5, 4, 21, B::Wei, geng_wu_year());
        let at = |s: Star| p[s.index() as usize];
        assert_eq!(at(Star::Lucun), B::Shen);
        assert_eq!(at(Star::Qingyang), B::You);
        assert_eq!(at(Star::Tuoluo), B::Wei);
        assert_eq!(at(Star::Tiankui), B::Chou);
        assert_eq!(at(Star::Tianyue), B::Wei);
        assert_eq!(at(Star::Zuofu), B::Wei);
        assert_eq!(at(Star::Youbi), B::Wei);
        assert_eq!(at(Star::Tianma), B::Shen);
        assert_eq!(at(Star::Wenchang), B::Mao);
        assert_eq!(at(Star::Wenqu), B::Hai);
        assert_eq!(at(Star::Dikong), B::Chen);
        assert_eq!(at(Star::Dijie), B::Wu);
        assert_eq!(at(Star::Hongluan), B::You);
        assert_eq!(at(Star::Tianxi), B::Mao);
    }

    #[test]
    fn ringed_pairs_flank_lucun() {
        // 擎羊 sits one ahead of 祿存 and 陀羅 one behind, every stem.
        for stem in ALL_STEMS {
            let year = StemBranch {
                stem,
                branch: B::Zi,
            };
            let p = place_stars(Bureau::Water2, 1, 1, B::Zi, year);
            let lucun = p[Star::Lucun.index() as usize];
            assert_eq!(p[Star::Qingyang.index() as usize], lucun.step(1));
            assert_eq!(p[Star::Tuoluo.index() as usize], lucun.step(-1));
        }
    }

    #[test]
    fn tianxi_opposes_hongluan() {
        for branch in ALL_BRANCHES {
            let year = StemBranch {
                stem: S::Jia,
                branch,
            };
            let p = place_stars(Bureau::Wood3, 7, 15, B::Chen, year);
            let luan = p[Star::Hongluan.index() as usize];
            assert_eq!(p[Star::Tianxi.index() as usize], luan.step(6));
        }
    }
}

//! The four transformations (四化): 祿權科忌 by heavenly stem.
//!
//! Each stem promotes four stars, one per transformation. The natal
//! chart uses the year stem; transit overlays and what-if queries may
//! apply any other stem to the same star layout.

use ziwei_core::HeavenlyStem;

use crate::star::Star;

/// The four transformation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    /// 化祿, prosperity.
    Lu,
    /// 化權, authority.
    Quan,
    /// 化科, merit.
    Ke,
    /// 化忌, obstruction.
    Ji,
}

/// All four marks in 祿權科忌 order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    pub const fn index(self) -> u8 {
        match self {
            Self::Lu => 0,
            Self::Quan => 1,
            Self::Ke => 2,
            Self::Ji => 3,
        }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化祿",
            Self::Quan => "化權",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }
}

// 祿, 權, 科, 忌 recipients by stem.
const TRANSFORM_TABLE: [[Star; 4]; 10] = [
    [Star::Lianzhen, Star::Pojun, Star::Wuqu, Star::Taiyang], // 甲
    [Star::Tianji, Star::Tianliang, Star::Ziwei, Star::Taiyin], // 乙
    [Star::Tiantong, Star::Tianji, Star::Wenchang, Star::Lianzhen], // 丙
    [Star::Taiyin, Star::Tiantong, Star::Tianji, Star::Jumen], // 丁
    [Star::Tanlang, Star::Taiyin, Star::Youbi, Star::Tianji], // 戊
    [Star::Wuqu, Star::Tanlang, Star::Tianliang, Star::Wenqu], // 己
    [Star::Taiyang, Star::Wuqu, Star::Taiyin, Star::Tiantong], // 庚
    [Star::Jumen, Star::Taiyang, Star::Wenqu, Star::Wenchang], // 辛
    [Star::Tianliang, Star::Ziwei, Star::Zuofu, Star::Wuqu],  // 壬
    [Star::Pojun, Star::Jumen, Star::Taiyin, Star::Tanlang],  // 癸
];

/// The four stars a stem transforms, in 祿權科忌 order.
pub const fn transformed_stars(stem: HeavenlyStem) -> [Star; 4] {
    TRANSFORM_TABLE[stem.index() as usize]
}

/// Transformation a stem gives to one star, if any.
pub fn transformation_of(stem: HeavenlyStem, star: Star) -> Option<Transformation> {
    let stars = transformed_stars(stem);
    ALL_TRANSFORMATIONS
        .into_iter()
        .find(|t| stars[t.index() as usize] == star)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_core::{ALL_STEMS, HeavenlyStem as S};

    #[test]
    fn geng_year_row() {
        let stars = transformed_stars(S::Geng);
        assert_eq!(
            stars,
            [Star::Taiyang, Star::Wuqu, Star::Taiyin, Star::Tiantong]
        );
    }

    #[test]
    fn lookup_matches_row() {
        assert_eq!(
            transformation_of(S::Jia, Star::Lianzhen),
            Some(Transformation::Lu)
        );
        assert_eq!(
            transformation_of(S::Xin, Star::Wenchang),
            Some(Transformation::Ji)
        );
        assert_eq!(transformation_of(S::Jia, Star::Ziwei), None);
    }

    #[test]
    fn every_stem_transforms_four_distinct_stars() {
        for stem in ALL_STEMS {
            let stars = transformed_stars(stem);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(stars[i], stars[j], "{stem:?}");
                }
            }
        }
    }

    #[test]
    fn mark_names() {
        assert_eq!(Transformation::Lu.name(), "化祿");
        assert_eq!(Transformation::Ji.name(), "化忌");
    }
}

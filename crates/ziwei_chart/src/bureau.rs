//! Five-element bureau of the Life palace.
//!
//! The bureau is the nayin element of the Life palace's stem-branch
//! pair; its number (2..=6) keys the Ziwei position table and sets the
//! starting age of the major limits.
//!
//! Clean-room: classical nayin table, public domain.

use ziwei_core::{EarthlyBranch, HeavenlyStem};

/// The five bureaus, numbered by their element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

impl Bureau {
    /// Bureau number, 2..=6.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Chinese name (水二局 .. 火六局).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    const fn from_number(n: u8) -> Self {
        match n {
            2 => Self::Water2,
            3 => Self::Wood3,
            4 => Self::Metal4,
            5 => Self::Earth5,
            _ => Self::Fire6,
        }
    }
}

// Nayin bureau numbers: rows pair the stems (甲乙, 丙丁, ..), columns
// pair the branches (子丑, 寅卯, ..).
#[rustfmt::skip]
const NAYIN_BUREAU: [[u8; 6]; 5] = [
    [4, 2, 6, 4, 2, 6], // 甲乙
    [2, 6, 5, 2, 6, 5], // 丙丁
    [6, 5, 3, 6, 5, 3], // 戊己
    [5, 3, 4, 5, 3, 4], // 庚辛
    [3, 4, 2, 3, 4, 2], // 壬癸
];

/// Bureau from the Life palace's stem and branch.
pub fn bureau(stem: HeavenlyStem, branch: EarthlyBranch) -> Bureau {
    let row = (stem.index() / 2) as usize;
    let col = (branch.index() / 2) as usize;
    Bureau::from_number(NAYIN_BUREAU[row][col])
}

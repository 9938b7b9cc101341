//! The ten heavenly stems (tian gan).
//!
//! Stems pair off by element (Wood, Fire, Earth, Metal, Water) and alternate
//! Yang / Yin, so stem `i` has element `i / 2` and is Yang when `i` is even.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::BaziError;

/// Yang / Yin polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    const fn from_index(i: u8) -> Self {
        if i % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// One of the ten heavenly stems, serialized as its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in cycle order (0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a cycle position, wrapping modulo 10.
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    /// Chinese character.
    pub const fn character(self) -> char {
        STEM_CHARS[self as usize]
    }

    /// Pinyin name without tone marks.
    pub const fn pinyin(self) -> &'static str {
        STEM_PINYIN[self as usize]
    }

    pub const fn element(self) -> Element {
        STEM_ELEMENTS[self as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self as u8)
    }

    /// Parse a stem from its character.
    pub fn from_char(c: char) -> Result<Self, BaziError> {
        STEM_CHARS
            .iter()
            .position(|&s| s == c)
            .map(|i| ALL_STEMS[i])
            .ok_or(BaziError::UnknownStem(c))
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.character())
    }
}

impl FromStr for Stem {
    type Err = BaziError;

    /// Accepts the character (`甲`) or the pinyin name (`jia`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if !c.is_ascii() {
                return Self::from_char(c);
            }
        }
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| stem.pinyin().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::UnknownStem(s.chars().next().unwrap_or(' ')))
    }
}

//! The twelve earthly branches (di zhi).
//!
//! Index 0 is Zi (子, Rat), the branch of the two-hour window around midnight
//! and of the month containing the December solstice.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::BaziError;
use crate::hidden_stems;
use crate::stem::{Polarity, Stem};

/// One of the twelve earthly branches, serialized as its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in cycle order (0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Element of each branch. Not derivable from the stem table: the four
/// seasonal transition branches (Chou, Chen, Wei, Xu) are all Earth.
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a cycle position, wrapping modulo 12.
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    /// Chinese character.
    pub const fn character(self) -> char {
        BRANCH_CHARS[self as usize]
    }

    /// Pinyin name without tone marks.
    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self as usize]
    }

    pub const fn polarity(self) -> Polarity {
        if self as u8 % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Stems latent in this branch, principal stem first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        hidden_stems::hidden_stems(self)
    }

    /// Parse a branch from its character.
    pub fn from_char(c: char) -> Result<Self, BaziError> {
        BRANCH_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| ALL_BRANCHES[i])
            .ok_or(BaziError::UnknownBranch(c))
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.character())
    }
}

impl FromStr for Branch {
    type Err = BaziError;

    /// Accepts the character (`子`), the pinyin name, or the animal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if !c.is_ascii() {
                return Self::from_char(c);
            }
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.pinyin().eq_ignore_ascii_case(s) || b.animal().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::UnknownBranch(s.chars().next().unwrap_or(' ')))
    }
}

//! The five elements (wu xing) and their two cycles.
//!
//! Productive (sheng): Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! Control (ke): Wood -> Earth -> Water -> Fire -> Metal -> Wood.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaziError;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in productive-cycle order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

const ELEMENT_NAMES: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];
const ELEMENT_CHARS: [char; 5] = ['木', '火', '土', '金', '水'];

/// Target of each element in the control cycle, indexed by element.
const CONTROLS: [Element; 5] = [
    Element::Earth, // Wood parts Earth
    Element::Metal, // Fire melts Metal
    Element::Water, // Earth dams Water
    Element::Wood,  // Metal cuts Wood
    Element::Fire,  // Water quenches Fire
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element at a position in [`ALL_ELEMENTS`], wrapping modulo 5.
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        ELEMENT_NAMES[self as usize]
    }

    /// Chinese character.
    pub const fn character(self) -> char {
        ELEMENT_CHARS[self as usize]
    }

    /// The element this one produces (generates).
    pub const fn produces(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one controls (overcomes).
    pub const fn controls(self) -> Self {
        CONTROLS[self as usize]
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// All five elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = BaziError;

    /// Accepts the English name (any case) or the Chinese character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s) || s.chars().eq([e.character()]))
            .ok_or_else(|| BaziError::UnknownElement(s.to_string()))
    }
}

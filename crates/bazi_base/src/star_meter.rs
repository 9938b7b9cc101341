//! Five-star rating of an element total.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Stars in a full meter.
pub const MAX_STARS: u8 = 5;

const FULL: char = '★';
const HALF: char = '⯪';
const EMPTY: char = '☆';

/// Full, half and empty stars for one element score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarMeter {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
    /// The score exceeded [`MAX_STARS`].
    pub overflow: bool,
}

impl StarMeter {
    /// Meter for a score: capped at 5, half star for a remainder of 0.5 or
    /// more, nothing lit for negative scores.
    pub fn from_score(score: f64) -> Self {
        let max = f64::from(MAX_STARS);
        let capped = score.clamp(0.0, max);
        let full = capped.floor();
        let half = capped - full >= 0.5;
        let full = full as u8;
        Self {
            full,
            half,
            empty: MAX_STARS - full - u8::from(half),
            overflow: score > max,
        }
    }

    /// Text form, e.g. `★★★⯪☆` or `★★★★★+`.
    pub fn render(&self) -> String {
        let mut s = String::with_capacity(4 * usize::from(MAX_STARS) + 1);
        s.extend(std::iter::repeat_n(FULL, usize::from(self.full)));
        if self.half {
            s.push(HALF);
        }
        s.extend(std::iter::repeat_n(EMPTY, usize::from(self.empty)));
        if self.overflow {
            s.push('+');
        }
        s
    }
}

impl Display for StarMeter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Word label for an element total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Balanced,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 4.0 {
            Self::VeryStrong
        } else if score >= 3.0 {
            Self::Strong
        } else if score >= 2.0 {
            Self::Balanced
        } else if score >= 1.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Balanced => "Balanced",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl Display for StrengthLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Day-Master strength verdict.
//!
//! Score = seasonal bonus of the Day Master's element plus the support value
//! of every visible stem and visible branch. Hidden stems are not counted.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::FourPillars;
use crate::season::seasonal_bonus;
use crate::stem::Stem;

/// How another element relates to the Day Master's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Support {
    /// Same element.
    Companion,
    /// Produces the Day Master.
    Resource,
    /// Controls the Day Master.
    Officer,
    /// Produced by the Day Master.
    Output,
    /// Controlled by the Day Master.
    Wealth,
}

impl Support {
    /// Relation of `other` to the Day Master element `dm`.
    pub fn between(dm: Element, other: Element) -> Self {
        if other == dm {
            Self::Companion
        } else if other.produces() == dm {
            Self::Resource
        } else if other.controls() == dm {
            Self::Officer
        } else if dm.produces() == other {
            Self::Output
        } else {
            Self::Wealth
        }
    }

    /// Signed contribution to the strength score.
    pub const fn value(self) -> i32 {
        match self {
            Self::Companion | Self::Resource => 1,
            Self::Officer | Self::Output => -1,
            Self::Wealth => 0,
        }
    }
}

/// Support value of `other` for Day Master element `dm` (-1, 0 or +1).
pub fn support_value(dm: Element, other: Element) -> i32 {
    Support::between(dm, other).value()
}

/// Two-bucket verdict: non-negative scores are Strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthVerdict {
    Strong,
    Weak,
}

impl StrengthVerdict {
    pub const fn from_score(score: i32) -> Self {
        if score >= 0 { Self::Strong } else { Self::Weak }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
        }
    }
}

impl Display for StrengthVerdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict together with the raw score behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMasterStrength {
    pub day_master: Stem,
    pub element: Element,
    pub score: i32,
    pub verdict: StrengthVerdict,
}

/// Judge the Day Master against the month season and the visible chart.
pub fn judge_strength(
    day_master: Stem,
    month_branch: Branch,
    visible_stems: &[Stem],
    visible_branches: &[Branch],
) -> DayMasterStrength {
    let dm = day_master.element();
    let stems: i32 = visible_stems.iter().map(|s| support_value(dm, s.element())).sum();
    let branches: i32 = visible_branches
        .iter()
        .map(|b| support_value(dm, b.element()))
        .sum();
    let score = i32::from(seasonal_bonus(month_branch, dm)) + stems + branches;

    DayMasterStrength {
        day_master,
        element: dm,
        score,
        verdict: StrengthVerdict::from_score(score),
    }
}

impl DayMasterStrength {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        judge_strength(
            pillars.day_master(),
            pillars.month_branch(),
            &pillars.stems(),
            &pillars.branches(),
        )
    }
}

//! Five-element point scoring.
//!
//! Per element: +1 for each visible stem, +0.5 for each hidden stem, the
//! month-branch seasonal bonus once, and +1 if it is the Day Master's
//! element. Visible branches score nothing directly; they contribute through
//! their hidden stems.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;
use crate::season::seasonal_bonus;
use crate::stem::Stem;

/// Points per hidden stem occurrence.
pub const HIDDEN_STEM_WEIGHT: f64 = 0.5;

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Every contribution to one element's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBreakdown {
    pub element: Element,
    /// Count of visible stems of this element.
    pub visible: u8,
    /// Contributing visible stems, pillar order.
    pub visible_stems: Vec<Stem>,
    /// `"丁 + 丙"`, empty when nothing contributed.
    pub visible_trace: String,
    /// Hidden-stem points (`0.5` per occurrence).
    pub hidden: f64,
    /// Contributing hidden stems, pillar order.
    pub hidden_stems: Vec<Stem>,
    /// `"丙 0.5 + 丁 0.5"`, empty when nothing contributed.
    pub hidden_trace: String,
    pub season: i8,
    /// 1 for the Day Master's element, else 0.
    pub day_master: u8,
    /// Sum of the above, rounded to one decimal.
    pub total: f64,
}

impl ElementBreakdown {
    fn tally(
        element: Element,
        visible_stems: &[Stem],
        hidden_stems: &[&[Stem]],
        month_branch: Branch,
        day_master: Stem,
    ) -> Self {
        let visible_stems: Vec<Stem> = visible_stems
            .iter()
            .copied()
            .filter(|s| s.element() == element)
            .collect();
        let hidden_stems: Vec<Stem> = hidden_stems
            .iter()
            .flat_map(|list| list.iter().copied())
            .filter(|s| s.element() == element)
            .collect();

        let visible = visible_stems.len() as u8;
        let hidden = hidden_stems.len() as f64 * HIDDEN_STEM_WEIGHT;
        let season = seasonal_bonus(month_branch, element);
        let day_master = u8::from(day_master.element() == element);
        let total = round1(f64::from(visible) + hidden + f64::from(season) + f64::from(day_master));

        let visible_trace = visible_stems
            .iter()
            .map(Stem::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        let hidden_trace = hidden_stems
            .iter()
            .map(|s| format!("{s} {HIDDEN_STEM_WEIGHT}"))
            .collect::<Vec<_>>()
            .join(" + ");

        Self {
            element,
            visible,
            visible_stems,
            visible_trace,
            hidden,
            hidden_stems,
            hidden_trace,
            season,
            day_master,
            total,
        }
    }
}

/// Scores for all five elements, in element order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementScores {
    pub breakdown: Vec<ElementBreakdown>,
}

impl ElementScores {
    /// Score from the raw chart parts.
    ///
    /// `hidden_stems` holds one list per pillar; `month_branch` picks the
    /// seasonal row and `day_master` earns its element the +1.
    pub fn compute(
        visible_stems: &[Stem],
        hidden_stems: &[&[Stem]],
        month_branch: Branch,
        day_master: Stem,
    ) -> Self {
        let breakdown = ALL_ELEMENTS
            .iter()
            .map(|&e| ElementBreakdown::tally(e, visible_stems, hidden_stems, month_branch, day_master))
            .collect();
        Self { breakdown }
    }

    pub fn from_pillars(pillars: &FourPillars) -> Self {
        Self::compute(
            &pillars.stems(),
            &pillars.hidden_stems(),
            pillars.month_branch(),
            pillars.day_master(),
        )
    }

    pub fn get(&self, element: Element) -> Option<&ElementBreakdown> {
        self.breakdown.iter().find(|b| b.element == element)
    }

    /// Rounded total for an element (0 if absent).
    pub fn total(&self, element: Element) -> f64 {
        self.get(element).map_or(0.0, |b| b.total)
    }

    /// Element totals keyed by element.
    pub fn totals(&self) -> BTreeMap<Element, f64> {
        self.breakdown.iter().map(|b| (b.element, b.total)).collect()
    }

    /// Element with the highest total; ties go to the earlier element.
    pub fn strongest(&self) -> Option<Element> {
        self.breakdown
            .iter()
            .fold(None::<&ElementBreakdown>, |best, b| match best {
                Some(x) if x.total >= b.total => Some(x),
                _ => Some(b),
            })
            .map(|b| b.element)
    }
}

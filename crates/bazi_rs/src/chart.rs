//! The `compute` operation: birth input to a complete chart.

use std::collections::BTreeMap;

use bazi_base::{
    DayBoundary, DayMasterIdentity, DayMasterStrength, Element, ElementBreakdown, ElementScores,
    FourPillars, Pillar, StarMeter, Stem, StrengthLabel, StrengthVerdict, day_master_identity,
};
use bazi_time::{SolarTime, solar_corrected_time};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::location::Location;

/// Birth moment in standard (zone) time and where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Degrees east positive.
    pub longitude_deg: f64,
    /// Hours east of UTC, may be fractional.
    pub utc_offset_hours: f64,
}

impl BirthInput {
    pub const fn new(date: NaiveDate, time: NaiveTime, location: Location) -> Self {
        Self {
            date,
            time,
            longitude_deg: location.longitude_deg,
            utc_offset_hours: location.utc_offset_hours,
        }
    }

    pub const fn location(&self) -> Location {
        Location::new(self.longitude_deg, self.utc_offset_hours)
    }
}

/// Star meter and label for one element total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementRating {
    pub score: f64,
    pub stars: StarMeter,
    pub label: StrengthLabel,
}

impl ElementRating {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            stars: StarMeter::from_score(score),
            label: StrengthLabel::from_score(score),
        }
    }
}

/// Complete chart for one birth input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub standard_timestamp: NaiveDateTime,
    pub solar_corrected_timestamp: NaiveDateTime,
    pub longitude_correction_minutes: f64,
    pub equation_of_time_minutes: f64,

    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    /// Year, Month, Day, Hour.
    pub hidden_stems_per_pillar: [Vec<Stem>; 4],

    pub strength_verdict: StrengthVerdict,
    pub strength_score: i32,

    pub element_totals: BTreeMap<Element, f64>,
    pub element_breakdown: BTreeMap<Element, ElementBreakdown>,
    pub star_meter: BTreeMap<Element, ElementRating>,
    pub day_master: DayMasterIdentity,
}

impl ChartResult {
    pub const fn pillars(&self) -> FourPillars {
        FourPillars {
            year: self.year_pillar,
            month: self.month_pillar,
            day: self.day_pillar,
            hour: self.hour_pillar,
        }
    }

    fn assemble(solar: SolarTime, pillars: FourPillars) -> Self {
        let scores = ElementScores::from_pillars(&pillars);
        let strength = DayMasterStrength::from_pillars(&pillars);
        let element_totals = scores.totals();
        let star_meter = element_totals
            .iter()
            .map(|(&e, &score)| (e, ElementRating::from_score(score)))
            .collect();

        Self {
            standard_timestamp: solar.standard,
            solar_corrected_timestamp: solar.corrected,
            longitude_correction_minutes: solar.longitude_correction_min,
            equation_of_time_minutes: solar.equation_of_time_min,
            year_pillar: pillars.year,
            month_pillar: pillars.month,
            day_pillar: pillars.day,
            hour_pillar: pillars.hour,
            hidden_stems_per_pillar: pillars.hidden_stems().map(<[Stem]>::to_vec),
            strength_verdict: strength.verdict,
            strength_score: strength.score,
            element_totals,
            element_breakdown: scores.breakdown.into_iter().map(|b| (b.element, b)).collect(),
            star_meter,
            day_master: day_master_identity(pillars.day_master()),
        }
    }
}

/// Compute the chart for a birth date, standard time, longitude and offset.
///
/// The offset is used in full for the solar-time correction and truncated
/// toward zero to whole hours for placing the Sun (Month pillar).
pub fn compute(
    dob: NaiveDate,
    birth_time: NaiveTime,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> Result<ChartResult, ChartError> {
    let solar = solar_corrected_time(dob, birth_time, longitude_deg, utc_offset_hours)?;
    tracing::trace!(
        longitude_correction_min = solar.longitude_correction_min,
        equation_of_time_min = solar.equation_of_time_min,
        "solar time corrections"
    );

    let offset_whole = utc_offset_hours.trunc() as i32;
    let pillars = FourPillars::derive(solar.corrected, offset_whole, DayBoundary::ZiHour);
    let chart = ChartResult::assemble(solar, pillars);

    tracing::debug!(
        standard = %chart.standard_timestamp,
        corrected = %chart.solar_corrected_timestamp,
        pillars = %pillars,
        verdict = %chart.strength_verdict,
        score = chart.strength_score,
        "computed chart"
    );
    Ok(chart)
}

/// [`compute`] over a [`BirthInput`].
pub fn compute_input(input: &BirthInput) -> Result<ChartResult, ChartError> {
    compute(input.date, input.time, input.longitude_deg, input.utc_offset_hours)
}

//! Four-pillar (BaZi) calculations on top of solar-corrected timestamps.
//!
//! This crate provides:
//! - The fixed tables: 10 stems, 12 branches, their elements, hidden stems,
//!   the 60-term sexagenary cycle and the month-branch seasonal bonus
//! - Year / Month / Day / Hour pillar derivation
//! - Five-element point scoring with a per-contribution breakdown
//! - The Day-Master strength verdict
//! - Star-meter ratings and Day-Master identity profiles
//!
//! All tables are static data and every operation is a pure function.

pub mod branch;
pub mod day_master;
pub mod element;
pub mod error;
pub mod hidden_stems;
pub mod pillar;
pub mod scoring;
pub mod season;
pub mod sexagenary;
pub mod star_meter;
pub mod stem;
pub mod strength;
pub mod util;

pub use branch::{ALL_BRANCHES, Branch};
pub use day_master::{DayMasterIdentity, day_master_identity};
pub use element::{ALL_ELEMENTS, Element};
pub use error::BaziError;
pub use hidden_stems::hidden_stems;
pub use pillar::{
    DayBoundary, FourPillars, Pillar, PillarRole, SPRING_START, day_pillar, hour_branch_index,
    hour_pillar, month_branch_slot, month_pillar, solar_year, year_pillar,
};
pub use scoring::{ElementBreakdown, ElementScores, HIDDEN_STEM_WEIGHT};
pub use season::seasonal_bonus;
pub use sexagenary::{
    SEXAGENARY_EPOCH, SexagenaryTerm, day_offset, day_term, sexagenary_epoch,
};
pub use star_meter::{MAX_STARS, StarMeter, StrengthLabel};
pub use stem::{ALL_STEMS, Polarity, Stem};
pub use strength::{DayMasterStrength, StrengthVerdict, Support, judge_strength, support_value};
pub use util::floor_mod;

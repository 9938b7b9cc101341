//! Four-pillar chart computation.
//!
//! One call turns a birth date, standard time, longitude and UTC offset into
//! solar-corrected time, four pillars, element scores and the Day-Master
//! verdict.
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::compute;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
//! let chart = compute(dob, time, 101.6869, 8.0).unwrap();
//! assert_eq!(chart.day_pillar.to_string(), "丙寅");
//! ```

pub mod chart;
pub mod error;
pub mod location;

pub use chart::{BirthInput, ChartResult, ElementRating, compute, compute_input};
pub use error::ChartError;
pub use location::{FixedLocations, Location, LocationResolver, compute_for_place};

// Re-export the chart vocabulary so callers only need `bazi_rs`.
pub use bazi_base::{
    Branch, DayMasterIdentity, Element, ElementBreakdown, FourPillars, Pillar, PillarRole,
    Polarity, SexagenaryTerm, StarMeter, Stem, StrengthLabel, StrengthVerdict,
};
pub use bazi_time::{SolarTime, TimeError, UtcOffset};

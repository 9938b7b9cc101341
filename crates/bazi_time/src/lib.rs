//! Time handling for four-pillar charts.
//!
//! This crate provides:
//! - Julian Date from a Gregorian calendar instant
//! - Low-precision solar ecliptic longitude (Meeus, truncated series)
//! - Equation of time and longitude correction to local solar time
//! - UTC offset parsing (`+8`, `-05:30`, `UTC+5:45`)
//!
//! Everything here is a pure function of its arguments. Civil timestamps are
//! `chrono` naive values; no time zone database is consulted.

pub mod error;
pub mod julian;
pub mod offset;
pub mod solar;
pub mod solar_time;

pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, datetime_to_jd, jd_to_centuries};
pub use offset::UtcOffset;
pub use solar::{normalize_360, sun_longitude_at, sun_longitude_deg};
pub use solar_time::{
    SolarTime, equation_of_time_min, longitude_correction_min, reference_longitude_deg,
    shift_minutes, solar_corrected_time,
};

//! Low-precision apparent position of the Sun.
//!
//! Geometric mean longitude plus the equation of center, truncated to three
//! terms (Meeus ch. 25, low accuracy). Good to about 0.01 deg for 1900-2100,
//! which is well under a minute of time at the 30 deg solar-term boundaries.
//! No nutation or aberration terms are applied.

use chrono::NaiveDateTime;

use crate::julian::{datetime_to_jd, jd_to_centuries};

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Ecliptic longitude of the Sun in degrees, [0, 360), for a Julian Date.
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    let l0 = normalize_360(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = normalize_360(357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    normalize_360(l0 + c)
}

/// Ecliptic longitude of the Sun for a universal-time instant.
pub fn sun_longitude_at(ut: NaiveDateTime) -> f64 {
    sun_longitude_deg(datetime_to_jd(ut))
}

//! Local apparent solar time from standard (zone) time.
//!
//! Two corrections, both in minutes:
//! - longitude: 4 min per degree between the zone meridian
//!   (`offset_hours * 15`) and the local meridian;
//! - equation of time: the empirical three-term fit
//!   `9.87 sin 2B - 7.53 cos B - 1.5 sin B`, `B = 2π (N - 81) / 364`.
//!
//! The corrected timestamp is `standard - longitude_correction + eot`.

use std::f64::consts::PI;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimeError;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// Standard and solar-corrected timestamps with the corrections applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    /// Birth date and time as entered (zone time).
    pub standard: NaiveDateTime,
    /// Local apparent solar time.
    pub corrected: NaiveDateTime,
    /// Minutes subtracted for the observer's distance from the zone meridian.
    pub longitude_correction_min: f64,
    /// Minutes added for the equation of time.
    pub equation_of_time_min: f64,
}

/// Equation of time in minutes for a calendar date.
///
/// Uses the ordinal day (1..=366); leap years need no other handling.
pub fn equation_of_time_min(date: NaiveDate) -> f64 {
    let n = f64::from(date.ordinal());
    let b = 2.0 * PI * (n - 81.0) / 364.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Central meridian of a zone offset, degrees east.
pub fn reference_longitude_deg(utc_offset_hours: f64) -> f64 {
    utc_offset_hours * 15.0
}

/// Longitude correction in minutes (positive when west of the zone meridian).
pub fn longitude_correction_min(local_longitude_deg: f64, reference_longitude_deg: f64) -> f64 {
    (reference_longitude_deg - local_longitude_deg) * 4.0
}

/// Shift a timestamp by a signed number of minutes, rounded to the microsecond.
pub fn shift_minutes(ts: NaiveDateTime, minutes: f64) -> Result<NaiveDateTime, TimeError> {
    if !minutes.is_finite() {
        return Err(TimeError::NonFinite("minute shift"));
    }
    let micros = (minutes * MICROS_PER_MINUTE).round();
    if micros.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange(format!("{minutes} min")));
    }
    ts.checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or_else(|| TimeError::OutOfRange(format!("{ts} shifted by {minutes} min")))
}

/// Convert standard local time to local apparent solar time.
///
/// `longitude_deg` is east-positive; `utc_offset_hours` may be fractional.
pub fn solar_corrected_time(
    date: NaiveDate,
    time: NaiveTime,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> Result<SolarTime, TimeError> {
    if !longitude_deg.is_finite() {
        return Err(TimeError::NonFinite("longitude"));
    }
    if !utc_offset_hours.is_finite() {
        return Err(TimeError::NonFinite("UTC offset"));
    }

    let standard = date.and_time(time);
    let long_corr = longitude_correction_min(longitude_deg, reference_longitude_deg(utc_offset_hours));
    let eot = equation_of_time_min(date);

    // applied as two separate shifts
    let corrected = shift_minutes(shift_minutes(standard, -long_corr)?, eot)?;

    Ok(SolarTime {
        standard,
        corrected,
        longitude_correction_min: long_corr,
        equation_of_time_min: eot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn eot_february_minimum() {
        // mid-February the Sun runs about 14.5 min slow
        let e = equation_of_time_min(date(2024, 2, 11));
        assert!((e - (-14.574_494_853_430_762)).abs() < 1e-9, "e = {e}");
    }

    #[test]
    fn eot_november_maximum() {
        let e = equation_of_time_min(date(2024, 11, 3));
        assert!((e - 16.290_265_823_640_798).abs() < 1e-9, "e = {e}");
    }

    #[test]
    fn eot_depends_only_on_ordinal() {
        // 2023-03-01 and 2024-02-29 are both ordinal 60
        assert_eq!(
            equation_of_time_min(date(2023, 3, 1)),
            equation_of_time_min(date(2024, 2, 29))
        );
    }

    #[test]
    fn longitude_on_zone_meridian_is_zero() {
        assert_eq!(longitude_correction_min(120.0, reference_longitude_deg(8.0)), 0.0);
    }

    #[test]
    fn longitude_west_of_meridian() {
        // Kuala Lumpur 101.6869 E on UTC+8
        let c = longitude_correction_min(101.6869, reference_longitude_deg(8.0));
        assert!((c - 73.2524).abs() < 1e-9, "c = {c}");
    }

    #[test]
    fn fractional_offset_reference() {
        assert_eq!(reference_longitude_deg(5.5), 82.5);
        assert_eq!(reference_longitude_deg(-3.5), -52.5);
    }

    #[test]
    fn corrected_time_on_meridian() {
        let st = solar_corrected_time(date(2011, 2, 1), hm(12, 0), 120.0, 8.0).unwrap();
        assert_eq!(st.longitude_correction_min, 0.0);
        assert_eq!(st.standard, date(2011, 2, 1).and_hms_opt(12, 0, 0).unwrap());
        let expected = date(2011, 2, 1).and_hms_micro_opt(11, 46, 19, 884_955).unwrap();
        assert_eq!(st.corrected, expected);
    }

    #[test]
    fn corrected_time_west_of_meridian() {
        let st = solar_corrected_time(date(1990, 1, 1), hm(12, 0), 101.6869, 8.0).unwrap();
        let expected = date(1990, 1, 1).and_hms_micro_opt(10, 43, 8, 443_601).unwrap();
        assert_eq!(st.corrected, expected);
    }

    #[test]
    fn correction_can_cross_midnight() {
        let st = solar_corrected_time(date(2024, 11, 3), hm(23, 55), 120.0, 8.0).unwrap();
        assert_eq!(st.corrected.date(), date(2024, 11, 4));
    }

    #[test]
    fn non_finite_longitude_rejected() {
        let err = solar_corrected_time(date(2000, 1, 1), hm(0, 0), f64::NAN, 0.0).unwrap_err();
        assert_eq!(err, TimeError::NonFinite("longitude"));
    }

    #[test]
    fn non_finite_offset_rejected() {
        let err = solar_corrected_time(date(2000, 1, 1), hm(0, 0), 0.0, f64::INFINITY).unwrap_err();
        assert_eq!(err, TimeError::NonFinite("UTC offset"));
    }

    #[test]
    fn shift_out_of_range() {
        let ts = NaiveDate::MAX.and_hms_opt(23, 59, 0).unwrap();
        assert!(matches!(shift_minutes(ts, 10.0), Err(TimeError::OutOfRange(_))));
    }
}

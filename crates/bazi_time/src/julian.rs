//! Julian Date from Gregorian calendar instants.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date for a Gregorian calendar date with fractional day.
///
/// Meeus, *Astronomical Algorithms*, ch. 7. January and February count as
/// months 13 and 14 of the preceding year. Integer parts are truncated, which
/// is exact for any year after -4716.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * f64::from(y + 4716)).trunc() + (30.6001 * f64::from(m + 1)).trunc() + day_frac
        + f64::from(b)
        - 1524.5
}

/// Julian Date of a universal-time instant.
///
/// Only whole seconds contribute; sub-second precision is dropped.
pub fn datetime_to_jd(ut: NaiveDateTime) -> f64 {
    let hours = f64::from(ut.hour()) + f64::from(ut.minute()) / 60.0 + f64::from(ut.second()) / 3600.0;
    let day_frac = f64::from(ut.day()) + hours / 24.0;
    calendar_to_jd(ut.year(), ut.month(), day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn j2000_noon() {
        assert_eq!(datetime_to_jd(at(2000, 1, 1, 12, 0)), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year() {
        // 1987 January 27.0 = JD 2446822.5
        assert_eq!(datetime_to_jd(at(1987, 1, 27, 0, 0)), 2_446_822.5);
    }

    #[test]
    fn fractional_day_from_clock() {
        let jd = datetime_to_jd(at(2024, 2, 4, 8, 27));
        assert!((jd - 2_460_344.852_083_333_3).abs() < 1e-8, "jd = {jd}");
    }

    #[test]
    fn subsecond_ignored() {
        let whole = at(2010, 5, 5, 5, 5);
        let frac = whole + chrono::Duration::microseconds(999_999);
        assert_eq!(datetime_to_jd(whole), datetime_to_jd(frac));
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}

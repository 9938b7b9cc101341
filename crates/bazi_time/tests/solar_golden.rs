//! Golden values for solar longitude and solar-time correction.
//!
//! Expected values come from the legacy chart calculator run on the same inputs.

use bazi_time::{
    UtcOffset, datetime_to_jd, equation_of_time_min, solar_corrected_time, sun_longitude_at,
    sun_longitude_deg,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Solar longitude
// ---------------------------------------------------------------------------

#[test]
fn march_equinox_2024() {
    // equinox 2024-03-20 03:06 UT, longitude crosses 0
    let lon = sun_longitude_at(at(2024, 3, 20, 3, 6));
    assert!((lon - 0.008_250_685_608_118_147).abs() < 1e-9, "lon = {lon}");
}

#[test]
fn june_solstice_1990() {
    let lon = sun_longitude_at(at(1990, 6, 21, 12, 0));
    assert!((lon - 89.861_241_423_400_56).abs() < 1e-9, "lon = {lon}");
}

#[test]
fn start_of_spring_2024() {
    // Lichun 2024-02-04 08:27 UT: longitude reaches 315
    let jd = datetime_to_jd(at(2024, 2, 4, 8, 27));
    assert!((jd - 2_460_344.852_083_333_3).abs() < 1e-8);
    let lon = sun_longitude_deg(jd);
    assert!((lon - 315.011_174_060_572_3).abs() < 1e-9, "lon = {lon}");
}

#[test]
fn longitude_advances_about_one_degree_per_day() {
    let a = sun_longitude_at(at(2005, 7, 1, 0, 0));
    let b = sun_longitude_at(at(2005, 7, 2, 0, 0));
    let step = b - a;
    assert!(step > 0.9 && step < 1.1, "step = {step}");
}

// ---------------------------------------------------------------------------
// Solar-time correction
// ---------------------------------------------------------------------------

#[test]
fn eot_new_year() {
    let e = equation_of_time_min(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert!((e - (-3.606_873_315_655_134_2)).abs() < 1e-9, "e = {e}");
}

#[test]
fn new_york_start_of_spring_2000() {
    let st = solar_corrected_time(
        NaiveDate::from_ymd_opt(2000, 2, 4).unwrap(),
        NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        -74.006,
        -5.0,
    )
    .unwrap();
    assert!((st.longitude_correction_min - (-3.976)).abs() < 1e-9);
    assert!((st.equation_of_time_min - (-14.077_116_539_677_597)).abs() < 1e-9);
    let expected = NaiveDate::from_ymd_opt(2000, 2, 4)
        .unwrap()
        .and_hms_micro_opt(8, 19, 53, 933_008)
        .unwrap();
    assert_eq!(st.corrected, expected);
}

#[test]
fn delhi_half_hour_zone() {
    let offset: UtcOffset = "+05:30".parse().unwrap();
    let st = solar_corrected_time(
        NaiveDate::from_ymd_opt(1975, 11, 8).unwrap(),
        NaiveTime::from_hms_opt(6, 5, 0).unwrap(),
        77.209,
        offset.hours(),
    )
    .unwrap();
    assert!((st.longitude_correction_min - 21.164).abs() < 1e-9);
    let expected = NaiveDate::from_ymd_opt(1975, 11, 8)
        .unwrap()
        .and_hms_micro_opt(5, 59, 45, 6_980)
        .unwrap();
    assert_eq!(st.corrected, expected);
}

//! Golden-value tests for four-pillar derivation.
//!
//! Inputs are solar-corrected local timestamps; expected pillars come from the
//! legacy chart calculator run on the same timestamps and integer offsets.

use bazi_base::{
    ALL_BRANCHES, DayBoundary, FourPillars, SexagenaryTerm, day_offset, day_pillar, day_term,
    hour_branch_index, sexagenary_epoch,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn at_micro(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, us: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_micro_opt(h, mi, s, us)
        .unwrap()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    at_micro(y, mo, d, h, mi, 0, 0)
}

fn chart(ts: NaiveDateTime, offset: i32) -> String {
    FourPillars::derive(ts, offset, DayBoundary::ZiHour).to_string()
}

fn raw(ts: NaiveDateTime, offset: i32) -> String {
    FourPillars::derive(ts, offset, DayBoundary::Midnight).to_string()
}

// ---------------------------------------------------------------------------
// Corrected timestamps from worked examples
// ---------------------------------------------------------------------------

#[test]
fn kuala_lumpur_1990() {
    assert_eq!(chart(at_micro(1990, 1, 1, 10, 43, 8, 443_601), 8), "己巳 丙子 丙寅 癸巳");
}

#[test]
fn beijing_2011() {
    assert_eq!(chart(at_micro(2011, 2, 1, 11, 46, 19, 884_955), 8), "庚寅 己丑 丁亥 丙午");
}

#[test]
fn epoch_noon_greenwich() {
    assert_eq!(chart(at_micro(1899, 12, 22, 12, 0, 33, 495_425), 0), "己亥 丙子 甲子 庚午");
}

#[test]
fn nineteenth_century() {
    assert_eq!(chart(at_micro(1850, 3, 10, 13, 54, 33, 990_652), 8), "庚戌 己卯 庚申 癸未");
}

#[test]
fn western_hemisphere_negative_offset() {
    assert_eq!(chart(at_micro(2000, 2, 4, 8, 19, 53, 933_008), -5), "庚辰 戊寅 壬辰 甲辰");
}

#[test]
fn half_hour_zone_uses_truncated_offset() {
    assert_eq!(chart(at_micro(1975, 11, 8, 5, 59, 45, 6_980), 5), "乙卯 丙戌 戊午 乙卯");
}

#[test]
fn just_after_midnight_is_still_zi_hour() {
    assert_eq!(chart(at_micro(1900, 1, 1, 0, 26, 23, 587_601), 0), "己亥 丙子 甲戌 甲子");
}

// ---------------------------------------------------------------------------
// 23:00 rollover
// ---------------------------------------------------------------------------

#[test]
fn late_evening_rolls_day_and_hour() {
    let ts = at_micro(1985, 6, 15, 23, 39, 45, 565_197);
    assert_eq!(chart(ts, 8), "乙丑 壬午 丙戌 戊子");
    assert_eq!(raw(ts, 8), "乙丑 壬午 乙酉 丙子");
}

#[test]
fn rollover_across_feb_4_keeps_year() {
    // next day is Feb 4, but the year is taken from the original instant
    let ts = at_micro(2001, 2, 3, 23, 36, 2, 766_854);
    assert_eq!(chart(ts, 8), "庚辰 己丑 戊戌 壬子");
    assert_eq!(raw(ts, 8), "庚辰 己丑 丁酉 庚子");
    assert_eq!(raw(at(2001, 2, 4, 23, 50), 8), "辛巳 庚寅 戊戌 壬子");
}

#[test]
fn rollover_across_new_year() {
    let ts = at_micro(2023, 12, 31, 23, 57, 23, 587_601);
    assert_eq!(chart(ts, 8), "癸卯 甲子 甲子 甲子");
    assert_eq!(raw(ts, 8), "癸卯 甲子 癸亥 壬子");
}

#[test]
fn rollover_only_at_hour_23() {
    for h in 0..23 {
        let ts = at(2011, 2, 1, h, 30);
        assert_eq!(chart(ts, 8), raw(ts, 8), "hour {h}");
    }
}

// ---------------------------------------------------------------------------
// Raw derivation
// ---------------------------------------------------------------------------

#[test]
fn raw_pillars() {
    assert_eq!(raw(at(2011, 2, 1, 12, 0), 8), "庚寅 己丑 丁亥 丙午");
    assert_eq!(raw(at(1800, 1, 1, 5, 0), 0), "己未 丙子 庚寅 己卯");
}

#[test]
fn year_changes_by_date_month_by_longitude() {
    // Sun reaches 315 deg between 08:00 and 09:00 UT on 2024-02-04
    assert_eq!(raw(at(2024, 2, 3, 20, 0), 8), "癸卯 乙丑 丁酉 庚戌");
    assert_eq!(raw(at(2024, 2, 4, 16, 0), 8), "甲辰 丁丑 戊戌 庚申");
    assert_eq!(raw(at(2024, 2, 4, 17, 0), 8), "甲辰 丙寅 戊戌 辛酉");
}

// ---------------------------------------------------------------------------
// Cycle properties
// ---------------------------------------------------------------------------

#[test]
fn epoch_is_term_zero() {
    assert_eq!(day_offset(sexagenary_epoch()), 0);
    assert_eq!(day_term(sexagenary_epoch()), SexagenaryTerm::new(0));
}

#[test]
fn day_pillar_has_period_sixty() {
    let start = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
    for i in 0..2_000 {
        let d = start + Duration::days(i * 37);
        let off = day_offset(d);
        assert_eq!(day_pillar(off), day_pillar(off + 60), "{d}");
        assert_eq!(day_pillar(off).stem, day_pillar(off + 10).stem, "{d}");
        assert_eq!(day_pillar(off).branch, day_pillar(off + 12).branch, "{d}");
    }
}

#[test]
fn pre_epoch_days_resolve() {
    assert_eq!(day_pillar(-36_514).to_string(), "庚寅");
    assert_eq!(day_pillar(-1).to_string(), "癸亥");
}

#[test]
fn hour_branches_cover_all_twelve() {
    let mut hit = [0u8; 12];
    for h in 0..24 {
        hit[usize::from(hour_branch_index(h))] += 1;
    }
    assert_eq!(hit, [2; 12]);
    assert_eq!(ALL_BRANCHES.len(), hit.len());
}

//! Year, Month, Day and Hour pillars of a (solar-corrected) local timestamp.
//!
//! - Year: changes on a fixed Feb 4 ("Start of Spring" approximated by date).
//! - Month: 30 deg slices of the Sun's ecliptic longitude starting at 315 deg.
//! - Day: sexagenary day count from the epoch.
//! - Hour: two-hour branches, the first spanning 23:00..01:00.
//!
//! Cycle arithmetic uses floored modulo throughout so dates before the epoch
//! (and solar years before 4 CE) still index the tables.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bazi_time::{datetime_to_jd, sun_longitude_deg};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::BaziError;
use crate::sexagenary::{SexagenaryTerm, day_offset};
use crate::stem::Stem;
use crate::util::floor_mod;

/// `(month, day)` on which the solar year begins.
pub const SPRING_START: (u32, u32) = (2, 4);

/// Ecliptic longitude at which the first month (寅) begins.
const FIRST_MONTH_LONGITUDE: f64 = 315.0;

/// A stem-branch pair. Displays and serializes as two characters (`甲子`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Stems latent in this pillar's branch.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        self.branch.hidden_stems()
    }

    /// Position in the 60-term cycle, or `None` for a mixed-parity pair.
    pub fn term(self) -> Option<SexagenaryTerm> {
        SexagenaryTerm::from_parts(self.stem, self.branch)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(st), Some(br), None) => Ok(Self::new(Stem::from_char(st)?, Branch::from_char(br)?)),
            _ => Err(BaziError::InvalidPillar(s.to_string())),
        }
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Pillar {
    type Error = BaziError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Which of the four time scales a pillar stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarRole {
    pub const ALL: [PillarRole; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

impl Display for PillarRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the Day and Hour pillars change day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayBoundary {
    /// Civil midnight: the timestamp is taken at face value.
    Midnight,
    /// 23:00: the 子 hour (23:00..00:00) counts toward the following day.
    /// Year and Month are unaffected.
    #[default]
    ZiHour,
}

/// Solar year of a local date: the civil year, less one before Feb 4.
pub fn solar_year(date: NaiveDate) -> i32 {
    if (date.month(), date.day()) < SPRING_START {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Year pillar of a solar year (4 CE is 甲子).
pub fn year_pillar(solar_year: i32) -> Pillar {
    let n = i64::from(solar_year) - 4;
    Pillar::new(
        Stem::from_index(floor_mod(n, 10) as u8),
        Branch::from_index(floor_mod(n, 12) as u8),
    )
}

/// Month slot `0..12` for a solar longitude; slot 0 is the 寅 month.
pub fn month_branch_slot(sun_longitude_deg: f64) -> u8 {
    let adj = bazi_time::normalize_360(sun_longitude_deg - FIRST_MONTH_LONGITUDE);
    ((adj / 30.0).floor() as u8).min(11)
}

/// Month pillar from the year stem and the Sun's longitude.
pub fn month_pillar(year_stem: Stem, sun_longitude_deg: f64) -> Pillar {
    let slot = month_branch_slot(sun_longitude_deg);
    Pillar::new(
        Stem::from_index((year_stem.index() * 2 + 2 + slot) % 10),
        Branch::from_index(slot + 2),
    )
}

/// Day pillar for a signed day offset from the sexagenary epoch.
pub fn day_pillar(day_offset: i64) -> Pillar {
    SexagenaryTerm::from_offset(day_offset).pillar()
}

/// Hour branch index `0..12` for an hour of day; 23 and 0 both map to 子.
pub const fn hour_branch_index(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour pillar; the stem follows from the day offset (the 五鼠遁 rule).
pub fn hour_pillar(day_offset: i64, hour: u32) -> Pillar {
    let hb = hour_branch_index(hour);
    let ds = floor_mod(day_offset, 10) as u8;
    Pillar::new(Stem::from_index(2 * ds + hb), Branch::from_index(hb))
}

/// Sun longitude at the universal-time instant of a local timestamp.
fn sun_longitude_for_local(local: NaiveDateTime, utc_offset_hours: i32) -> f64 {
    let jd = local
        .checked_sub_signed(Duration::hours(i64::from(utc_offset_hours)))
        .map_or_else(
            || datetime_to_jd(local) - f64::from(utc_offset_hours) / 24.0,
            datetime_to_jd,
        );
    sun_longitude_deg(jd)
}

/// The four pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Derive all four pillars from a local timestamp.
    ///
    /// `utc_offset_hours` only positions the Sun for the Month pillar.
    pub fn derive(local: NaiveDateTime, utc_offset_hours: i32, boundary: DayBoundary) -> Self {
        let year = year_pillar(solar_year(local.date()));
        let lon = sun_longitude_for_local(local, utc_offset_hours);
        let month = month_pillar(year.stem, lon);

        let mut offset = day_offset(local.date());
        if boundary == DayBoundary::ZiHour && local.hour() == 23 {
            offset += 1;
        }

        Self {
            year,
            month,
            day: day_pillar(offset),
            hour: hour_pillar(offset, local.hour()),
        }
    }

    pub const fn get(&self, role: PillarRole) -> Pillar {
        match role {
            PillarRole::Year => self.year,
            PillarRole::Month => self.month,
            PillarRole::Day => self.day,
            PillarRole::Hour => self.hour,
        }
    }

    /// Pillars in Year, Month, Day, Hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub const fn branches(&self) -> [Branch; 4] {
        [self.year.branch, self.month.branch, self.day.branch, self.hour.branch]
    }

    /// Hidden stems of each pillar's branch, Year first.
    pub const fn hidden_stems(&self) -> [&'static [Stem]; 4] {
        [
            self.year.hidden_stems(),
            self.month.hidden_stems(),
            self.day.hidden_stems(),
            self.hour.hidden_stems(),
        ]
    }

    /// The Day Master: the day pillar's stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// The month branch, which sets the season.
    pub const fn month_branch(&self) -> Branch {
        self.month.branch
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn solar_year_turns_on_feb_4() {
        assert_eq!(solar_year(date(2024, 2, 3)), 2023);
        assert_eq!(solar_year(date(2024, 2, 4)), 2024);
        assert_eq!(solar_year(date(2024, 1, 31)), 2023);
        assert_eq!(solar_year(date(2024, 12, 31)), 2024);
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(1899).to_string(), "己亥");
        assert_eq!(year_pillar(3).to_string(), "癸亥");
    }

    #[test]
    fn month_slots() {
        assert_eq!(month_branch_slot(315.0), 0);
        assert_eq!(month_branch_slot(344.9), 0);
        assert_eq!(month_branch_slot(345.0), 1);
        assert_eq!(month_branch_slot(0.0), 1);
        assert_eq!(month_branch_slot(314.99), 11);
    }

    #[test]
    fn month_slot_zero_is_tiger() {
        let p = month_pillar(Stem::Jia, 320.0);
        assert_eq!(p.to_string(), "丙寅");
    }

    #[test]
    fn hour_branch_map() {
        let expected = [0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0];
        for (h, &b) in expected.iter().enumerate() {
            assert_eq!(hour_branch_index(h as u32), b, "hour {h}");
        }
    }

    #[test]
    fn hour_stem_follows_day_stem() {
        // 甲 and 己 days start with a 甲子 hour
        assert_eq!(hour_pillar(0, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(5, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(1, 0).to_string(), "丙子");
        assert_eq!(hour_pillar(-1, 12).to_string(), "戊午");
    }

    #[test]
    fn pillar_text_round_trip() {
        let p: Pillar = "庚寅".parse().unwrap();
        assert_eq!(p, Pillar::new(Stem::Geng, Branch::Yin));
        assert_eq!(p.to_string(), "庚寅");
        assert_eq!(p.hidden_stems(), &[Stem::Jia, Stem::Bing, Stem::Wu]);
    }

    #[test]
    fn pillar_text_rejects_bad_input() {
        assert!(matches!("甲".parse::<Pillar>(), Err(BaziError::InvalidPillar(_))));
        assert!(matches!("甲子丑".parse::<Pillar>(), Err(BaziError::InvalidPillar(_))));
        assert_eq!("子甲".parse::<Pillar>(), Err(BaziError::UnknownStem('子')));
    }

    #[test]
    fn every_pillar_is_a_cycle_term() {
        let start = date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        for h in 0..(24 * 400) {
            let ts = start + Duration::hours(h);
            let fp = FourPillars::derive(ts, 8, DayBoundary::ZiHour);
            for p in fp.pillars() {
                assert!(p.term().is_some(), "{p} at {ts}");
            }
        }
    }

    #[test]
    fn zi_hour_boundary_only_moves_day_and_hour() {
        let ts = date(2001, 2, 3).and_hms_opt(23, 50, 0).unwrap();
        let raw = FourPillars::derive(ts, 8, DayBoundary::Midnight);
        let zi = FourPillars::derive(ts, 8, DayBoundary::ZiHour);
        assert_eq!(raw.year, zi.year);
        assert_eq!(raw.month, zi.month);
        assert_eq!(raw.to_string(), "庚辰 己丑 丁酉 庚子");
        assert_eq!(zi.to_string(), "庚辰 己丑 戊戌 壬子");
    }

    #[test]
    fn serializes_as_strings() {
        let p = Pillar::new(Stem::Bing, Branch::Wu);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"丙午\"");
        assert_eq!(serde_json::from_str::<Pillar>("\"丙午\"").unwrap(), p);
        assert!(serde_json::from_str::<Pillar>("\"丙\"").is_err());
    }
}

//! The 60-term sexagenary (jia zi) cycle.
//!
//! Term `i` pairs stem `i mod 10` with branch `i mod 12`; only the 60 pairs
//! of matching parity occur. Day counting is anchored at
//! [`SEXAGENARY_EPOCH`], a 甲子 day.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::util::floor_mod;

/// Calendar date `(year, month, day)` of sexagenary term 0 (甲子).
pub const SEXAGENARY_EPOCH: (i32, u32, u32) = (1899, 12, 22);

/// Days from 0001-01-01 (day 1) to the epoch, proleptic Gregorian.
const EPOCH_DAYS_FROM_CE: i64 = 693_586;

/// Number of terms in the cycle.
pub const CYCLE_LEN: u8 = 60;

// Const-evaluated: an invalid epoch is a build error.
const EPOCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(
    SEXAGENARY_EPOCH.0,
    SEXAGENARY_EPOCH.1,
    SEXAGENARY_EPOCH.2,
) {
    Some(date) => date,
    None => panic!("SEXAGENARY_EPOCH is not a calendar date"),
};

/// The epoch as a date.
pub const fn sexagenary_epoch() -> NaiveDate {
    EPOCH_DATE
}

/// A position in the 60-term cycle (`0..60`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SexagenaryTerm(u8);

impl SexagenaryTerm {
    /// Term at a cycle position, wrapping modulo 60.
    pub const fn new(index: u8) -> Self {
        Self(index % CYCLE_LEN)
    }

    /// Term for any signed day (or year) offset from a 甲子 anchor.
    pub const fn from_offset(offset: i64) -> Self {
        Self(floor_mod(offset, CYCLE_LEN as i64) as u8)
    }

    /// Term with the given stem and branch, if that pair occurs in the cycle.
    pub fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        (0..CYCLE_LEN)
            .map(Self)
            .find(|t| t.stem() == stem && t.branch() == branch)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Stem {
        Stem::from_index(self.0 % 10)
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 % 12)
    }

    pub const fn pillar(self) -> Pillar {
        Pillar::new(self.stem(), self.branch())
    }

    /// The term `n` positions later (negative goes back).
    pub const fn advance(self, n: i64) -> Self {
        Self::from_offset(self.0 as i64 + n)
    }
}

impl Display for SexagenaryTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}

/// Signed days from the epoch to `date`.
pub fn day_offset(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Sexagenary term of a calendar day.
pub fn day_term(date: NaiveDate) -> SexagenaryTerm {
    SexagenaryTerm::from_offset(day_offset(date))
}

//! UTC offsets as supplied by a time zone resolver or typed by a user.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// Largest offset in use anywhere (UTC+14, Line Islands).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A fixed UTC offset with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self { minutes: 0 };

    /// Offset from signed minutes east of Greenwich.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(format!("{minutes} min")));
        }
        Ok(Self { minutes })
    }

    /// Offset from fractional hours, rounded to the minute.
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() {
            return Err(TimeError::NonFinite("UTC offset"));
        }
        let minutes = (hours * 60.0).round();
        if minutes.abs() > f64::from(MAX_OFFSET_MINUTES) {
            return Err(TimeError::InvalidOffset(format!("{hours} h")));
        }
        Self::from_minutes(minutes as i32)
    }

    /// Signed minutes east of Greenwich.
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Signed fractional hours (`5:30` -> `5.5`).
    pub fn hours(self) -> f64 {
        f64::from(self.minutes) / 60.0
    }

    /// Whole hours, truncated toward zero (`5:30` -> `5`, `-3:30` -> `-3`).
    pub const fn whole_hours(self) -> i32 {
        self.minutes / 60
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    /// Accepts `8`, `+8`, `-5`, `5.5`, `+05:30`, `-0330`, `UTC+8`, `GMT-3:30`, `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidOffset(s.to_string());
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let body = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);

        if body.is_empty() || body == "Z" {
            return Ok(Self::UTC);
        }

        let (sign, digits) = match body.as_bytes()[0] {
            b'+' => (1, &body[1..]),
            b'-' => (-1, &body[1..]),
            _ => (1, body),
        };
        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let minutes = if let Some((h, m)) = digits.split_once(':') {
            let h: i32 = h.parse().map_err(|_| invalid())?;
            let m: i32 = m.parse().map_err(|_| invalid())?;
            if !(0..60).contains(&m) {
                return Err(invalid());
            }
            h.checked_mul(60)
                .and_then(|v| v.checked_add(m))
                .ok_or_else(invalid)?
        } else if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
            let h: i32 = digits[..2].parse().map_err(|_| invalid())?;
            let m: i32 = digits[2..].parse().map_err(|_| invalid())?;
            if !(0..60).contains(&m) {
                return Err(invalid());
            }
            h.checked_mul(60)
                .and_then(|v| v.checked_add(m))
                .ok_or_else(invalid)?
        } else {
            let hours: f64 = digits.parse().map_err(|_| invalid())?;
            if !hours.is_finite() {
                return Err(invalid());
            }
            (hours * 60.0).round() as i32
        };

        Self::from_minutes(sign * minutes).map_err(|_| invalid())
    }
}

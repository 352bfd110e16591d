//! Signed sexagesimal (degrees, minutes, seconds) angle values.
//!
//! Conversion from float floors each unit and rounds only at the last
//! level: the fractional seconds are rounded at the 30-third boundary and
//! the carry cascades through seconds and minutes into degrees. Values that
//! are exact multiples of one arc-second survive a float round-trip; others
//! lose sub-second precision.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::MathError;

/// Sign of a sexagesimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AngleSign {
    Positive,
    Negative,
}

impl AngleSign {
    pub const fn symbol(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }

    const fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// An angle as sign, whole degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sexagesimal {
    pub sign: AngleSign,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Sexagesimal {
    pub const fn new(sign: AngleSign, degrees: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            sign,
            degrees,
            minutes,
            seconds,
        }
    }

    /// Convert decimal degrees, rounding at the seconds level.
    pub fn from_degrees(value: f64) -> Self {
        let sign = if value < 0.0 {
            AngleSign::Negative
        } else {
            AngleSign::Positive
        };

        // degrees, minutes, seconds, thirds
        let mut units = [0u32; 4];
        let mut rest = value.abs();
        for unit in units.iter_mut() {
            let whole = rest.floor();
            *unit = whole as u32;
            rest = (rest - whole) * 60.0;
        }

        units[3] = if units[3] >= 30 { 60 } else { 0 };
        for i in (1..units.len()).rev() {
            if units[i] == 60 {
                units[i] = 0;
                units[i - 1] += 1;
            }
        }

        Self::new(sign, units[0], units[1], units[2])
    }

    /// Convert back to decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        let value =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0;
        value * self.sign.factor()
    }
}

impl Display for Sexagesimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{:02}:{:02}:{:02}",
            self.sign.symbol(),
            self.degrees,
            self.minutes,
            self.seconds
        )
    }
}

impl FromStr for Sexagesimal {
    type Err = MathError;

    /// Parse `[+|-]D[:M[:S]]`. Missing trailing components are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let sign = if trimmed.starts_with('-') {
            AngleSign::Negative
        } else {
            AngleSign::Positive
        };

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > 3 || trimmed.is_empty() {
            return Err(MathError::InvalidSexagesimal(s.to_string()));
        }

        let mut values = [0u32; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            let n: i64 = part
                .trim()
                .parse()
                .map_err(|_| MathError::InvalidSexagesimal(s.to_string()))?;
            *slot = n.unsigned_abs() as u32;
        }

        Ok(Self::new(sign, values[0], values[1], values[2]))
    }
}

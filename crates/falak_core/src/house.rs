//! House identities, house-placement conventions and house systems.
//!
//! A body belongs to the house whose cusp (shifted by the configured
//! offset) it has passed by less than the house size. The traditional
//! convention moves each cusp 5 deg back so that a body just before a cusp
//! is already counted in that house.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::qualities::Gender;

/// House number, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HouseId(u8);

/// All 12 houses in order.
pub const ALL_HOUSES: [HouseId; 12] = [
    HouseId(1),
    HouseId(2),
    HouseId(3),
    HouseId(4),
    HouseId(5),
    HouseId(6),
    HouseId(7),
    HouseId(8),
    HouseId(9),
    HouseId(10),
    HouseId(11),
    HouseId(12),
];

/// Angular, succedent or cadent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HouseCondition {
    Angular,
    Succedent,
    Cadent,
}

impl HouseId {
    /// House with number `n`, if `1 <= n <= 12`.
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 { Some(Self(n)) } else { None }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index (House1 = 0).
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub const fn condition(self) -> HouseCondition {
        match self.index() % 3 {
            0 => HouseCondition::Angular,
            1 => HouseCondition::Succedent,
            _ => HouseCondition::Cadent,
        }
    }

    pub const fn gender(self) -> Gender {
        if self.index() % 2 == 0 {
            Gender::Masculine
        } else {
            Gender::Feminine
        }
    }

    /// Houses 7 through 12 lie above the horizon.
    pub const fn is_above_horizon(self) -> bool {
        self.0 >= 7
    }

    /// The next house in order, wrapping 12 to 1.
    pub const fn next(self) -> Self {
        ALL_HOUSES[(self.index() + 1) % 12]
    }
}

impl std::fmt::Display for HouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "House{}", self.0)
    }
}

impl FromStr for HouseId {
    type Err = CoreError;

    /// Accepts `House7` or `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("House").unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .ok()
            .and_then(HouseId::new)
            .ok_or_else(|| CoreError::UnknownIdentifier(s.to_string()))
    }
}

/// Shift applied to every cusp before house membership is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseOffset {
    /// Cusp moved 5 deg back.
    #[default]
    Traditional,
    /// Cusp used as is.
    Modern,
    /// Cusp moved 3 deg back.
    Evolutive,
}

impl HouseOffset {
    pub const fn degrees(self) -> f64 {
        match self {
            Self::Traditional => -5.0,
            Self::Modern => 0.0,
            Self::Evolutive => -3.0,
        }
    }
}

/// House systems an ephemeris provider may be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Porphyrius,
    Regiomontanus,
    Campanus,
    Equal,
    WholeSign,
    Meridian,
    Alcabitus,
    Morinus,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Porphyrius => "Porphyrius",
            Self::Regiomontanus => "Regiomontanus",
            Self::Campanus => "Campanus",
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
            Self::Meridian => "Meridian",
            Self::Alcabitus => "Alcabitus",
            Self::Morinus => "Morinus",
        }
    }
}

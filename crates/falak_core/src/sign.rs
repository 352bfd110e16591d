//! The twelve tropical signs and their static properties.
//!
//! Signs are 30 deg wide starting at 0 deg Aries. Properties cycle with
//! the sign index: gender and faction alternate from Aries (masculine,
//! diurnal), elements repeat every four signs, modes every three, and the
//! Sun's seasons every three from Aries.

use std::str::FromStr;

use falak_math::normalize;
use serde::Serialize;

use crate::error::CoreError;
use crate::qualities::{Element, Faction, Gender, Mode, SunSeason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let idx = (normalize(lon_deg) / 30.0).floor() as usize;
        ALL_SIGNS[idx.min(11)]
    }

    /// Longitude of the first degree of this sign.
    pub const fn start_lon(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub const fn gender(self) -> Gender {
        if self.index() % 2 == 0 {
            Gender::Masculine
        } else {
            Gender::Feminine
        }
    }

    pub const fn faction(self) -> Faction {
        if self.index() % 2 == 0 {
            Faction::Diurnal
        } else {
            Faction::Nocturnal
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn mode(self) -> Mode {
        match self.index() % 3 {
            0 => Mode::Cardinal,
            1 => Mode::Fixed,
            _ => Mode::Mutable,
        }
    }

    /// Season while the Sun transits this sign.
    pub const fn sun_season(self) -> SunSeason {
        match self.index() / 3 {
            0 => SunSeason::Spring,
            1 => SunSeason::Summer,
            2 => SunSeason::Autumn,
            _ => SunSeason::Winter,
        }
    }
}

impl FromStr for Sign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownIdentifier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_longitude_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.999), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-1.0), Sign::Pisces);
        assert_eq!(Sign::from_longitude(360.0), Sign::Aries);
    }

    #[test]
    fn property_cycles() {
        assert_eq!(Sign::Aries.gender(), Gender::Masculine);
        assert_eq!(Sign::Taurus.gender(), Gender::Feminine);
        assert_eq!(Sign::Cancer.element(), Element::Water);
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Libra.mode(), Mode::Cardinal);
        assert_eq!(Sign::Pisces.mode(), Mode::Mutable);
        assert_eq!(Sign::Gemini.sun_season(), SunSeason::Spring);
        assert_eq!(Sign::Capricorn.sun_season(), SunSeason::Winter);
    }

    #[test]
    fn parse_names() {
        assert_eq!("scorpio".parse::<Sign>().unwrap(), Sign::Scorpio);
        assert!(matches!(
            "Ophiuchus".parse::<Sign>(),
            Err(CoreError::UnknownIdentifier(_))
        ));
    }

    #[test]
    fn index_matches_order() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index(), i);
        }
    }
}

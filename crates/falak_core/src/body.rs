//! Chart body identities and their static properties.
//!
//! Orbs and mean daily motions follow the traditional tables. Gender,
//! faction, element, temperament and joys are only defined for the seven
//! classical planets; everything else returns `None`.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::house::HouseId;
use crate::qualities::{Element, Faction, Gender, Temperament};
use crate::sign::Sign;

/// Bodies that can be placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
    Syzygy,
    ParsFortuna,
    Pholus,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

/// Broad classification of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyKind {
    Planet,
    MoonNode,
    Lunation,
    ArabicPart,
    Asteroid,
}

/// The seven classical planets, Sun through Saturn, in table order.
pub const SEVEN_PLANETS: [BodyId; 7] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
];

/// Default body list for a traditional chart.
pub const TRADITIONAL_BODIES: [BodyId; 11] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::NorthNode,
    BodyId::SouthNode,
    BodyId::Syzygy,
    BodyId::ParsFortuna,
];

/// Every body, modern and traditional.
pub const ALL_BODIES: [BodyId; 20] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
    BodyId::Pluto,
    BodyId::Chiron,
    BodyId::NorthNode,
    BodyId::SouthNode,
    BodyId::Syzygy,
    BodyId::ParsFortuna,
    BodyId::Pholus,
    BodyId::Ceres,
    BodyId::Pallas,
    BodyId::Juno,
    BodyId::Vesta,
];

impl BodyId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Chiron => "Chiron",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Syzygy => "Syzygy",
            Self::ParsFortuna => "Pars Fortuna",
            Self::Pholus => "Pholus",
            Self::Ceres => "Ceres",
            Self::Pallas => "Pallas",
            Self::Juno => "Juno",
            Self::Vesta => "Vesta",
        }
    }

    pub const fn kind(self) -> BodyKind {
        match self {
            Self::NorthNode | Self::SouthNode => BodyKind::MoonNode,
            Self::Syzygy => BodyKind::Lunation,
            Self::ParsFortuna => BodyKind::ArabicPart,
            Self::Chiron | Self::Pholus | Self::Ceres | Self::Pallas | Self::Juno | Self::Vesta => {
                BodyKind::Asteroid
            }
            _ => BodyKind::Planet,
        }
    }

    /// Whether this is one of the seven classical planets.
    pub const fn is_classical(self) -> bool {
        matches!(
            self,
            Self::Sun
                | Self::Moon
                | Self::Mercury
                | Self::Venus
                | Self::Mars
                | Self::Jupiter
                | Self::Saturn
        )
    }

    /// Bodies computed from other positions rather than read from an ephemeris.
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::SouthNode | Self::Syzygy | Self::ParsFortuna)
    }

    /// Aspect orb radius in degrees.
    pub const fn orb(self) -> f64 {
        match self {
            Self::Sun => 15.0,
            Self::Moon => 12.0,
            Self::Mercury | Self::Venus => 7.0,
            Self::Mars => 8.0,
            Self::Jupiter | Self::Saturn => 9.0,
            Self::NorthNode | Self::SouthNode => 12.0,
            Self::Syzygy | Self::ParsFortuna => 0.0,
            Self::Uranus
            | Self::Neptune
            | Self::Pluto
            | Self::Chiron
            | Self::Pholus
            | Self::Ceres
            | Self::Pallas
            | Self::Juno
            | Self::Vesta => 5.0,
        }
    }

    /// Mean daily motion in degrees, where tabulated.
    pub const fn mean_motion(self) -> Option<f64> {
        match self {
            Self::Sun | Self::Mercury | Self::Venus => Some(0.9833),
            Self::Moon | Self::NorthNode | Self::SouthNode => Some(13.1833),
            Self::Mars => Some(0.5166),
            Self::Jupiter => Some(0.0833),
            Self::Saturn => Some(0.0333),
            Self::Uranus => Some(0.001),
            Self::Neptune => Some(0.0001),
            Self::Pluto | Self::Chiron => Some(0.00001),
            Self::Syzygy => Some(0.0),
            _ => None,
        }
    }

    /// Mercury has no gender of its own.
    pub const fn gender(self) -> Option<Gender> {
        match self {
            Self::Saturn | Self::Jupiter | Self::Mars | Self::Sun => Some(Gender::Masculine),
            Self::Venus | Self::Moon => Some(Gender::Feminine),
            _ => None,
        }
    }

    /// Mercury has no faction of its own.
    pub const fn faction(self) -> Option<Faction> {
        match self {
            Self::Saturn | Self::Jupiter | Self::Sun => Some(Faction::Diurnal),
            Self::Mars | Self::Venus | Self::Moon => Some(Faction::Nocturnal),
            _ => None,
        }
    }

    pub const fn element(self) -> Option<Element> {
        match self {
            Self::Saturn | Self::Mercury => Some(Element::Earth),
            Self::Jupiter | Self::Venus => Some(Element::Air),
            Self::Mars | Self::Sun => Some(Element::Fire),
            Self::Moon => Some(Element::Water),
            _ => None,
        }
    }

    pub const fn temperament(self) -> Option<Temperament> {
        match self.element() {
            Some(element) => Some(element.temperament()),
            None => None,
        }
    }

    pub const fn sign_joy(self) -> Option<Sign> {
        match self {
            Self::Saturn => Some(Sign::Aquarius),
            Self::Jupiter => Some(Sign::Sagittarius),
            Self::Mars => Some(Sign::Scorpio),
            Self::Sun => Some(Sign::Leo),
            Self::Venus => Some(Sign::Taurus),
            Self::Mercury => Some(Sign::Virgo),
            Self::Moon => Some(Sign::Cancer),
            _ => None,
        }
    }

    pub const fn house_joy(self) -> Option<HouseId> {
        let n = match self {
            Self::Saturn => 12,
            Self::Jupiter => 11,
            Self::Mars => 6,
            Self::Sun => 9,
            Self::Venus => 5,
            Self::Mercury => 1,
            Self::Moon => 3,
            _ => return None,
        };
        HouseId::new(n)
    }
}

impl FromStr for BodyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownIdentifier(s.to_string()))
    }
}

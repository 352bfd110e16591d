//! Elemental and sectarian qualities shared by signs, bodies and houses.

use serde::Serialize;

/// Masculine or feminine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Diurnal or nocturnal sect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Faction {
    Diurnal,
    Nocturnal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Temperament associated with this element.
    pub const fn temperament(self) -> Temperament {
        match self {
            Self::Fire => Temperament::Choleric,
            Self::Earth => Temperament::Melancholic,
            Self::Air => Temperament::Sanguine,
            Self::Water => Temperament::Phlegmatic,
        }
    }
}

/// Sign modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Temperament {
    Choleric,
    Melancholic,
    Sanguine,
    Phlegmatic,
}

/// All four temperaments in scoring order.
pub const ALL_TEMPERAMENTS: [Temperament; 4] = [
    Temperament::Choleric,
    Temperament::Melancholic,
    Temperament::Sanguine,
    Temperament::Phlegmatic,
];

impl Temperament {
    /// The two primary qualities (heat, moisture) of a temperament.
    pub const fn qualities(self) -> [Quality; 2] {
        match self {
            Self::Choleric => [Quality::Hot, Quality::Dry],
            Self::Melancholic => [Quality::Cold, Quality::Dry],
            Self::Sanguine => [Quality::Hot, Quality::Humid],
            Self::Phlegmatic => [Quality::Cold, Quality::Humid],
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Choleric => 0,
            Self::Melancholic => 1,
            Self::Sanguine => 2,
            Self::Phlegmatic => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Hot,
    Cold,
    Dry,
    Humid,
}

/// All four primary qualities in scoring order.
pub const ALL_QUALITIES: [Quality; 4] = [Quality::Hot, Quality::Cold, Quality::Dry, Quality::Humid];

impl Quality {
    pub const fn index(self) -> usize {
        match self {
            Self::Hot => 0,
            Self::Cold => 1,
            Self::Dry => 2,
            Self::Humid => 3,
        }
    }
}

/// Season marked by the Sun's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SunSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SunSeason {
    pub const fn element(self) -> Element {
        match self {
            Self::Spring => Element::Air,
            Self::Summer => Element::Fire,
            Self::Autumn => Element::Earth,
            Self::Winter => Element::Water,
        }
    }
}

/// Quarter of the lunation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    FirstQuarter,
    SecondQuarter,
    ThirdQuarter,
    LastQuarter,
}

impl MoonPhase {
    /// Phase from the Sun-to-Moon forward distance in degrees.
    pub fn from_elongation(dist_deg: f64) -> Self {
        if dist_deg < 90.0 {
            Self::FirstQuarter
        } else if dist_deg < 180.0 {
            Self::SecondQuarter
        } else if dist_deg < 270.0 {
            Self::ThirdQuarter
        } else {
            Self::LastQuarter
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::FirstQuarter => Element::Air,
            Self::SecondQuarter => Element::Fire,
            Self::ThirdQuarter => Element::Earth,
            Self::LastQuarter => Element::Water,
        }
    }
}

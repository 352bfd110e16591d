//! Types describing an aspect between two chart points.

use std::fmt::{Display, Formatter};

use falak_core::PointId;
use serde::Serialize;

/// Canonical aspect angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectType {
    /// Sentinel returned when no candidate angle qualifies.
    NoAspect,
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    SemiSextile,
    SemiQuintile,
    SemiSquare,
    Quintile,
    SesquiQuintile,
    SesquiSquare,
    BiQuintile,
    Quincunx,
}

pub const MAJOR_ASPECTS: [AspectType; 5] = [
    AspectType::Conjunction,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Opposition,
];

pub const MINOR_ASPECTS: [AspectType; 8] = [
    AspectType::SemiSextile,
    AspectType::SemiQuintile,
    AspectType::SemiSquare,
    AspectType::Quintile,
    AspectType::SesquiQuintile,
    AspectType::SesquiSquare,
    AspectType::BiQuintile,
    AspectType::Quincunx,
];

/// Major aspects followed by minor ones.
pub const ALL_ASPECTS: [AspectType; 13] = [
    AspectType::Conjunction,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Opposition,
    AspectType::SemiSextile,
    AspectType::SemiQuintile,
    AspectType::SemiSquare,
    AspectType::Quintile,
    AspectType::SesquiQuintile,
    AspectType::SesquiSquare,
    AspectType::BiQuintile,
    AspectType::Quincunx,
];

impl AspectType {
    /// Exact angle in degrees; the sentinel reports -1.
    pub const fn angle(self) -> f64 {
        match self {
            Self::NoAspect => -1.0,
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
            Self::SemiSextile => 30.0,
            Self::SemiQuintile => 36.0,
            Self::SemiSquare => 45.0,
            Self::Quintile => 72.0,
            Self::SesquiQuintile => 108.0,
            Self::SesquiSquare => 135.0,
            Self::BiQuintile => 144.0,
            Self::Quincunx => 150.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NoAspect => "No aspect",
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
            Self::SemiSextile => "Semi-sextile",
            Self::SemiQuintile => "Semi-quintile",
            Self::SemiSquare => "Semi-square",
            Self::Quintile => "Quintile",
            Self::SesquiQuintile => "Sesqui-quintile",
            Self::SesquiSquare => "Sesqui-square",
            Self::BiQuintile => "Bi-quintile",
            Self::Quincunx => "Quincunx",
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Sextile | Self::Square | Self::Trine | Self::Opposition
        )
    }

    pub const fn is_minor(self) -> bool {
        !self.is_major() && !matches!(self, Self::NoAspect)
    }
}

impl Display for AspectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Movement of one role relative to exactness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Movement {
    Applicative,
    Separative,
    Exact,
    Stationary,
    NoMovement,
}

/// Which side of the active point the passive point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Passive point behind the active one (separation <= 0).
    Dexter,
    Sinister,
}

/// Whether the aspect is perfected within the signs the points occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    Associate,
    Dissociate,
}

/// Per-point view of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRole {
    pub id: PointId,
    /// Orb within this point's own orb radius.
    pub in_orb: bool,
    pub movement: Movement,
}

impl AspectRole {
    pub(crate) const fn idle(id: PointId) -> Self {
        Self {
            id,
            in_orb: false,
            movement: Movement::NoMovement,
        }
    }
}

/// Relation between an active and a passive point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub aspect_type: AspectType,
    /// Absolute deviation from the exact angle (0 for the sentinel).
    pub orb: f64,
    /// Signed shortest distance from the active to the passive point.
    pub separation: f64,
    pub direction: Option<Direction>,
    pub condition: Option<Condition>,
    pub active: AspectRole,
    pub passive: AspectRole,
}

impl Aspect {
    pub fn exists(&self) -> bool {
        self.aspect_type != AspectType::NoAspect
    }

    /// Active movement, with a separative aspect under 1 deg reported as exact.
    pub fn movement(&self) -> Movement {
        if self.active.movement == Movement::Separative && self.orb < 1.0 {
            Movement::Exact
        } else {
            self.active.movement
        }
    }

    /// Both points within their own orb.
    pub fn mutual_aspect(&self) -> bool {
        self.active.in_orb && self.passive.in_orb
    }

    pub fn mutual_movement(&self) -> bool {
        self.active.movement == self.passive.movement
    }

    /// Role played by a point, if it takes part in this aspect.
    pub fn role(&self, id: PointId) -> Option<&AspectRole> {
        if self.active.id == id {
            Some(&self.active)
        } else if self.passive.id == id {
            Some(&self.passive)
        } else {
            None
        }
    }

    pub fn in_orb(&self, id: PointId) -> bool {
        self.role(id).is_some_and(|r| r.in_orb)
    }
}

impl Display for Aspect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} (orb {:.2})",
            self.active.id, self.aspect_type, self.passive.id, self.orb
        )
    }
}

//! Promissor and significator points.
//!
//! Each point carries its equatorial coordinates twice: with its true
//! latitude (in mundo) and with latitude forced to zero (in zodiaco).

use std::fmt::{Display, Formatter};

use falak_aspects::AspectType;
use falak_core::{AngleId, BodyId, Sign};
use falak_math::ecliptic_to_equatorial;
use serde::Serialize;

use crate::error::DirectionError;

/// Chart object a direction point is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DirectedObject {
    Body(BodyId),
    Angle(AngleId),
}

impl DirectedObject {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Body(id) => id.name(),
            Self::Angle(id) => id.name(),
        }
    }
}

impl From<BodyId> for DirectedObject {
    fn from(id: BodyId) -> Self {
        Self::Body(id)
    }
}

impl From<AngleId> for DirectedObject {
    fn from(id: AngleId) -> Self {
        Self::Angle(id)
    }
}

/// Identity of a direction point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DirectionPointId {
    /// Start of a planet's term in a sign.
    Term { ruler: BodyId, sign: Sign },
    Antiscia(BodyId),
    ContraAntiscia(BodyId),
    /// Aspect point behind the object (`lon - angle`).
    Dexter(DirectedObject, AspectType),
    /// Aspect point ahead of the object (`lon + angle`).
    Sinister(DirectedObject, AspectType),
    /// Conjunction or opposition point.
    Natal(DirectedObject, AspectType),
}

impl DirectionPointId {
    /// Whether this point is derived from `obj`. Terms belong to their ruler.
    pub fn involves(&self, obj: DirectedObject) -> bool {
        match *self {
            Self::Term { ruler, .. } | Self::Antiscia(ruler) | Self::ContraAntiscia(ruler) => {
                obj == DirectedObject::Body(ruler)
            }
            Self::Dexter(o, _) | Self::Sinister(o, _) | Self::Natal(o, _) => o == obj,
        }
    }
}

impl Display for DirectionPointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Term { ruler, sign } => write!(f, "T_{}_{}", ruler.name(), sign.name()),
            Self::Antiscia(id) => write!(f, "A_{}", id.name()),
            Self::ContraAntiscia(id) => write!(f, "C_{}", id.name()),
            Self::Dexter(o, asp) => write!(f, "D_{}_{}", o.name(), asp.angle()),
            Self::Sinister(o, asp) => write!(f, "S_{}_{}", o.name(), asp.angle()),
            Self::Natal(o, asp) => write!(f, "N_{}_{}", o.name(), asp.angle()),
        }
    }
}

/// A point with in-mundo and in-zodiaco equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionPoint {
    pub id: DirectionPointId,
    pub lon: f64,
    pub lat: f64,
    pub ra: f64,
    pub decl: f64,
    /// Right ascension at zero latitude.
    pub ra_z: f64,
    /// Declination at zero latitude.
    pub decl_z: f64,
}

impl DirectionPoint {
    pub fn new(id: DirectionPointId, lon: f64, lat: f64) -> Result<Self, DirectionError> {
        let mundo = ecliptic_to_equatorial(lon, lat)?;
        let zodiaco = if lat == 0.0 {
            mundo
        } else {
            ecliptic_to_equatorial(lon, 0.0)?
        };
        Ok(Self {
            id,
            lon,
            lat,
            ra: mundo.ra_deg,
            decl: mundo.decl_deg,
            ra_z: zodiaco.ra_deg,
            decl_z: zodiaco.decl_deg,
        })
    }
}

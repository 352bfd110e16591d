//! Positional records placed in a chart.
//!
//! Every record carries a [`Position`] whose sign and sign-longitude are
//! derived from the longitude when it is built. Relocation returns a new
//! record; nothing is mutated in place.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use falak_math::{EquatorialCoords, MathError, closest_distance, distance, ecliptic_to_equatorial, normalize};
use serde::Serialize;

use crate::body::BodyId;
use crate::ephemeris::EclipticState;
use crate::error::CoreError;
use crate::fixed_star::FixedStarId;
use crate::house::{HouseId, HouseOffset};
use crate::sign::Sign;

/// Longitudinal speed below which a body counts as stationary (deg/day).
pub const STATIONARY_SPEED: f64 = 0.0003;

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

/// The four chart angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AngleId {
    Asc,
    Mc,
    Desc,
    Ic,
}

/// Angles in provider order.
pub const ALL_ANGLES: [AngleId; 4] = [AngleId::Asc, AngleId::Mc, AngleId::Desc, AngleId::Ic];

impl AngleId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Asc => "Asc",
            Self::Mc => "MC",
            Self::Desc => "Desc",
            Self::Ic => "IC",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for AngleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ANGLES
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownIdentifier(s.to_string()))
    }
}

/// Identity of any chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointId {
    Body(BodyId),
    House(HouseId),
    Angle(AngleId),
    FixedStar(FixedStarId),
    Antiscia(BodyId),
    ContraAntiscia(BodyId),
    /// Named derived point such as an Arabic part.
    Named(&'static str),
}

impl PointId {
    pub const fn as_body(self) -> Option<BodyId> {
        match self {
            Self::Body(id) => Some(id),
            _ => None,
        }
    }
}

impl Display for PointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body(id) => f.write_str(id.name()),
            Self::House(id) => write!(f, "{id}"),
            Self::Angle(id) => f.write_str(id.name()),
            Self::FixedStar(id) => f.write_str(id.name()),
            Self::Antiscia(id) => write!(f, "Antiscia {}", id.name()),
            Self::ContraAntiscia(id) => write!(f, "Contra-antiscia {}", id.name()),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl From<BodyId> for PointId {
    fn from(id: BodyId) -> Self {
        Self::Body(id)
    }
}

impl From<HouseId> for PointId {
    fn from(id: HouseId) -> Self {
        Self::House(id)
    }
}

impl From<AngleId> for PointId {
    fn from(id: AngleId) -> Self {
        Self::Angle(id)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Ecliptic position with its derived sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Longitude in [0, 360).
    pub lon: f64,
    pub lat: f64,
    pub sign: Sign,
    /// Longitude within the sign, in [0, 30).
    pub sign_lon: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        let lon = normalize(lon);
        let sign = Sign::from_longitude(lon);
        Self {
            lon,
            lat,
            sign,
            sign_lon: lon % 30.0,
        }
    }

    /// Same latitude at a new longitude.
    pub fn relocated(&self, lon: f64) -> Self {
        Self::new(lon, self.lat)
    }

    /// Equatorial coordinates, optionally ignoring latitude.
    pub fn equatorial(&self, zero_lat: bool) -> Result<EquatorialCoords, MathError> {
        let lat = if zero_lat { 0.0 } else { self.lat };
        ecliptic_to_equatorial(self.lon, lat)
    }
}

/// Shared read access to chart points.
pub trait Positional {
    fn point_id(&self) -> PointId;

    fn position(&self) -> &Position;

    fn lon(&self) -> f64 {
        self.position().lon
    }

    fn lat(&self) -> f64 {
        self.position().lat
    }

    fn sign(&self) -> Sign {
        self.position().sign
    }

    fn sign_lon(&self) -> f64 {
        self.position().sign_lon
    }

    /// Aspect orb radius. Points without one report -1.
    fn orb(&self) -> f64 {
        -1.0
    }

    /// Longitudinal speed for orbiting bodies, `None` for fixed points.
    fn lon_speed(&self) -> Option<f64> {
        None
    }
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// Direction of apparent motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Motion {
    Direct,
    Retrograde,
    Stationary,
}

impl Motion {
    pub fn from_speed(lon_speed: f64) -> Self {
        if lon_speed.abs() < STATIONARY_SPEED {
            Self::Stationary
        } else if lon_speed > 0.0 {
            Self::Direct
        } else {
            Self::Retrograde
        }
    }
}

/// A body placed at an ecliptic position with its daily speeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPoint {
    pub id: BodyId,
    pub position: Position,
    /// Longitude speed in deg/day.
    pub lon_speed: f64,
    /// Latitude speed in deg/day.
    pub lat_speed: f64,
}

impl BodyPoint {
    pub fn new(id: BodyId, lon: f64, lat: f64, lon_speed: f64, lat_speed: f64) -> Self {
        Self {
            id,
            position: Position::new(lon, lat),
            lon_speed,
            lat_speed,
        }
    }

    pub fn from_state(id: BodyId, state: &EclipticState) -> Self {
        Self::new(id, state.lon, state.lat, state.lon_speed, state.lat_speed)
    }

    pub fn relocated(&self, lon: f64) -> Self {
        Self {
            position: self.position.relocated(lon),
            ..*self
        }
    }

    pub fn motion(&self) -> Motion {
        Motion::from_speed(self.lon_speed)
    }

    pub fn is_direct(&self) -> bool {
        self.motion() == Motion::Direct
    }

    pub fn is_retrograde(&self) -> bool {
        self.motion() == Motion::Retrograde
    }

    pub fn is_stationary(&self) -> bool {
        self.motion() == Motion::Stationary
    }

    /// Faster than its mean daily motion. Untabulated bodies are never fast.
    pub fn is_fast(&self) -> bool {
        self.id
            .mean_motion()
            .is_some_and(|mean| self.lon_speed.abs() >= mean)
    }

    /// Reflection across the solstitial axis (0 Cancer / 0 Capricorn).
    pub fn antiscia(&self) -> DerivedPoint {
        DerivedPoint::new(
            PointId::Antiscia(self.id),
            self.position.relocated(360.0 - self.position.lon + 180.0),
        )
    }

    /// Reflection across the equinoctial axis (0 Aries / 0 Libra).
    pub fn contra_antiscia(&self) -> DerivedPoint {
        DerivedPoint::new(
            PointId::ContraAntiscia(self.id),
            self.position.relocated(360.0 - self.position.lon),
        )
    }
}

impl Positional for BodyPoint {
    fn point_id(&self) -> PointId {
        PointId::Body(self.id)
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn orb(&self) -> f64 {
        self.id.orb()
    }

    fn lon_speed(&self) -> Option<f64> {
        Some(self.lon_speed)
    }
}

// ---------------------------------------------------------------------------
// Houses, angles, stars, derived points
// ---------------------------------------------------------------------------

/// House cusp with the arc it spans to the next cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HousePoint {
    pub id: HouseId,
    pub position: Position,
    /// Forward arc to the next cusp, in degrees.
    pub size: f64,
}

impl HousePoint {
    pub fn new(id: HouseId, lon: f64, size: f64) -> Self {
        Self {
            id,
            position: Position::new(lon, 0.0),
            size,
        }
    }

    /// Whether `lon` falls in this house under the given offset convention.
    pub fn contains(&self, lon: f64, offset: HouseOffset) -> bool {
        distance(self.position.lon + offset.degrees(), lon) < self.size
    }

    pub fn relocated(&self, lon: f64) -> Self {
        Self {
            position: self.position.relocated(lon),
            ..*self
        }
    }
}

impl Positional for HousePoint {
    fn point_id(&self) -> PointId {
        PointId::House(self.id)
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnglePoint {
    pub id: AngleId,
    pub position: Position,
}

impl AnglePoint {
    pub fn new(id: AngleId, lon: f64) -> Self {
        Self {
            id,
            position: Position::new(lon, 0.0),
        }
    }

    pub fn relocated(&self, lon: f64) -> Self {
        Self {
            position: self.position.relocated(lon),
            ..*self
        }
    }
}

impl Positional for AnglePoint {
    fn point_id(&self) -> PointId {
        PointId::Angle(self.id)
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

/// Magnitude thresholds and the orb granted below each.
const STAR_ORBS: [(f64, f64); 4] = [(2.0, 7.5), (3.0, 5.5), (4.0, 3.5), (5.0, 1.5)];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedStarPoint {
    pub id: FixedStarId,
    pub position: Position,
    /// Visual magnitude.
    pub magnitude: f64,
}

impl FixedStarPoint {
    pub fn new(id: FixedStarId, lon: f64, lat: f64, magnitude: f64) -> Self {
        Self {
            id,
            position: Position::new(lon, lat),
            magnitude,
        }
    }

    /// Stars aspect by conjunction only.
    pub fn conjuncts(&self, lon: f64) -> bool {
        closest_distance(self.position.lon, lon).abs() < self.orb()
    }
}

impl Positional for FixedStarPoint {
    fn point_id(&self) -> PointId {
        PointId::FixedStar(self.id)
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn orb(&self) -> f64 {
        STAR_ORBS
            .iter()
            .find(|(mag, _)| self.magnitude < *mag)
            .map_or(0.5, |(_, orb)| *orb)
    }
}

/// A computed point (antiscia, Arabic part, direction point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedPoint {
    pub id: PointId,
    pub position: Position,
}

impl DerivedPoint {
    pub const fn new(id: PointId, position: Position) -> Self {
        Self { id, position }
    }

    pub fn at(id: PointId, lon: f64) -> Self {
        Self::new(id, Position::new(lon, 0.0))
    }
}

impl Positional for DerivedPoint {
    fn point_id(&self) -> PointId {
        self.id
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

/// Closed set of chart point records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ChartPoint {
    Body(BodyPoint),
    House(HousePoint),
    Angle(AnglePoint),
    FixedStar(FixedStarPoint),
    Derived(DerivedPoint),
}

impl ChartPoint {
    fn inner(&self) -> &dyn Positional {
        match self {
            Self::Body(p) => p,
            Self::House(p) => p,
            Self::Angle(p) => p,
            Self::FixedStar(p) => p,
            Self::Derived(p) => p,
        }
    }
}

impl Positional for ChartPoint {
    fn point_id(&self) -> PointId {
        self.inner().point_id()
    }

    fn position(&self) -> &Position {
        self.inner().position()
    }

    fn orb(&self) -> f64 {
        self.inner().orb()
    }

    fn lon_speed(&self) -> Option<f64> {
        self.inner().lon_speed()
    }
}

impl From<BodyPoint> for ChartPoint {
    fn from(p: BodyPoint) -> Self {
        Self::Body(p)
    }
}

impl From<HousePoint> for ChartPoint {
    fn from(p: HousePoint) -> Self {
        Self::House(p)
    }
}

impl From<AnglePoint> for ChartPoint {
    fn from(p: AnglePoint) -> Self {
        Self::Angle(p)
    }
}

impl From<FixedStarPoint> for ChartPoint {
    fn from(p: FixedStarPoint) -> Self {
        Self::FixedStar(p)
    }
}

impl From<DerivedPoint> for ChartPoint {
    fn from(p: DerivedPoint) -> Self {
        Self::Derived(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn position_derives_sign() {
        let p = Position::new(95.5, 1.0);
        assert_eq!(p.sign, Sign::Cancer);
        assert!((p.sign_lon - 5.5).abs() < EPS);

        let p = Position::new(-10.0, 0.0);
        assert_eq!(p.sign, Sign::Pisces);
        assert!((p.sign_lon - 20.0).abs() < EPS);
    }

    #[test]
    fn relocation_recomputes_sign_and_keeps_original() {
        let body = BodyPoint::new(BodyId::Mars, 10.0, 1.5, 0.6, 0.0);
        let moved = body.relocated(370.0 + 35.0);
        assert_eq!(body.position.sign, Sign::Aries);
        assert_eq!(moved.position.sign, Sign::Taurus);
        assert!((moved.position.sign_lon - 15.0).abs() < EPS);
        assert!((moved.position.lat - 1.5).abs() < EPS);
    }

    #[test]
    fn motion_thresholds() {
        assert_eq!(Motion::from_speed(0.0002), Motion::Stationary);
        assert_eq!(Motion::from_speed(-0.0002), Motion::Stationary);
        assert_eq!(Motion::from_speed(0.5), Motion::Direct);
        assert_eq!(Motion::from_speed(-0.5), Motion::Retrograde);
    }

    #[test]
    fn fast_against_mean_motion() {
        assert!(BodyPoint::new(BodyId::Moon, 0.0, 0.0, 14.0, 0.0).is_fast());
        assert!(!BodyPoint::new(BodyId::Moon, 0.0, 0.0, 12.0, 0.0).is_fast());
        assert!(BodyPoint::new(BodyId::Saturn, 0.0, 0.0, -0.05, 0.0).is_fast());
        assert!(!BodyPoint::new(BodyId::Ceres, 0.0, 0.0, 0.5, 0.0).is_fast());
    }

    #[test]
    fn antiscia_reflections() {
        let body = BodyPoint::new(BodyId::Venus, 10.0, 0.0, 1.0, 0.0);
        let a = body.antiscia();
        assert!((a.position.lon - 170.0).abs() < EPS);
        assert_eq!(a.id, PointId::Antiscia(BodyId::Venus));
        let c = body.contra_antiscia();
        assert!((c.position.lon - 350.0).abs() < EPS);
    }

    #[test]
    fn house_membership_with_offset() {
        let h = HousePoint::new(HouseId::new(1).unwrap(), 100.0, 30.0);
        assert!(h.contains(96.0, HouseOffset::Traditional));
        assert!(!h.contains(96.0, HouseOffset::Modern));
        assert!(h.contains(124.0, HouseOffset::Traditional));
        assert!(!h.contains(125.0, HouseOffset::Traditional));
    }

    #[test]
    fn star_orb_by_magnitude() {
        let star = |mag| FixedStarPoint::new(FixedStarId::Regulus, 150.0, 0.0, mag);
        assert_eq!(star(1.35).orb(), 7.5);
        assert_eq!(star(2.5).orb(), 5.5);
        assert_eq!(star(3.9).orb(), 3.5);
        assert_eq!(star(4.1).orb(), 1.5);
        assert_eq!(star(5.5).orb(), 0.5);
        assert!(star(1.35).conjuncts(155.0));
        assert!(!star(1.35).conjuncts(160.0));
    }

    #[test]
    fn fixed_points_have_no_speed() {
        let angle: ChartPoint = AnglePoint::new(AngleId::Asc, 12.0).into();
        assert_eq!(angle.lon_speed(), None);
        assert_eq!(angle.orb(), -1.0);
        let body: ChartPoint = BodyPoint::new(BodyId::Sun, 12.0, 0.0, 0.98, 0.0).into();
        assert_eq!(body.lon_speed(), Some(0.98));
        assert_eq!(body.orb(), 15.0);
    }
}

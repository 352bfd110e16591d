//! Immutable chart snapshot: bodies, houses and angles for one moment and place.
//!
//! A chart is built once, either from explicit records or through an
//! [`EphemerisProvider`]. Derived variants (profected charts) are new values.

use falak_math::{closest_distance, distance, ecliptic_to_equatorial, is_above_horizon, normalize};
use serde::Serialize;
use tracing::debug;

use crate::body::BodyId;
use crate::ephemeris::{EphemerisProvider, GeoLocation, HouseCusps};
use crate::error::CoreError;
use crate::house::{ALL_HOUSES, HouseId, HouseOffset, HouseSystem};
use crate::point::{
    ALL_ANGLES, AngleId, AnglePoint, BodyPoint, ChartPoint, HousePoint, PointId, Position,
};
use crate::qualities::MoonPhase;
use crate::search::{SearchConfig, syzygy_jd};

/// Tolerance for cusp/angle coincidence (about 1 arc-second).
const CUSP_TOLERANCE: f64 = 0.0003;

/// Longitude of Pars Fortuna.
///
/// By day `asc + moon - sun`, by night `asc + sun - moon`.
pub fn pars_fortuna_lon(sun: f64, moon: f64, asc: f64, diurnal: bool) -> f64 {
    if diurnal {
        normalize(asc + moon - sun)
    } else {
        normalize(asc + sun - moon)
    }
}

/// Whether the Sun is above the horizon given the MC longitude.
///
/// The Sun is converted with its latitude, the MC at zero latitude.
pub fn sun_above_horizon(sun: &Position, mc_lon: f64, geo_lat: f64) -> Result<bool, CoreError> {
    let sun_eq = sun.equatorial(false)?;
    let mc_eq = ecliptic_to_equatorial(mc_lon, 0.0)?;
    Ok(is_above_horizon(
        sun_eq.ra_deg,
        sun_eq.decl_deg,
        mc_eq.ra_deg,
        geo_lat,
    )?)
}

/// Forward arc from each cusp to the next.
pub fn house_sizes(cusps: &[f64; 12]) -> [f64; 12] {
    let mut sizes = [0.0; 12];
    for (i, size) in sizes.iter_mut().enumerate() {
        *size = distance(cusps[i], cusps[(i + 1) % 12]);
    }
    sizes
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Julian day (UT) of the chart moment.
    pub jd: f64,
    pub location: GeoLocation,
    pub house_system: HouseSystem,
    pub house_offset: HouseOffset,
    bodies: Vec<BodyPoint>,
    houses: [HousePoint; 12],
    angles: [AnglePoint; 4],
}

impl Chart {
    pub fn new(
        jd: f64,
        location: GeoLocation,
        house_system: HouseSystem,
        house_offset: HouseOffset,
        bodies: Vec<BodyPoint>,
        cusps: &HouseCusps,
    ) -> Self {
        let sizes = house_sizes(&cusps.cusps);
        let houses = ALL_HOUSES.map(|id| HousePoint::new(id, cusps.cusps[id.index()], sizes[id.index()]));
        let angles = ALL_ANGLES.map(|id| AnglePoint::new(id, cusps.angles[id.index()]));
        Self {
            jd,
            location,
            house_system,
            house_offset,
            bodies,
            houses,
            angles,
        }
    }

    /// Query the provider for every requested body and the house cusps.
    ///
    /// South Node, Syzygy and Pars Fortuna are derived here rather than
    /// requested from the provider.
    pub fn from_provider<P: EphemerisProvider + ?Sized>(
        provider: &P,
        jd: f64,
        location: GeoLocation,
        ids: &[BodyId],
        house_system: HouseSystem,
        house_offset: HouseOffset,
        search: &SearchConfig,
    ) -> Result<Self, CoreError> {
        location.validate()?;
        let cusps = provider.houses(jd, &location, house_system)?;

        let mut bodies = Vec::with_capacity(ids.len());
        for &id in ids {
            let body = match id {
                BodyId::SouthNode => {
                    let north = provider.position(BodyId::NorthNode, jd, &location)?;
                    BodyPoint::new(id, north.lon + 180.0, north.lat, north.lon_speed, north.lat_speed)
                }
                BodyId::Syzygy => {
                    let sz_jd = syzygy_jd(provider, jd, &location, search)?;
                    let moon = provider.position(BodyId::Moon, sz_jd, &location)?;
                    BodyPoint::from_state(id, &moon)
                }
                BodyId::ParsFortuna => {
                    let sun = provider.position(BodyId::Sun, jd, &location)?;
                    let moon = provider.position(BodyId::Moon, jd, &location)?;
                    let sun_pos = Position::new(sun.lon, sun.lat);
                    let diurnal =
                        sun_above_horizon(&sun_pos, cusps.angles[AngleId::Mc.index()], location.latitude_deg)?;
                    let lon = pars_fortuna_lon(
                        sun.lon,
                        moon.lon,
                        cusps.angles[AngleId::Asc.index()],
                        diurnal,
                    );
                    BodyPoint::new(id, lon, 0.0, 0.0, 0.0)
                }
                _ => BodyPoint::from_state(id, &provider.position(id, jd, &location)?),
            };
            bodies.push(body);
        }

        debug!(jd, bodies = bodies.len(), system = house_system.name(), "chart assembled");
        Ok(Self::new(jd, location, house_system, house_offset, bodies, &cusps))
    }

    pub fn bodies(&self) -> &[BodyPoint] {
        &self.bodies
    }

    pub fn houses(&self) -> &[HousePoint; 12] {
        &self.houses
    }

    pub fn angles(&self) -> &[AnglePoint; 4] {
        &self.angles
    }

    pub fn body(&self, id: BodyId) -> Result<&BodyPoint, CoreError> {
        self.bodies
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::UnknownIdentifier(format!("{} not in chart", id.name())))
    }

    pub fn house(&self, id: HouseId) -> &HousePoint {
        &self.houses[id.index()]
    }

    pub fn angle(&self, id: AngleId) -> &AnglePoint {
        &self.angles[id.index()]
    }

    /// Any body, house or angle of this chart as a [`ChartPoint`].
    pub fn point(&self, id: PointId) -> Result<ChartPoint, CoreError> {
        match id {
            PointId::Body(b) => self.body(b).map(|p| ChartPoint::Body(*p)),
            PointId::House(h) => Ok(ChartPoint::House(*self.house(h))),
            PointId::Angle(a) => Ok(ChartPoint::Angle(*self.angle(a))),
            other => Err(CoreError::UnknownIdentifier(format!("{other} is not a chart point"))),
        }
    }

    /// House containing a longitude under this chart's offset convention.
    pub fn house_of(&self, lon: f64) -> Result<&HousePoint, CoreError> {
        self.houses
            .iter()
            .find(|h| h.contains(lon, self.house_offset))
            .ok_or(CoreError::InvalidChart("house cusps do not cover the zodiac"))
    }

    pub fn bodies_in_house(&self, house: HouseId) -> Vec<&BodyPoint> {
        let h = self.house(house);
        self.bodies
            .iter()
            .filter(|b| h.contains(b.position.lon, self.house_offset))
            .collect()
    }

    pub fn is_house1_asc(&self) -> bool {
        let h1 = self.house(ALL_HOUSES[0]).position.lon;
        closest_distance(h1, self.angle(AngleId::Asc).position.lon).abs() < CUSP_TOLERANCE
    }

    pub fn is_house10_mc(&self) -> bool {
        let h10 = self.house(ALL_HOUSES[9]).position.lon;
        closest_distance(h10, self.angle(AngleId::Mc).position.lon).abs() < CUSP_TOLERANCE
    }

    /// Whether the Sun is above the horizon.
    pub fn is_diurnal(&self) -> Result<bool, CoreError> {
        let sun = self.body(BodyId::Sun)?;
        sun_above_horizon(
            &sun.position,
            self.angle(AngleId::Mc).position.lon,
            self.location.latitude_deg,
        )
    }

    pub fn moon_phase(&self) -> Result<MoonPhase, CoreError> {
        let sun = self.body(BodyId::Sun)?;
        let moon = self.body(BodyId::Moon)?;
        Ok(MoonPhase::from_elongation(distance(
            sun.position.lon,
            moon.position.lon,
        )))
    }

    /// Copy with every point moved forward by `rotation` degrees.
    ///
    /// With `keep_bodies` the bodies stay at their positions and only houses
    /// and angles turn.
    pub fn rotated(&self, rotation: f64, keep_bodies: bool) -> Self {
        let bodies = if keep_bodies {
            self.bodies.clone()
        } else {
            self.bodies
                .iter()
                .map(|b| b.relocated(b.position.lon + rotation))
                .collect()
        };
        Self {
            bodies,
            houses: self.houses.map(|h| h.relocated(h.position.lon + rotation)),
            angles: self.angles.map(|a| a.relocated(a.position.lon + rotation)),
            ..self.clone()
        }
    }
}

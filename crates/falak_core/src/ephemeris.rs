//! The narrow interface through which raw positions enter the workspace.
//!
//! Implementations wrap a real ephemeris (Swiss Ephemeris, JPL kernels, a
//! fixture table in tests). Both queries must be pure functions of their
//! arguments.

use std::collections::HashMap;

use falak_math::normalize;
use serde::{Deserialize, Serialize};

use crate::body::BodyId;
use crate::error::CoreError;
use crate::house::HouseSystem;

/// Geographic location of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(CoreError::InvalidConfig("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(CoreError::InvalidConfig("longitude must be within [-180, 180]"));
        }
        Ok(())
    }
}

/// Ecliptic position and daily speeds of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticState {
    pub lon: f64,
    pub lat: f64,
    /// deg/day
    pub lon_speed: f64,
    /// deg/day
    pub lat_speed: f64,
}

/// House cusps and angles as ecliptic longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// Cusps of houses 1 through 12.
    pub cusps: [f64; 12],
    /// Asc, MC, Desc, IC.
    pub angles: [f64; 4],
}

/// Source of body positions and house cusps.
pub trait EphemerisProvider {
    fn position(
        &self,
        body: BodyId,
        jd: f64,
        location: &GeoLocation,
    ) -> Result<EclipticState, CoreError>;

    fn houses(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, CoreError>;
}

/// Provider backed by a single snapshot of positions.
///
/// Positions are extrapolated linearly from `epoch_jd` using each body's
/// speeds; house cusps are returned unchanged for every query. Useful when
/// positions were computed elsewhere and for deterministic fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEphemeris {
    pub epoch_jd: f64,
    states: HashMap<BodyId, EclipticState>,
    cusps: HouseCusps,
}

impl SnapshotEphemeris {
    pub fn new(epoch_jd: f64, cusps: HouseCusps) -> Self {
        Self {
            epoch_jd,
            states: HashMap::new(),
            cusps,
        }
    }

    /// Builder-style insertion of a body state at the epoch.
    pub fn with_body(mut self, body: BodyId, state: EclipticState) -> Self {
        self.states.insert(body, state);
        self
    }

    pub fn insert(&mut self, body: BodyId, state: EclipticState) {
        self.states.insert(body, state);
    }
}

impl EphemerisProvider for SnapshotEphemeris {
    fn position(
        &self,
        body: BodyId,
        jd: f64,
        _location: &GeoLocation,
    ) -> Result<EclipticState, CoreError> {
        let state = self
            .states
            .get(&body)
            .ok_or_else(|| CoreError::Ephemeris(format!("no state for {}", body.name())))?;
        let dt = jd - self.epoch_jd;
        Ok(EclipticState {
            lon: normalize(state.lon + state.lon_speed * dt),
            lat: state.lat + state.lat_speed * dt,
            ..*state
        })
    }

    fn houses(
        &self,
        _jd: f64,
        _location: &GeoLocation,
        _system: HouseSystem,
    ) -> Result<HouseCusps, CoreError> {
        Ok(self.cusps)
    }
}

impl EclipticState {
    pub const fn new(lon: f64, lat: f64, lon_speed: f64, lat_speed: f64) -> Self {
        Self {
            lon,
            lat,
            lon_speed,
            lat_speed,
        }
    }
}

impl HouseCusps {
    /// Equal houses of 30 deg from the Ascendant, with the MC given.
    pub fn equal(asc: f64, mc: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize(asc + 30.0 * i as f64);
        }
        Self {
            cusps,
            angles: [normalize(asc), normalize(mc), normalize(asc + 180.0), normalize(mc + 180.0)],
        }
    }
}

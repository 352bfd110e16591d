//! Iterative searches over ephemeris positions.
//!
//! All three searches are fixed-point iterations bounded by
//! [`SearchConfig`]. When the cap is exhausted they fail with
//! [`CoreError::NoConvergence`] carrying the last approximation so the
//! caller can retry with a wider cap.

use falak_math::{closest_distance, distance};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::body::BodyId;
use crate::ephemeris::{EphemerisProvider, GeoLocation};
use crate::error::CoreError;

/// Mean daily motion of the Moon used as the syzygy step divisor.
const MOON_MEAN_MOTION: f64 = 13.1833;
/// Mean daily motion of the Sun used as the solar-return step divisor.
const SUN_MEAN_MOTION: f64 = 0.9833;

/// Bounds for the iterative searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Iteration cap for syzygy and solar-return searches.
    pub max_iterations: u32,
    /// Convergence tolerance in degrees (default about 1 arc-second).
    pub tolerance_deg: f64,
    /// Scan step for station search, in days.
    pub station_step_days: f64,
    /// Number of scan steps for station search.
    pub station_max_steps: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance_deg: 0.0003,
            station_step_days: 0.5,
            station_max_steps: 2000,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !(self.tolerance_deg > 0.0) {
            return Err("tolerance_deg must be positive");
        }
        if !(self.station_step_days > 0.0) {
            return Err("station_step_days must be positive");
        }
        if self.station_max_steps == 0 {
            return Err("station_max_steps must be > 0");
        }
        Ok(())
    }
}

fn sun_moon<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    location: &GeoLocation,
) -> Result<(f64, f64), CoreError> {
    let sun = provider.position(BodyId::Sun, jd, location)?;
    let moon = provider.position(BodyId::Moon, jd, location)?;
    Ok((sun.lon, moon.lon))
}

/// Julian day of the last new or full moon before `jd`.
///
/// The type of syzygy is fixed from the starting elongation: a waning Moon
/// (elongation >= 180) searches for the full moon, otherwise the new moon.
pub fn syzygy_jd<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    location: &GeoLocation,
    config: &SearchConfig,
) -> Result<f64, CoreError> {
    config.validate().map_err(CoreError::InvalidConfig)?;

    let (sun, moon) = sun_moon(provider, jd, location)?;
    let mut dist = distance(sun, moon);
    let offset = if dist >= 180.0 { 180.0 } else { 0.0 };
    let mut jd = jd;
    debug!(jd, elongation = dist, offset, "syzygy search start");

    for iteration in 0..config.max_iterations {
        if dist.abs() <= config.tolerance_deg {
            debug!(jd, iteration, "syzygy converged");
            return Ok(jd);
        }
        jd -= dist / MOON_MEAN_MOTION;
        let (sun, moon) = sun_moon(provider, jd, location)?;
        dist = closest_distance(sun - offset, moon);
        trace!(iteration, jd, dist, "syzygy step");
    }

    if dist.abs() <= config.tolerance_deg {
        return Ok(jd);
    }
    warn!(last_jd = jd, residual = dist, "syzygy search did not converge");
    Err(CoreError::NoConvergence {
        search: "syzygy",
        last_jd: jd,
    })
}

fn solar_return_jd<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    location: &GeoLocation,
    lon: f64,
    forward: bool,
    config: &SearchConfig,
) -> Result<f64, CoreError> {
    config.validate().map_err(CoreError::InvalidConfig)?;

    let sun = provider.position(BodyId::Sun, jd, location)?.lon;
    let mut dist = if forward {
        distance(sun, lon)
    } else {
        -distance(lon, sun)
    };
    let mut jd = jd;
    debug!(jd, target = lon, forward, "solar return search start");

    for iteration in 0..config.max_iterations {
        if dist.abs() <= config.tolerance_deg {
            debug!(jd, iteration, "solar return converged");
            return Ok(jd);
        }
        jd += dist / SUN_MEAN_MOTION;
        let sun = provider.position(BodyId::Sun, jd, location)?.lon;
        dist = closest_distance(sun, lon);
        trace!(iteration, jd, dist, "solar return step");
    }

    if dist.abs() <= config.tolerance_deg {
        return Ok(jd);
    }
    warn!(last_jd = jd, residual = dist, "solar return search did not converge");
    Err(CoreError::NoConvergence {
        search: "solar return",
        last_jd: jd,
    })
}

/// First Julian day at or after `jd` when the Sun reaches longitude `lon`.
pub fn next_solar_return_jd<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    location: &GeoLocation,
    lon: f64,
    config: &SearchConfig,
) -> Result<f64, CoreError> {
    solar_return_jd(provider, jd, location, lon, true, config)
}

/// Last Julian day at or before `jd` when the Sun was at longitude `lon`.
pub fn prev_solar_return_jd<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    location: &GeoLocation,
    lon: f64,
    config: &SearchConfig,
) -> Result<f64, CoreError> {
    solar_return_jd(provider, jd, location, lon, false, config)
}

/// Approximate Julian day of the next station of `body`.
///
/// Scans forward in fixed steps and returns the first sample whose
/// longitude speed has a different sign (or is zero) relative to the speed
/// at `jd`. Resolution is one step.
pub fn next_station_jd<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: BodyId,
    jd: f64,
    location: &GeoLocation,
    config: &SearchConfig,
) -> Result<f64, CoreError> {
    config.validate().map_err(CoreError::InvalidConfig)?;

    let speed = provider.position(body, jd, location)?.lon_speed;
    let mut next_jd = jd;
    for i in 0..config.station_max_steps {
        next_jd = jd + f64::from(i) * config.station_step_days;
        let next_speed = provider.position(body, next_jd, location)?.lon_speed;
        if speed * next_speed <= 0.0 {
            debug!(body = body.name(), jd = next_jd, steps = i, "station found");
            return Ok(next_jd);
        }
    }

    warn!(body = body.name(), last_jd = next_jd, "station scan exhausted");
    Err(CoreError::NoConvergence {
        search: "station",
        last_jd: next_jd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::ephemeris::{EclipticState, HouseCusps};
    use crate::house::HouseSystem;

    /// Sun and Moon on uniform circular orbits; Mars with a sinusoidal speed.
    struct Linear;

    impl EphemerisProvider for Linear {
        fn position(
            &self,
            body: BodyId,
            jd: f64,
            _location: &GeoLocation,
        ) -> Result<EclipticState, CoreError> {
            let (lon, speed) = match body {
                BodyId::Sun => (100.0 + jd, 1.0),
                BodyId::Moon => (130.0 + 13.0 * jd, 13.0),
                BodyId::Mars => ((jd / 10.0).sin() * 10.0, (jd / 10.0).cos()),
                _ => return Err(CoreError::Ephemeris(format!("{} not modelled", body.name()))),
            };
            Ok(EclipticState {
                lon: falak_math::normalize(lon),
                lat: 0.0,
                lon_speed: speed,
                lat_speed: 0.0,
            })
        }

        fn houses(
            &self,
            _jd: f64,
            _location: &GeoLocation,
            _system: HouseSystem,
        ) -> Result<HouseCusps, CoreError> {
            Err(CoreError::Ephemeris("no houses".into()))
        }
    }

    const HERE: GeoLocation = GeoLocation::new(0.0, 0.0);

    #[test]
    fn syzygy_finds_last_new_moon() {
        // Elongation 30 + 12 jd: new moon at jd = -2.5
        let jd = syzygy_jd(&Linear, 0.0, &HERE, &SearchConfig::default()).unwrap();
        assert_abs_diff_eq!(jd, -2.5, epsilon = 1e-3);
    }

    #[test]
    fn syzygy_finds_last_full_moon() {
        // At jd = 15 elongation is 210, the full moon was at jd = 12.5
        let jd = syzygy_jd(&Linear, 15.0, &HERE, &SearchConfig::default()).unwrap();
        assert_abs_diff_eq!(jd, 12.5, epsilon = 1e-3);
    }

    #[test]
    fn solar_returns_bracket_date() {
        let cfg = SearchConfig::default();
        let next = next_solar_return_jd(&Linear, 0.0, &HERE, 110.0, &cfg).unwrap();
        assert_abs_diff_eq!(next, 10.0, epsilon = 1e-3);
        let prev = prev_solar_return_jd(&Linear, 0.0, &HERE, 90.0, &cfg).unwrap();
        assert_abs_diff_eq!(prev, -10.0, epsilon = 1e-3);
    }

    #[test]
    fn station_within_one_step() {
        // Mars speed cos(jd/10) changes sign at jd = 5*pi
        let jd = next_station_jd(&Linear, BodyId::Mars, 0.0, &HERE, &SearchConfig::default())
            .unwrap();
        let exact = 5.0 * std::f64::consts::PI;
        assert!(jd >= exact && jd - exact <= 0.5, "jd = {jd}");
    }

    #[test]
    fn station_cap_reports_last_jd() {
        let cfg = SearchConfig {
            station_max_steps: 4,
            ..SearchConfig::default()
        };
        let err = next_station_jd(&Linear, BodyId::Mars, 0.0, &HERE, &cfg).unwrap_err();
        match err {
            CoreError::NoConvergence { search, last_jd } => {
                assert_eq!(search, "station");
                assert_abs_diff_eq!(last_jd, 1.5, epsilon = 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn syzygy_cap_reports_no_convergence() {
        let cfg = SearchConfig {
            max_iterations: 1,
            ..SearchConfig::default()
        };
        let err = syzygy_jd(&Linear, 15.0, &HERE, &cfg).unwrap_err();
        assert!(matches!(err, CoreError::NoConvergence { search: "syzygy", .. }));
    }

    #[test]
    fn config_validation() {
        assert!(SearchConfig::default().validate().is_ok());
        let bad = SearchConfig {
            tolerance_deg: 0.0,
            ..SearchConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn provider_errors_propagate() {
        let err = next_station_jd(&Linear, BodyId::Saturn, 0.0, &HERE, &SearchConfig::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::Ephemeris(_)));
    }
}

//! Ecliptic to equatorial conversion and diurnal semi-arc geometry.
//!
//! Uses a fixed obliquity of 23.44 deg. The arccos used for right ascension
//! is ambiguous near the equinoctial points when the body has latitude; within
//! 5 deg of 0/180 longitude the result is checked against the sine relation
//! `cos(decl)·sin(ra) = cos(eps)·sin(lon)·cos(lat) - sin(eps)·sin(lat)`
//! and mirrored when the two disagree.

use serde::Serialize;

use crate::angle::{closest_distance, normalize};
use crate::error::MathError;

/// Mean obliquity of the ecliptic used for all conversions, in degrees.
pub const OBLIQUITY_DEG: f64 = 23.44;

/// Tolerance for the quadrant check and the horizon test (about 1 arc-second).
const ARC_SECOND_TOLERANCE: f64 = 0.0003;

/// Right ascension and declination, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialCoords {
    /// Right ascension in [0, 360).
    pub ra_deg: f64,
    /// Declination in [-90, 90].
    pub decl_deg: f64,
}

/// Convert ecliptic longitude/latitude to right ascension and declination.
///
/// Fails with [`MathError::UndefinedCoordinate`] at the celestial poles,
/// where right ascension has no value.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64) -> Result<EquatorialCoords, MathError> {
    let lon_deg = normalize(lon_deg);
    let (sin_eps, cos_eps) = OBLIQUITY_DEG.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();

    let sin_decl = (sin_eps * sin_lon * cos_lat + cos_eps * sin_lat).clamp(-1.0, 1.0);
    let decl = sin_decl.asin();
    let cos_decl = decl.cos();
    if cos_decl.abs() < 1e-12 {
        return Err(MathError::UndefinedCoordinate(
            "right ascension undefined at the celestial pole",
        ));
    }

    let cos_ed = (cos_lon * cos_lat / cos_decl).clamp(-1.0, 1.0);
    let ed = cos_ed.acos();
    let mut ra = if lon_deg < 180.0 {
        ed
    } else {
        std::f64::consts::TAU - ed
    };

    if closest_distance(lon_deg, 0.0).abs() < 5.0 || closest_distance(lon_deg, 180.0).abs() < 5.0
    {
        let a = ra.sin() * cos_decl;
        let b = cos_eps * sin_lon * cos_lat - sin_eps * sin_lat;
        if (a - b).abs() > ARC_SECOND_TOLERANCE {
            ra = std::f64::consts::TAU - ra;
        }
    }

    Ok(EquatorialCoords {
        ra_deg: normalize(ra.to_degrees()),
        decl_deg: decl.to_degrees(),
    })
}

/// Ascensional difference for a declination at a geographic latitude.
///
/// `AD = asin(tan(decl)·tan(lat))`. Circumpolar combinations (argument
/// outside [-1, 1]) fail with [`MathError::UndefinedCoordinate`].
pub fn ascensional_difference(decl_deg: f64, lat_deg: f64) -> Result<f64, MathError> {
    let x = decl_deg.to_radians().tan() * lat_deg.to_radians().tan();
    if !x.is_finite() || x.abs() > 1.0 {
        return Err(MathError::UndefinedCoordinate(
            "ascensional difference undefined for circumpolar body",
        ));
    }
    Ok(x.asin().to_degrees())
}

/// Diurnal and nocturnal arcs `(180 + 2·AD, 180 - 2·AD)`.
pub fn day_night_arcs(decl_deg: f64, lat_deg: f64) -> Result<(f64, f64), MathError> {
    let ad = ascensional_difference(decl_deg, lat_deg)?;
    let diurnal = 180.0 + 2.0 * ad;
    Ok((diurnal, 360.0 - diurnal))
}

/// Whether a point is above the horizon.
///
/// True when its meridian distance from the MC does not exceed its
/// semi-diurnal arc, with a 1 arc-second margin.
pub fn is_above_horizon(
    ra_deg: f64,
    decl_deg: f64,
    mc_ra_deg: f64,
    lat_deg: f64,
) -> Result<bool, MathError> {
    let (diurnal, _) = day_night_arcs(decl_deg, lat_deg)?;
    let meridian_dist = closest_distance(mc_ra_deg, ra_deg).abs();
    Ok(meridian_dist <= diurnal / 2.0 + ARC_SECOND_TOLERANCE)
}

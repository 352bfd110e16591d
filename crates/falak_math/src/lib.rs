//! Angle arithmetic and spherical conversions for traditional chart work.
//!
//! Everything here is a pure function of its arguments:
//! - [`angle`]: normalization and signed/unsigned arc distances
//! - [`sexagesimal`]: signed degrees-minutes-seconds display values
//! - [`equatorial`]: ecliptic to equatorial conversion, semi-arcs, horizon test
//!
//! All angles are in degrees unless a name says otherwise.

pub mod angle;
pub mod equatorial;
pub mod error;
pub mod sexagesimal;

pub use angle::{closest_distance, distance, normalize, z_normalize};
pub use equatorial::{
    EquatorialCoords, OBLIQUITY_DEG, ascensional_difference, day_night_arcs,
    ecliptic_to_equatorial, is_above_horizon,
};
pub use error::MathError;
pub use sexagesimal::{AngleSign, Sexagesimal};

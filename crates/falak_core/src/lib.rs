//! Chart model for traditional astrology.
//!
//! This crate provides:
//! - Identities for bodies, signs, houses, angles and fixed stars with their
//!   static properties
//! - Positional records and an immutable [`Chart`] snapshot
//! - The [`EphemerisProvider`] seam and an in-memory snapshot provider
//! - Iterative searches for syzygies, solar returns and stations

pub mod body;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod fixed_star;
pub mod house;
pub mod point;
pub mod qualities;
pub mod search;
pub mod sign;

pub use body::{ALL_BODIES, BodyId, BodyKind, SEVEN_PLANETS, TRADITIONAL_BODIES};
pub use chart::{Chart, house_sizes, pars_fortuna_lon, sun_above_horizon};
pub use ephemeris::{EclipticState, EphemerisProvider, GeoLocation, HouseCusps, SnapshotEphemeris};
pub use error::CoreError;
pub use fixed_star::{ALL_FIXED_STARS, FixedStarId};
pub use house::{ALL_HOUSES, HouseCondition, HouseId, HouseOffset, HouseSystem};
pub use point::{
    ALL_ANGLES, AngleId, AnglePoint, BodyPoint, ChartPoint, DerivedPoint, FixedStarPoint,
    HousePoint, Motion, PointId, Position, Positional, STATIONARY_SPEED,
};
pub use qualities::{
    ALL_QUALITIES, ALL_TEMPERAMENTS, Element, Faction, Gender, Mode, MoonPhase, Quality,
    SunSeason, Temperament,
};
pub use search::{
    SearchConfig, next_solar_return_jd, next_station_jd, prev_solar_return_jd, syzygy_jd,
};
pub use sign::{ALL_SIGNS, Sign};

//! Annual profections.
//!
//! The chart turns 30 deg per year of life. Within the current year the
//! turn grows in proportion to the time elapsed between the surrounding
//! solar returns.

use falak_core::{
    BodyId, Chart, CoreError, EphemerisProvider, SearchConfig, next_solar_return_jd,
    prev_solar_return_jd,
};
use tracing::debug;

const DAYS_PER_YEAR: f64 = 365.25;

/// Rotation in degrees at `jd` for a chart cast at `natal_jd`.
pub fn profection_rotation(natal_jd: f64, jd: f64, prev_return: f64, next_return: f64) -> f64 {
    let year_part = 30.0 * (jd - prev_return) / (next_return - prev_return);
    let age = ((jd - natal_jd) / DAYS_PER_YEAR).floor();
    30.0 * age + year_part
}

/// Profected copy of `chart` at `jd`.
///
/// Houses and angles always turn; bodies stay at their natal positions
/// when `fixed_bodies` is set.
pub fn profection<P: EphemerisProvider + ?Sized>(
    provider: &P,
    chart: &Chart,
    jd: f64,
    fixed_bodies: bool,
    search: &SearchConfig,
) -> Result<Chart, CoreError> {
    let sun_lon = chart.body(BodyId::Sun)?.position.lon;
    let prev = prev_solar_return_jd(provider, jd, &chart.location, sun_lon, search)?;
    let next = next_solar_return_jd(provider, jd, &chart.location, sun_lon, search)?;
    if !(next > prev) {
        return Err(CoreError::InvalidChart("solar returns do not bracket the date"));
    }
    let rotation = profection_rotation(chart.jd, jd, prev, next);
    debug!(prev, next, rotation, "profection");
    Ok(chart.rotated(rotation, fixed_bodies))
}

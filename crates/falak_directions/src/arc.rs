//! Proportional semi-arc arc of direction.

use falak_math::{closest_distance, day_night_arcs, is_above_horizon, normalize};

use crate::error::DirectionError;

/// Arc of direction from a promissor to a significator.
///
/// The meridian and semi-arcs are chosen by the significator: MC with
/// diurnal arcs when it is above the horizon, IC with nocturnal arcs
/// otherwise. The promissor's meridian distance is taken after the
/// significator's, and the arc is the share of the promissor's semi-arc
/// needed to reach the significator's proportional position.
///
/// Swapping the two points does not negate the result.
pub fn arc(
    p_ra: f64,
    p_decl: f64,
    s_ra: f64,
    s_decl: f64,
    mc_ra: f64,
    lat: f64,
) -> Result<f64, DirectionError> {
    let (p_darc, p_narc) = day_night_arcs(p_decl, lat)?;
    let (s_darc, s_narc) = day_night_arcs(s_decl, lat)?;

    let (md_ra, s_arc, p_arc) = if is_above_horizon(s_ra, s_decl, mc_ra, lat)? {
        (mc_ra, s_darc, p_darc)
    } else {
        (normalize(mc_ra + 180.0), s_narc, p_narc)
    };

    let mut p_dist = closest_distance(md_ra, p_ra);
    let s_dist = closest_distance(md_ra, s_ra);
    if p_dist < s_dist {
        p_dist += 360.0;
    }

    let s_prop = s_dist / (s_arc / 2.0);
    let p_prop = p_dist / (p_arc / 2.0);
    Ok((p_prop - s_prop) * (p_arc / 2.0))
}

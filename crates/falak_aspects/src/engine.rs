//! Aspect detection between chart points.
//!
//! The faster point is active. For each candidate angle, in list order,
//! the orb is `||separation| - angle|` where separation is the signed
//! shortest distance from the active to the passive point. Major aspects
//! must fall within either point's orb; minor aspects within
//! [`MAX_MINOR_ORB`]. The first qualifying angle wins.

use falak_core::{BodyId, BodyKind, BodyPoint, Chart, Motion, PointId, Positional};
use falak_math::closest_distance;
use tracing::trace;

use crate::types::{Aspect, AspectRole, AspectType, Condition, Direction, Movement};

/// Maximum orb for minor aspects (degrees).
pub const MAX_MINOR_ORB: f64 = 3.0;

/// Orb under which both roles are exact (degrees).
pub const MAX_EXACT_ORB: f64 = 0.3;

/// A qualifying angle before role properties are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    aspect_type: AspectType,
    orb: f64,
    separation: f64,
}

/// Speed used for role selection: absolute longitudinal speed for orbiting
/// bodies, -1 for fixed points.
pub fn aspect_speed(point: &dyn Positional) -> f64 {
    point.lon_speed().map_or(-1.0, f64::abs)
}

/// Order two points as `(active, passive)`.
///
/// The first point is active only when strictly faster; ties go to the
/// second.
pub fn active_passive<'a>(
    a: &'a dyn Positional,
    b: &'a dyn Positional,
) -> (&'a dyn Positional, &'a dyn Positional) {
    if aspect_speed(a) > aspect_speed(b) {
        (a, b)
    } else {
        (b, a)
    }
}

fn same_point(a: &dyn Positional, b: &dyn Positional) -> bool {
    a.point_id() == b.point_id() && a.lon() == b.lon()
}

fn is_fixed_star(p: &dyn Positional) -> bool {
    matches!(p.point_id(), PointId::FixedStar(_))
}

/// First qualifying angle with `active` in the active role.
fn find_candidate(
    active: &dyn Positional,
    passive: &dyn Positional,
    aspects: &[AspectType],
) -> Option<Candidate> {
    if same_point(active, passive) {
        return None;
    }
    let active_body = active.point_id().as_body();
    if matches!(active_body, Some(BodyId::Syzygy | BodyId::ParsFortuna)) {
        return None;
    }
    let conjunction_only = matches!(active_body, Some(BodyId::NorthNode | BodyId::SouthNode))
        || is_fixed_star(active)
        || is_fixed_star(passive);

    let separation = closest_distance(active.lon(), passive.lon());
    aspects
        .iter()
        .copied()
        .filter(|t| *t != AspectType::NoAspect)
        .map(|aspect_type| Candidate {
            aspect_type,
            orb: (separation.abs() - aspect_type.angle()).abs(),
            separation,
        })
        .find(|c| {
            if conjunction_only && c.aspect_type != AspectType::Conjunction {
                return false;
            }
            if c.aspect_type.is_major() {
                c.orb <= active.orb() || c.orb <= passive.orb()
            } else {
                c.orb < MAX_MINOR_ORB
            }
        })
}

fn motion(point: &dyn Positional) -> Option<Motion> {
    point.lon_speed().map(Motion::from_speed)
}

/// Derive direction, condition and role movements for a candidate.
fn build_aspect(active: &dyn Positional, passive: &dyn Positional, c: Option<Candidate>) -> Aspect {
    let mut act = AspectRole::idle(active.point_id());
    let mut pas = AspectRole::idle(passive.point_id());

    let Some(c) = c else {
        return Aspect {
            aspect_type: AspectType::NoAspect,
            orb: 0.0,
            separation: 0.0,
            direction: None,
            condition: None,
            active: act,
            passive: pas,
        };
    };

    act.in_orb = c.orb <= active.orb();
    pas.in_orb = c.orb <= passive.orb();

    let direction = if c.separation <= 0.0 {
        Direction::Dexter
    } else {
        Direction::Sinister
    };

    // Negative when the active point lies before the exact position
    let angle = c.aspect_type.angle();
    let orb_dir = if c.separation >= 0.0 {
        c.separation - angle
    } else {
        c.separation + angle
    };
    let offset = active.sign_lon() + orb_dir;
    let condition = if (0.0..30.0).contains(&offset) {
        Condition::Associate
    } else {
        Condition::Dissociate
    };

    if orb_dir.abs() < MAX_EXACT_ORB {
        act.movement = Movement::Exact;
        pas.movement = Movement::Exact;
    } else {
        act.movement = match motion(active) {
            Some(Motion::Direct) if orb_dir > 0.0 => Movement::Applicative,
            Some(Motion::Retrograde) if orb_dir < 0.0 => Movement::Applicative,
            Some(Motion::Stationary) => Movement::Stationary,
            _ => Movement::Separative,
        };
        // The passive point takes part when it moves against the active one
        // or stands still.
        let mirrors = match (active.lon_speed(), passive.lon_speed()) {
            (_, None) => true,
            (_, Some(p)) if p == 0.0 => true,
            (Some(a), Some(p)) => a * p < 0.0,
            (None, Some(_)) => false,
        };
        if mirrors {
            pas.movement = act.movement;
        }
    }

    Aspect {
        aspect_type: c.aspect_type,
        orb: c.orb,
        separation: c.separation,
        direction: Some(direction),
        condition: Some(condition),
        active: act,
        passive: pas,
    }
}

/// Aspect type between two points, ordered by speed.
pub fn aspect_type(a: &dyn Positional, b: &dyn Positional, aspects: &[AspectType]) -> AspectType {
    let (active, passive) = active_passive(a, b);
    find_candidate(active, passive, aspects).map_or(AspectType::NoAspect, |c| c.aspect_type)
}

pub fn has_aspect(a: &dyn Positional, b: &dyn Positional, aspects: &[AspectType]) -> bool {
    aspect_type(a, b, aspects) != AspectType::NoAspect
}

/// Whether `active` aspects `passive` with the roles taken as given.
///
/// Syzygy and Pars Fortuna never aspect as the first argument.
pub fn is_aspecting(
    active: &dyn Positional,
    passive: &dyn Positional,
    aspects: &[AspectType],
) -> bool {
    find_candidate(active, passive, aspects).is_some()
}

/// Full aspect record between two points, ordered by speed.
///
/// Returns the [`AspectType::NoAspect`] sentinel when nothing qualifies.
pub fn get_aspect(a: &dyn Positional, b: &dyn Positional, aspects: &[AspectType]) -> Aspect {
    let (active, passive) = active_passive(a, b);
    build_aspect(active, passive, find_candidate(active, passive, aspects))
}

/// Planets of a chart that aspect `point` in the active role.
pub fn bodies_aspecting<'c>(
    chart: &'c Chart,
    point: &dyn Positional,
    aspects: &[AspectType],
) -> Vec<&'c BodyPoint> {
    chart
        .bodies()
        .iter()
        .filter(|b| b.id.kind() == BodyKind::Planet && is_aspecting(*b, point, aspects))
        .collect()
}

/// Every aspect from a set of transiting points to a set of natal points.
pub fn transit_aspects<T, N>(transits: &[T], natal: &[N], aspects: &[AspectType]) -> Vec<Aspect>
where
    T: Positional,
    N: Positional,
{
    let res: Vec<Aspect> = transits
        .iter()
        .flat_map(|t| natal.iter().map(move |n| get_aspect(t, n, aspects)))
        .filter(Aspect::exists)
        .collect();
    trace!(
        transits = transits.len(),
        natal = natal.len(),
        found = res.len(),
        "transit aspects"
    );
    res
}

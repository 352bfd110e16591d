//! Golden-value integration tests for aspects within a snapshot chart.
//!
//! Snapshot of 2015-Mar-13 17:00 UT at Lisbon (positions rounded to a tenth
//! of a degree).

use falak_aspects::{
    AspectType, Condition, Direction, MAJOR_ASPECTS, Movement, bodies_aspecting, get_aspect,
    transit_aspects,
};
use falak_core::{
    AngleId, BodyId, BodyPoint, Chart, EclipticState, GeoLocation, HouseCusps, HouseOffset,
    HouseSystem, PointId, SearchConfig, SnapshotEphemeris, TRADITIONAL_BODIES,
};

const JD: f64 = 2_457_095.2083;

fn load_chart() -> Chart {
    let cusps = HouseCusps {
        cusps: [
            155.0, 178.0, 205.0, 240.5, 278.0, 310.0, 335.0, 358.0, 25.0, 60.5, 98.0, 130.0,
        ],
        angles: [155.0, 60.5, 335.0, 240.5],
    };
    let eph = SnapshotEphemeris::new(JD, cusps)
        .with_body(BodyId::Sun, EclipticState::new(352.8, 0.0, 0.997, 0.0))
        .with_body(BodyId::Moon, EclipticState::new(260.6, -4.1, 12.6, -0.2))
        .with_body(BodyId::Mercury, EclipticState::new(328.0, -1.9, 1.5, 0.1))
        .with_body(BodyId::Venus, EclipticState::new(25.6, -1.1, 1.23, 0.05))
        .with_body(BodyId::Mars, EclipticState::new(17.0, -0.3, 0.77, 0.01))
        .with_body(BodyId::Jupiter, EclipticState::new(104.6, 0.6, -0.05, 0.0))
        .with_body(BodyId::Saturn, EclipticState::new(244.5, 2.0, 0.0001, 0.0))
        .with_body(BodyId::NorthNode, EclipticState::new(198.8, 0.0, -0.05, 0.0));
    Chart::from_provider(
        &eph,
        JD,
        GeoLocation::new(38.533, -8.9),
        &TRADITIONAL_BODIES,
        HouseSystem::Placidus,
        HouseOffset::Traditional,
        &SearchConfig::default(),
    )
    .expect("snapshot covers every traditional body")
}

fn body(chart: &Chart, id: BodyId) -> &BodyPoint {
    chart.body(id).expect("body present")
}

#[test]
fn moon_applies_to_sun_by_square() {
    let chart = load_chart();
    let asp = get_aspect(body(&chart, BodyId::Sun), body(&chart, BodyId::Moon), &MAJOR_ASPECTS);
    assert_eq!(asp.aspect_type, AspectType::Square);
    assert_eq!(asp.active.id, PointId::Body(BodyId::Moon));
    assert!((asp.orb - 2.2).abs() < 1e-9);
    assert_eq!(asp.direction, Some(Direction::Sinister));
    assert_eq!(asp.condition, Some(Condition::Associate));
    assert_eq!(asp.active.movement, Movement::Applicative);
    assert_eq!(asp.passive.movement, Movement::NoMovement);
}

#[test]
fn sun_separates_from_retrograde_jupiter() {
    let chart = load_chart();
    let asp = get_aspect(body(&chart, BodyId::Jupiter), body(&chart, BodyId::Sun), &MAJOR_ASPECTS);
    assert_eq!(asp.aspect_type, AspectType::Trine);
    assert_eq!(asp.active.id, PointId::Body(BodyId::Sun));
    assert!((asp.orb - 8.2).abs() < 1e-9);
    assert_eq!(asp.active.movement, Movement::Separative);
    // Jupiter moves the other way, so it shares the movement
    assert_eq!(asp.passive.movement, Movement::Separative);
    // 8.2 deg is inside both the Sun's 15 and Jupiter's 9
    assert!(asp.mutual_aspect());
}

#[test]
fn venus_mars_conjunction_is_out_of_orb() {
    let chart = load_chart();
    let asp = get_aspect(body(&chart, BodyId::Venus), body(&chart, BodyId::Mars), &MAJOR_ASPECTS);
    assert!(!asp.exists());
    assert_eq!(asp.orb, 0.0);
}

#[test]
fn mars_applies_to_south_node() {
    let chart = load_chart();
    let asp = get_aspect(
        body(&chart, BodyId::SouthNode),
        body(&chart, BodyId::Mars),
        &MAJOR_ASPECTS,
    );
    assert_eq!(asp.aspect_type, AspectType::Conjunction);
    assert_eq!(asp.active.id, PointId::Body(BodyId::Mars));
    assert_eq!(asp.active.movement, Movement::Applicative);
    assert_eq!(asp.passive.movement, Movement::Applicative);
    assert!(asp.mutual_movement());
}

#[test]
fn planets_aspecting_the_ascendant() {
    let chart = load_chart();
    let asc = chart.angle(AngleId::Asc);
    let list = [
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];
    let ids: Vec<_> = bodies_aspecting(&chart, asc, &list).iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BodyId::Mercury, BodyId::Saturn]);
    assert!(bodies_aspecting(&chart, asc, &[AspectType::Conjunction]).is_empty());
}

#[test]
fn transits_against_natal() {
    let natal = load_chart();
    // Saturn a year later moved to 250.0; Jupiter to 135.0
    let transits = [
        BodyPoint::new(BodyId::Saturn, 250.0, 2.0, 0.05, 0.0),
        BodyPoint::new(BodyId::Jupiter, 135.0, 0.6, 0.2, 0.0),
    ];
    let found = transit_aspects(&transits, natal.bodies(), &MAJOR_ASPECTS);
    assert!(found.iter().all(|a| a.exists()));
    let saturn_moon = found
        .iter()
        .find(|a| {
            a.role(BodyId::Moon.into()).is_some() && a.role(BodyId::Saturn.into()).is_some()
        })
        .expect("transit Saturn conjoins natal Moon");
    assert_eq!(saturn_moon.aspect_type, AspectType::Conjunction);
}

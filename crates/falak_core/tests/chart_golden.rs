//! Golden-value integration tests for chart assembly.
//!
//! Uses a snapshot of 2015-Mar-13 17:00 UT at Lisbon (positions rounded to
//! a tenth of a degree) served through the in-memory provider.

use approx::assert_abs_diff_eq;
use falak_core::{
    AngleId, BodyId, Chart, CoreError, EclipticState, GeoLocation, HouseCusps, HouseId,
    HouseOffset, HouseSystem, MoonPhase, SearchConfig, Sign, SnapshotEphemeris,
    TRADITIONAL_BODIES, next_solar_return_jd, syzygy_jd,
};

const JD: f64 = 2_457_095.2083;
const LISBON: GeoLocation = GeoLocation::new(38.533, -8.9);

fn snapshot() -> SnapshotEphemeris {
    let cusps = HouseCusps {
        cusps: [
            155.0, 178.0, 205.0, 240.5, 278.0, 310.0, 335.0, 358.0, 25.0, 60.5, 98.0, 130.0,
        ],
        angles: [155.0, 60.5, 335.0, 240.5],
    };
    SnapshotEphemeris::new(JD, cusps)
        .with_body(BodyId::Sun, EclipticState::new(352.8, 0.0, 0.997, 0.0))
        .with_body(BodyId::Moon, EclipticState::new(260.6, -4.1, 12.6, -0.2))
        .with_body(BodyId::Mercury, EclipticState::new(328.0, -1.9, 1.5, 0.1))
        .with_body(BodyId::Venus, EclipticState::new(25.6, -1.1, 1.23, 0.05))
        .with_body(BodyId::Mars, EclipticState::new(17.0, -0.3, 0.77, 0.01))
        .with_body(BodyId::Jupiter, EclipticState::new(104.6, 0.6, -0.05, 0.0))
        .with_body(BodyId::Saturn, EclipticState::new(244.5, 2.0, 0.0001, 0.0))
        .with_body(BodyId::NorthNode, EclipticState::new(198.8, 0.0, -0.05, 0.0))
}

fn load_chart() -> Chart {
    Chart::from_provider(
        &snapshot(),
        JD,
        LISBON,
        &TRADITIONAL_BODIES,
        HouseSystem::Placidus,
        HouseOffset::Traditional,
        &SearchConfig::default(),
    )
    .expect("snapshot covers every traditional body")
}

#[test]
fn sign_placements() {
    let chart = load_chart();
    let expect = [
        (BodyId::Sun, Sign::Pisces),
        (BodyId::Moon, Sign::Sagittarius),
        (BodyId::Mercury, Sign::Aquarius),
        (BodyId::Venus, Sign::Aries),
        (BodyId::Jupiter, Sign::Cancer),
        (BodyId::Saturn, Sign::Sagittarius),
        (BodyId::NorthNode, Sign::Libra),
        (BodyId::SouthNode, Sign::Aries),
    ];
    for (id, sign) in expect {
        assert_eq!(chart.body(id).unwrap().position.sign, sign, "{}", id.name());
    }
    assert_eq!(chart.angle(AngleId::Asc).position.sign, Sign::Virgo);
    assert_eq!(chart.angle(AngleId::Mc).position.sign, Sign::Gemini);
}

#[test]
fn motion_flags() {
    let chart = load_chart();
    assert!(chart.body(BodyId::Jupiter).unwrap().is_retrograde());
    assert!(chart.body(BodyId::Saturn).unwrap().is_stationary());
    assert!(chart.body(BodyId::Moon).unwrap().is_direct());
}

#[test]
fn late_afternoon_chart_is_diurnal() {
    let chart = load_chart();
    assert!(chart.is_diurnal().unwrap());
    assert_eq!(chart.moon_phase().unwrap(), MoonPhase::ThirdQuarter);
}

#[test]
fn pars_fortuna_by_day() {
    let chart = load_chart();
    let pf = chart.body(BodyId::ParsFortuna).unwrap();
    // 155.0 + 260.6 - 352.8
    assert_abs_diff_eq!(pf.position.lon, 62.8, epsilon = 1e-9);
    assert_eq!(pf.position.sign, Sign::Gemini);
    assert_eq!(pf.lon_speed, 0.0);
}

#[test]
fn prenatal_syzygy_is_the_full_moon() {
    let chart = load_chart();
    let sz_jd = syzygy_jd(&snapshot(), JD, &LISBON, &SearchConfig::default()).unwrap();
    // Full moon of 2015-Mar-05
    assert_abs_diff_eq!(sz_jd, 2_457_087.641, epsilon = 0.01);
    let syzygy = chart.body(BodyId::Syzygy).unwrap();
    assert_abs_diff_eq!(syzygy.position.lon, 165.26, epsilon = 0.05);
    assert_eq!(syzygy.position.sign, Sign::Virgo);
}

#[test]
fn house_membership_with_traditional_offset() {
    let chart = load_chart();
    let house_no = |id| chart.house_of(chart.body(id).unwrap().position.lon).unwrap().id.number();
    assert_eq!(house_no(BodyId::Sun), 7);
    assert_eq!(house_no(BodyId::Moon), 4);
    assert_eq!(house_no(BodyId::Venus), 9);
    assert_eq!(house_no(BodyId::Mars), 8);
    assert_eq!(house_no(BodyId::ParsFortuna), 10);

    let fourth: Vec<_> = chart
        .bodies_in_house(HouseId::new(4).unwrap())
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(fourth, vec![BodyId::Moon, BodyId::Saturn]);
    assert!(chart.is_house1_asc());
    assert!(chart.is_house10_mc());
}

#[test]
fn solar_return_lands_on_natal_sun() {
    let eph = snapshot();
    let jd = next_solar_return_jd(&eph, JD + 30.0, &LISBON, 352.8, &SearchConfig::default())
        .unwrap();
    // One tropical year at the snapshot's uniform solar speed
    assert_abs_diff_eq!(jd, JD + 360.0 / 0.997, epsilon = 0.01);
}

#[test]
fn missing_body_is_reported() {
    let result = Chart::from_provider(
        &snapshot(),
        JD,
        LISBON,
        &[BodyId::Sun, BodyId::Uranus],
        HouseSystem::Placidus,
        HouseOffset::Traditional,
        &SearchConfig::default(),
    );
    assert!(matches!(result, Err(CoreError::Ephemeris(_))));
}

//! The temperament protocol.
//!
//! Factors come from the ascendant, its ruler, planets in the first house
//! or aspecting the ascendant, the Moon and its dispositor, planets
//! aspecting the Moon, and the Sun's season. Each factor contributes one
//! element; elements are tallied as temperaments and primary qualities.

use falak_aspects::{AspectType, aspect_type, bodies_aspecting};
use falak_core::{
    ALL_HOUSES, AngleId, BodyId, BodyPoint, Chart, CoreError, Element, MoonPhase, Positional,
    Quality, SEVEN_PLANETS, Sign, SunSeason, Temperament,
};
use falak_dignity::ruler;
use serde::Serialize;

/// Aspects other than the conjunction considered by the protocol.
pub const TEMPERAMENT_ASPECTS: [AspectType; 4] = [
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Opposition,
];

/// Aspects through which Mars and Saturn modify a factor.
pub const AFFLICTING_ASPECTS: [AspectType; 3] = [
    AspectType::Conjunction,
    AspectType::Square,
    AspectType::Opposition,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperamentFactorKind {
    AscSign,
    AscRuler,
    AscRulerSign,
    House1PlanetsIn,
    AscPlanetsConj,
    AscPlanetsAsp,
    MoonSign,
    MoonPhase,
    MoonDispositorSign,
    MoonPlanetsConj,
    MoonPlanetsAsp,
    SunSeason,
}

impl TemperamentFactorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AscSign => "Asc Sign",
            Self::AscRuler => "Asc Ruler",
            Self::AscRulerSign => "Asc Ruler Sign",
            Self::House1PlanetsIn => "Planets in House1",
            Self::AscPlanetsConj => "Planets conj Asc",
            Self::AscPlanetsAsp => "Planets asp Asc",
            Self::MoonSign => "Moon Sign",
            Self::MoonPhase => "Moon Phase",
            Self::MoonDispositorSign => "Moon Dispositor Sign",
            Self::MoonPlanetsConj => "Planets conj Moon",
            Self::MoonPlanetsAsp => "Planets asp Moon",
            Self::SunSeason => "Sun season",
        }
    }
}

/// What a factor was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactorSource {
    Sign(Sign),
    Body(BodyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperamentFactor {
    pub factor: TemperamentFactorKind,
    pub source: FactorSource,
    pub aspect: Option<AspectType>,
    /// Sign of the body when the sign, not the body, gives the element.
    pub sign: Option<Sign>,
    pub sun_season: Option<SunSeason>,
    pub phase: Option<MoonPhase>,
    /// The Moon's dispositor, on its sign factor.
    pub planet: Option<BodyId>,
    pub element: Element,
}

impl TemperamentFactor {
    fn of_sign(factor: TemperamentFactorKind, sign: Sign) -> Self {
        Self {
            factor,
            source: FactorSource::Sign(sign),
            aspect: None,
            sign: None,
            sun_season: None,
            phase: None,
            planet: None,
            element: sign.element(),
        }
    }
}

/// Factor read from a body. The Sun gives its season, the Moon its phase,
/// other planets their own element or, when aspecting, their sign's
/// element. Other bodies give nothing.
fn body_factor(
    chart: &Chart,
    factor: TemperamentFactorKind,
    body: &BodyPoint,
    aspect: Option<AspectType>,
) -> Result<Option<TemperamentFactor>, CoreError> {
    let mut res = TemperamentFactor {
        factor,
        source: FactorSource::Body(body.id),
        aspect,
        sign: None,
        sun_season: None,
        phase: None,
        planet: None,
        element: Element::Fire,
    };
    match body.id {
        BodyId::Sun => {
            let season = body.position.sign.sun_season();
            res.sign = Some(body.position.sign);
            res.sun_season = Some(season);
            res.element = season.element();
        }
        BodyId::Moon => {
            let phase = chart.moon_phase()?;
            res.phase = Some(phase);
            res.element = phase.element();
        }
        id if SEVEN_PLANETS.contains(&id) => {
            if aspect.is_some() {
                res.sign = Some(body.position.sign);
                res.element = body.position.sign.element();
            } else {
                match id.element() {
                    Some(e) => res.element = e,
                    None => return Ok(None),
                }
            }
        }
        _ => return Ok(None),
    }
    Ok(Some(res))
}

/// Every temperament factor of a chart, in protocol order.
pub fn factors(chart: &Chart) -> Result<Vec<TemperamentFactor>, CoreError> {
    use TemperamentFactorKind as K;

    let mut res = Vec::new();
    let mut push = |f: Option<TemperamentFactor>| {
        if let Some(f) = f {
            res.push(f);
        }
    };

    let asc = chart.angle(AngleId::Asc);
    push(Some(TemperamentFactor::of_sign(K::AscSign, asc.position.sign)));

    let asc_ruler = chart.body(ruler(asc.position.sign))?;
    push(body_factor(chart, K::AscRuler, asc_ruler, None)?);
    push(Some(TemperamentFactor::of_sign(K::AscRulerSign, asc_ruler.position.sign)));

    let house1 = chart.bodies_in_house(ALL_HOUSES[0]);
    for body in &house1 {
        push(body_factor(chart, K::House1PlanetsIn, body, None)?);
    }

    for body in bodies_aspecting(chart, asc, &[AspectType::Conjunction]) {
        if !house1.iter().any(|b| b.id == body.id) {
            push(body_factor(chart, K::AscPlanetsConj, body, None)?);
        }
    }

    for body in bodies_aspecting(chart, asc, &TEMPERAMENT_ASPECTS) {
        let asp = aspect_type(body, asc, &TEMPERAMENT_ASPECTS);
        push(body_factor(chart, K::AscPlanetsAsp, body, Some(asp))?);
    }

    let moon = chart.body(BodyId::Moon)?;
    push(Some(TemperamentFactor::of_sign(K::MoonSign, moon.position.sign)));
    push(body_factor(chart, K::MoonPhase, moon, None)?);

    let dispositor = chart.body(ruler(moon.position.sign))?;
    let mut disp = TemperamentFactor::of_sign(K::MoonDispositorSign, dispositor.position.sign);
    disp.planet = Some(dispositor.id);
    push(Some(disp));

    for body in bodies_aspecting(chart, moon, &[AspectType::Conjunction]) {
        push(body_factor(chart, K::MoonPlanetsConj, body, None)?);
    }

    for body in bodies_aspecting(chart, moon, &TEMPERAMENT_ASPECTS) {
        let asp = aspect_type(body, moon, &TEMPERAMENT_ASPECTS);
        push(body_factor(chart, K::MoonPlanetsAsp, body, Some(asp))?);
    }

    let sun = chart.body(BodyId::Sun)?;
    push(body_factor(chart, K::SunSeason, sun, None)?);

    Ok(res)
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModifiedFactor {
    Asc,
    AscRuler,
    Moon,
}

/// An affliction of a factor by Mars, Saturn or the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperamentModifier {
    pub factor: ModifiedFactor,
    pub aspect: AspectType,
    pub body: BodyId,
    pub element: Option<Element>,
}

/// Mars and Saturn by conjunction, square or opposition and the Sun by
/// conjunction, against the Asc, its ruler and the Moon.
pub fn modifiers(chart: &Chart) -> Result<Vec<TemperamentModifier>, CoreError> {
    let asc = chart.angle(AngleId::Asc);
    let asc_ruler = chart.body(ruler(asc.position.sign))?;
    let moon = chart.body(BodyId::Moon)?;
    let affected: [(ModifiedFactor, &dyn Positional); 3] = [
        (ModifiedFactor::Asc, asc),
        (ModifiedFactor::AscRuler, asc_ruler),
        (ModifiedFactor::Moon, moon),
    ];

    let afflicting: [(BodyId, &[AspectType]); 3] = [
        (BodyId::Mars, &AFFLICTING_ASPECTS),
        (BodyId::Saturn, &AFFLICTING_ASPECTS),
        (BodyId::Sun, &[AspectType::Conjunction]),
    ];

    let mut res = Vec::new();
    for (id, aspects) in afflicting {
        let body = chart.body(id)?;
        for (factor, point) in affected {
            let asp = aspect_type(point, body, aspects);
            if asp != AspectType::NoAspect {
                res.push(TemperamentModifier {
                    factor,
                    aspect: asp,
                    body: id,
                    element: id.element(),
                });
            }
        }
    }
    Ok(res)
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Tallies indexed by [`Temperament::index`] and [`Quality::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemperamentScore {
    pub temperaments: [u32; 4],
    pub qualities: [u32; 4],
}

impl TemperamentScore {
    pub fn from_factors(factors: &[TemperamentFactor]) -> Self {
        let mut score = Self::default();
        for f in factors {
            let t = f.element.temperament();
            score.temperaments[t.index()] += 1;
            for q in t.qualities() {
                score.qualities[q.index()] += 1;
            }
        }
        score
    }

    pub fn temperament(&self, t: Temperament) -> u32 {
        self.temperaments[t.index()]
    }

    pub fn quality(&self, q: Quality) -> u32 {
        self.qualities[q.index()]
    }
}

/// Factors, modifiers and score of one chart.
#[derive(Debug, Clone, Copy)]
pub struct TemperamentProtocol<'c> {
    chart: &'c Chart,
}

impl<'c> TemperamentProtocol<'c> {
    pub const fn new(chart: &'c Chart) -> Self {
        Self { chart }
    }

    pub fn factors(&self) -> Result<Vec<TemperamentFactor>, CoreError> {
        factors(self.chart)
    }

    pub fn modifiers(&self) -> Result<Vec<TemperamentModifier>, CoreError> {
        modifiers(self.chart)
    }

    pub fn score(&self) -> Result<TemperamentScore, CoreError> {
        Ok(TemperamentScore::from_factors(&self.factors()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use falak_core::{GeoLocation, HouseCusps, HouseOffset, HouseSystem};

    fn chart(moon: f64, mars: f64) -> Chart {
        let bodies = vec![
            BodyPoint::new(BodyId::Sun, 260.0, 0.0, 1.0, 0.0),
            BodyPoint::new(BodyId::Moon, moon, 0.0, 13.0, 0.0),
            BodyPoint::new(BodyId::Mercury, 245.0, 0.0, 1.2, 0.0),
            BodyPoint::new(BodyId::Venus, 215.0, 0.0, 1.1, 0.0),
            BodyPoint::new(BodyId::Mars, mars, 0.0, 0.6, 0.0),
            BodyPoint::new(BodyId::Jupiter, 160.0, 0.0, 0.1, 0.0),
            BodyPoint::new(BodyId::Saturn, 190.0, 0.0, 0.05, 0.0),
        ];
        Chart::new(
            2_451_545.0,
            GeoLocation::new(0.0, 0.0),
            HouseSystem::Equal,
            HouseOffset::Modern,
            bodies,
            &HouseCusps::equal(0.0, 270.0),
        )
    }

    #[test]
    fn score_tally() {
        let fire = TemperamentFactor::of_sign(TemperamentFactorKind::AscSign, Sign::Aries);
        let water = TemperamentFactor::of_sign(TemperamentFactorKind::MoonSign, Sign::Cancer);
        let score = TemperamentScore::from_factors(&[fire, fire, water]);
        assert_eq!(score.temperament(Temperament::Choleric), 2);
        assert_eq!(score.temperament(Temperament::Phlegmatic), 1);
        assert_eq!(score.quality(Quality::Hot), 2);
        assert_eq!(score.quality(Quality::Dry), 2);
        assert_eq!(score.quality(Quality::Cold), 1);
        assert_eq!(score.quality(Quality::Humid), 1);
    }

    #[test]
    fn factor_sequence() {
        // Asc Aries ruled by Mars at 5 in house 1; Moon at 100 in Cancer is
        // its own dispositor
        let c = chart(100.0, 5.0);
        let fs = factors(&c).unwrap();
        use TemperamentFactorKind as K;
        let kinds: Vec<TemperamentFactorKind> = fs.iter().map(|f| f.factor).collect();
        assert_eq!(
            kinds,
            vec![
                K::AscSign,
                K::AscRuler,
                K::AscRulerSign,
                K::House1PlanetsIn,
                K::AscPlanetsAsp,
                K::AscPlanetsAsp,
                K::AscPlanetsAsp,
                K::MoonSign,
                K::MoonPhase,
                K::MoonDispositorSign,
                K::MoonPlanetsAsp,
                K::MoonPlanetsAsp,
                K::MoonPlanetsAsp,
                K::MoonPlanetsAsp,
                K::SunSeason,
            ]
        );

        // The Sun squares the Asc but still reports its season
        assert_eq!(fs[4].source, FactorSource::Body(BodyId::Sun));
        assert_eq!(fs[4].aspect, Some(AspectType::Square));
        assert_eq!(fs[4].element, Element::Earth);
        // Mercury trines the Asc from Sagittarius
        assert_eq!(fs[6].sign, Some(Sign::Sagittarius));
        assert_eq!(fs[6].element, Element::Fire);

        // Moon 200 deg past the Sun
        assert_eq!(fs[8].phase, Some(MoonPhase::ThirdQuarter));
        assert_eq!(fs[8].element, Element::Earth);
        assert_eq!(fs[9].planet, Some(BodyId::Moon));

        let asp: Vec<(FactorSource, Option<AspectType>)> =
            fs[10..14].iter().map(|f| (f.source, f.aspect)).collect();
        assert_eq!(
            asp,
            vec![
                (FactorSource::Body(BodyId::Venus), Some(AspectType::Trine)),
                (FactorSource::Body(BodyId::Mars), Some(AspectType::Square)),
                (FactorSource::Body(BodyId::Jupiter), Some(AspectType::Sextile)),
                (FactorSource::Body(BodyId::Saturn), Some(AspectType::Square)),
            ]
        );
        assert_eq!(fs[14].sun_season, Some(SunSeason::Autumn));
    }

    #[test]
    fn chart_score() {
        let c = chart(100.0, 5.0);
        let score = TemperamentProtocol::new(&c).score().unwrap();
        assert_eq!(score.temperament(Temperament::Choleric), 6);
        assert_eq!(score.temperament(Temperament::Melancholic), 5);
        assert_eq!(score.temperament(Temperament::Sanguine), 1);
        assert_eq!(score.temperament(Temperament::Phlegmatic), 3);
        assert_eq!(score.quality(Quality::Hot), 7);
        assert_eq!(score.quality(Quality::Cold), 8);
        assert_eq!(score.quality(Quality::Dry), 11);
        assert_eq!(score.quality(Quality::Humid), 4);
    }

    #[test]
    fn afflictions() {
        let c = chart(100.0, 5.0);
        let mods: Vec<(ModifiedFactor, AspectType, BodyId)> = modifiers(&c)
            .unwrap()
            .into_iter()
            .map(|m| (m.factor, m.aspect, m.body))
            .collect();
        // Mars never afflicts itself as the Asc ruler
        assert_eq!(
            mods,
            vec![
                (ModifiedFactor::Asc, AspectType::Conjunction, BodyId::Mars),
                (ModifiedFactor::Moon, AspectType::Square, BodyId::Mars),
                (ModifiedFactor::AscRuler, AspectType::Opposition, BodyId::Saturn),
                (ModifiedFactor::Moon, AspectType::Square, BodyId::Saturn),
            ]
        );
    }
}

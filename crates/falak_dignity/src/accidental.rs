//! Accidental dignities: a planet's condition from its placement in one
//! chart rather than from the zodiac alone.
//!
//! Every factor is computed independently from the chart and the result
//! keeps the full per-factor breakdown, so a score can always be
//! explained.

use falak_aspects::{ALL_ASPECTS, AspectType, Movement, get_aspect, has_aspect};
use falak_core::{
    BodyId, BodyPoint, Chart, CoreError, Faction, Gender, HouseId, SEVEN_PLANETS,
};
use falak_math::{closest_distance, distance};
use serde::Serialize;
use tracing::trace;

use crate::dynamics::ChartDynamics;
use crate::essential::{DignityKind, EssentialScorer};

const CAZIMI_ORB: f64 = 0.2833;
const COMBUST_ORB: f64 = 8.0;
const UNDER_SUN_ORB: f64 = 16.0;

const BENEFICS: [BodyId; 2] = [BodyId::Venus, BodyId::Jupiter];
const MALEFICS: [BodyId; 2] = [BodyId::Mars, BodyId::Saturn];
const BENEFIC_ASPECTS: [AspectType; 3] = [AspectType::Conjunction, AspectType::Sextile, AspectType::Trine];
const MALEFIC_ASPECTS: [AspectType; 3] = [AspectType::Conjunction, AspectType::Square, AspectType::Opposition];

// ---------------------------------------------------------------------------
// Relations with the Sun
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SunRelation {
    Cazimi,
    Combust,
    UnderSun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Light {
    Augmenting,
    Diminishing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientality {
    Oriental,
    Occidental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Haiz {
    Haiz,
    ContraHaiz,
}

/// Closeness to the Sun. The Sun itself has no relation.
pub fn sun_relation(obj: &BodyPoint, sun: &BodyPoint) -> Option<SunRelation> {
    if obj.id == BodyId::Sun {
        return None;
    }
    let dist = closest_distance(sun.position.lon, obj.position.lon).abs();
    if dist < CAZIMI_ORB {
        Some(SunRelation::Cazimi)
    } else if dist < COMBUST_ORB {
        Some(SunRelation::Combust)
    } else if dist < UNDER_SUN_ORB {
        Some(SunRelation::UnderSun)
    } else {
        None
    }
}

/// Whether the elongation from the Sun is growing or shrinking.
pub fn light(obj: &BodyPoint, sun: &BodyPoint) -> Light {
    let dist = distance(sun.position.lon, obj.position.lon);
    let sun_faster = sun.lon_speed > obj.lon_speed;
    match (sun_faster, dist < 180.0) {
        (true, true) | (false, false) => Light::Diminishing,
        _ => Light::Augmenting,
    }
}

/// Occidental when the body lies less than 180 deg ahead of the Sun.
pub fn orientality(obj: &BodyPoint, sun: &BodyPoint) -> Orientality {
    if distance(sun.position.lon, obj.position.lon) < 180.0 {
        Orientality::Occidental
    } else {
        Orientality::Oriental
    }
}

/// Between 15 Libra and 15 Scorpio, exclusive.
pub fn via_combusta(obj: &BodyPoint) -> bool {
    195.0 < obj.position.lon && obj.position.lon < 225.0
}

/// Gender and sect conformity with sign and house.
///
/// Mercury takes masculine diurnal nature when oriental, feminine
/// nocturnal otherwise. The Sun never conforms by sect at night.
pub fn haiz(obj: &BodyPoint, chart: &Chart) -> Result<Option<Haiz>, CoreError> {
    let (gender, faction) = if obj.id == BodyId::Mercury {
        let sun = chart.body(BodyId::Sun)?;
        match orientality(obj, sun) {
            Orientality::Oriental => (Some(Gender::Masculine), Some(Faction::Diurnal)),
            Orientality::Occidental => (Some(Gender::Feminine), Some(Faction::Nocturnal)),
        }
    } else {
        (obj.id.gender(), obj.id.faction())
    };

    let gender_ok = gender == Some(obj.position.sign.gender());

    let diurnal = chart.is_diurnal()?;
    let faction_ok = if obj.id == BodyId::Sun && !diurnal {
        false
    } else {
        let above = chart.house_of(obj.position.lon)?.id.is_above_horizon();
        // By day the diurnal sect rules above the horizon, by night below
        let diurnal_side = above == diurnal;
        match faction {
            Some(Faction::Diurnal) => diurnal_side,
            Some(Faction::Nocturnal) => !diurnal_side,
            None => false,
        }
    };

    Ok(match (gender_ok, faction_ok) {
        (true, true) => Some(Haiz::Haiz),
        (false, false) => Some(Haiz::ContraHaiz),
        _ => None,
    })
}

/// House placement score.
pub const fn house_score(house: HouseId) -> i32 {
    match house.number() {
        1 | 10 => 5,
        4 | 7 | 11 => 4,
        2 | 5 => 3,
        9 => 2,
        3 => 1,
        6 | 8 => -2,
        _ => -5,
    }
}

// ---------------------------------------------------------------------------
// Factors
// ---------------------------------------------------------------------------

/// Scored accidental factors, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccidentalFactor {
    Peregrine,
    MutualReceptionRuler,
    MutualReceptionExalt,
    House,
    JoySign,
    JoyHouse,
    Cazimi,
    Combust,
    UnderSun,
    NoUnderSun,
    Light,
    Orientality,
    NorthNode,
    SouthNode,
    Direction,
    Speed,
    BeneficConjunction,
    BeneficTrine,
    BeneficSextile,
    MaleficConjunction,
    MaleficOpposition,
    MaleficSquare,
    Auxilied,
    Surrounded,
    Feral,
    Void,
    Haiz,
    ContraHaiz,
    ViaCombusta,
}

impl AccidentalFactor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peregrine => "peregrine",
            Self::MutualReceptionRuler => "mr_ruler",
            Self::MutualReceptionExalt => "mr_exalt",
            Self::House => "house",
            Self::JoySign => "joy_sign",
            Self::JoyHouse => "joy_house",
            Self::Cazimi => "cazimi",
            Self::Combust => "combust",
            Self::UnderSun => "under_sun",
            Self::NoUnderSun => "no_under_sun",
            Self::Light => "light",
            Self::Orientality => "orientality",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
            Self::Direction => "direction",
            Self::Speed => "speed",
            Self::BeneficConjunction => "benefic_asp0",
            Self::BeneficTrine => "benefic_asp120",
            Self::BeneficSextile => "benefic_asp60",
            Self::MaleficConjunction => "malefic_asp0",
            Self::MaleficOpposition => "malefic_asp180",
            Self::MaleficSquare => "malefic_asp90",
            Self::Auxilied => "auxilied",
            Self::Surrounded => "surround",
            Self::Feral => "feral",
            Self::Void => "void",
            Self::Haiz => "haiz",
            Self::ContraHaiz => "chaiz",
            Self::ViaCombusta => "in_via_combusta",
        }
    }
}

/// Full factor breakdown for one body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccidentalScore {
    pub id: BodyId,
    pub factors: Vec<(AccidentalFactor, i32)>,
}

impl AccidentalScore {
    pub fn total(&self) -> i32 {
        self.factors.iter().map(|(_, s)| s).sum()
    }

    pub fn get(&self, factor: AccidentalFactor) -> i32 {
        self.factors
            .iter()
            .find(|(f, _)| *f == factor)
            .map_or(0, |(_, s)| *s)
    }

    /// Only the factors that contributed.
    pub fn non_zero(&self) -> Vec<(AccidentalFactor, i32)> {
        self.factors.iter().copied().filter(|(_, s)| *s != 0).collect()
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Accidental dignity queries for the classical planets of a chart.
#[derive(Debug, Clone, Copy)]
pub struct AccidentalScorer<'c> {
    chart: &'c Chart,
    essential: EssentialScorer,
    dynamics: ChartDynamics<'c>,
}

impl<'c> AccidentalScorer<'c> {
    pub const fn new(chart: &'c Chart, essential: EssentialScorer) -> Self {
        Self {
            chart,
            essential,
            dynamics: ChartDynamics::new(chart, essential),
        }
    }

    pub fn house(&self, id: BodyId) -> Result<HouseId, CoreError> {
        let obj = self.chart.body(id)?;
        Ok(self.chart.house_of(obj.position.lon)?.id)
    }

    pub fn in_sign_joy(&self, id: BodyId) -> Result<bool, CoreError> {
        let obj = self.chart.body(id)?;
        Ok(id.sign_joy() == Some(obj.position.sign))
    }

    pub fn in_house_joy(&self, id: BodyId) -> Result<bool, CoreError> {
        Ok(id.house_joy() == Some(self.house(id)?))
    }

    /// Dignity kinds of the equal mutual receptions `id` takes part in.
    pub fn equal_mutual_receptions(&self, id: BodyId) -> Result<Vec<DignityKind>, CoreError> {
        let mut res = Vec::new();
        for other in SEVEN_PLANETS.into_iter().filter(|o| *o != id) {
            for (kind, _) in self.dynamics.equal_mutual_receptions(id, other)? {
                res.push(kind);
            }
        }
        Ok(res)
    }

    /// Exact or applying aspects to the given planets.
    fn aspects_to(
        &self,
        id: BodyId,
        targets: &[BodyId],
        aspects: &[AspectType],
    ) -> Result<Vec<AspectType>, CoreError> {
        let obj = self.chart.body(id)?;
        let mut res = Vec::new();
        for target in targets {
            let asp = get_aspect(obj, self.chart.body(*target)?, aspects);
            if asp.exists() && matches!(asp.movement(), Movement::Exact | Movement::Applicative) {
                res.push(asp.aspect_type);
            }
        }
        Ok(res)
    }

    pub fn aspect_benefics(&self, id: BodyId) -> Result<Vec<AspectType>, CoreError> {
        self.aspects_to(id, &BENEFICS, &BENEFIC_ASPECTS)
    }

    pub fn aspect_malefics(&self, id: BodyId) -> Result<Vec<AspectType>, CoreError> {
        self.aspects_to(id, &MALEFICS, &MALEFIC_ASPECTS)
    }

    /// Last separation and next application both with one of `targets`.
    fn between(&self, id: BodyId, targets: &[BodyId], aspects: &[AspectType]) -> Result<bool, CoreError> {
        let (sep, app) = self.dynamics.immediate_aspects(id, aspects)?;
        Ok(match (sep, app) {
            (Some(sep), Some(app)) => targets.contains(&sep.id) && targets.contains(&app.id),
            _ => false,
        })
    }

    pub fn is_auxilied(&self, id: BodyId) -> Result<bool, CoreError> {
        self.between(id, &BENEFICS, &BENEFIC_ASPECTS)
    }

    pub fn is_surrounded(&self, id: BodyId) -> Result<bool, CoreError> {
        self.between(id, &MALEFICS, &MALEFIC_ASPECTS)
    }

    fn conjoins(&self, id: BodyId, node: BodyId) -> Result<bool, CoreError> {
        let obj = self.chart.body(id)?;
        Ok(has_aspect(obj, self.chart.body(node)?, &[AspectType::Conjunction]))
    }

    /// No aspect of any kind with the other classical planets.
    pub fn is_feral(&self, id: BodyId) -> Result<bool, CoreError> {
        let obj = self.chart.body(id)?;
        for other in SEVEN_PLANETS.into_iter().filter(|o| *o != id) {
            if has_aspect(obj, self.chart.body(other)?, &ALL_ASPECTS) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Every factor, zero or not, for one classical planet.
    pub fn score(&self, id: BodyId) -> Result<AccidentalScore, CoreError> {
        use AccidentalFactor as F;

        let obj = self.chart.body(id)?;
        let sun = self.chart.body(BodyId::Sun)?;
        let pos = &obj.position;
        let flag = |cond: bool, score: i32| if cond { score } else { 0 };
        let mut factors = Vec::with_capacity(29);

        let peregrine = self.essential.is_peregrine(id, pos.sign, pos.sign_lon);
        factors.push((F::Peregrine, flag(peregrine, -5)));

        let mr = self.equal_mutual_receptions(id)?;
        factors.push((F::MutualReceptionRuler, flag(mr.contains(&DignityKind::Ruler), 5)));
        factors.push((F::MutualReceptionExalt, flag(mr.contains(&DignityKind::Exalt), 4)));

        factors.push((F::House, house_score(self.house(id)?)));
        factors.push((F::JoySign, flag(self.in_sign_joy(id)?, 3)));
        factors.push((F::JoyHouse, flag(self.in_house_joy(id)?, 2)));

        let relation = sun_relation(obj, sun);
        factors.push((F::Cazimi, flag(relation == Some(SunRelation::Cazimi), 5)));
        factors.push((F::Combust, flag(relation == Some(SunRelation::Combust), -6)));
        factors.push((F::UnderSun, flag(relation == Some(SunRelation::UnderSun), -4)));
        factors.push((F::NoUnderSun, flag(id != BodyId::Sun && relation.is_none(), 5)));

        let light_score = match (id, light(obj, sun)) {
            (BodyId::Sun, _) => 0,
            (_, Light::Augmenting) => 1,
            (_, Light::Diminishing) => -1,
        };
        factors.push((F::Light, light_score));

        let orient = orientality(obj, sun);
        let orient_score = match id {
            BodyId::Saturn | BodyId::Jupiter | BodyId::Mars => {
                if orient == Orientality::Oriental { 2 } else { -2 }
            }
            BodyId::Venus | BodyId::Mercury | BodyId::Moon => {
                if orient == Orientality::Occidental { 2 } else { -2 }
            }
            _ => 0,
        };
        factors.push((F::Orientality, orient_score));

        factors.push((F::NorthNode, flag(self.conjoins(id, BodyId::NorthNode)?, -3)));
        factors.push((F::SouthNode, flag(self.conjoins(id, BodyId::SouthNode)?, -5)));

        let direction = match id {
            BodyId::Sun | BodyId::Moon => 0,
            _ if obj.is_direct() => 4,
            _ => -5,
        };
        factors.push((F::Direction, direction));
        factors.push((F::Speed, if obj.is_fast() { 2 } else { -2 }));

        let ben = self.aspect_benefics(id)?;
        factors.push((F::BeneficConjunction, flag(ben.contains(&AspectType::Conjunction), 5)));
        factors.push((F::BeneficTrine, flag(ben.contains(&AspectType::Trine), 4)));
        factors.push((F::BeneficSextile, flag(ben.contains(&AspectType::Sextile), 3)));

        let mal = self.aspect_malefics(id)?;
        factors.push((F::MaleficConjunction, flag(mal.contains(&AspectType::Conjunction), -5)));
        factors.push((F::MaleficOpposition, flag(mal.contains(&AspectType::Opposition), -4)));
        factors.push((F::MaleficSquare, flag(mal.contains(&AspectType::Square), -3)));

        factors.push((F::Auxilied, flag(self.is_auxilied(id)?, 5)));
        factors.push((F::Surrounded, flag(self.is_surrounded(id)?, -5)));

        let feral = self.is_feral(id)?;
        factors.push((F::Feral, flag(feral, -3)));
        factors.push((F::Void, flag(!feral && self.dynamics.is_void_of_course(id)?, -2)));

        let hz = haiz(obj, self.chart)?;
        factors.push((F::Haiz, flag(hz == Some(Haiz::Haiz), 3)));
        factors.push((F::ContraHaiz, flag(hz == Some(Haiz::ContraHaiz), -2)));

        factors.push((F::ViaCombusta, flag(id == BodyId::Moon && via_combusta(obj), -2)));

        for (factor, score) in factors.iter().filter(|(_, s)| *s != 0) {
            trace!(body = id.name(), factor = factor.name(), score, "accidental factor");
        }
        Ok(AccidentalScore { id, factors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: BodyId, lon: f64, speed: f64) -> BodyPoint {
        BodyPoint::new(id, lon, 0.0, speed, 0.0)
    }

    #[test]
    fn sun_relation_thresholds() {
        let sun = body(BodyId::Sun, 100.0, 1.0);
        let rel = |lon| sun_relation(&body(BodyId::Mars, lon, 0.5), &sun);
        assert_eq!(rel(100.2), Some(SunRelation::Cazimi));
        assert_eq!(rel(95.0), Some(SunRelation::Combust));
        assert_eq!(rel(108.0), Some(SunRelation::UnderSun));
        assert_eq!(rel(116.0), None);
        assert_eq!(sun_relation(&sun, &sun), None);
    }

    #[test]
    fn light_depends_on_relative_speed() {
        let sun = body(BodyId::Sun, 0.0, 1.0);
        // Slow planet ahead of the Sun: the Sun closes in
        assert_eq!(light(&body(BodyId::Saturn, 40.0, 0.03), &sun), Light::Diminishing);
        assert_eq!(light(&body(BodyId::Saturn, 320.0, 0.03), &sun), Light::Augmenting);
        // Fast Moon ahead of the Sun pulls away
        assert_eq!(light(&body(BodyId::Moon, 40.0, 13.0), &sun), Light::Augmenting);
        assert_eq!(light(&body(BodyId::Moon, 320.0, 13.0), &sun), Light::Diminishing);
    }

    #[test]
    fn orientality_by_elongation() {
        let sun = body(BodyId::Sun, 350.0, 1.0);
        assert_eq!(orientality(&body(BodyId::Mars, 10.0, 0.5), &sun), Orientality::Occidental);
        assert_eq!(orientality(&body(BodyId::Mars, 300.0, 0.5), &sun), Orientality::Oriental);
    }

    #[test]
    fn via_combusta_is_open_interval() {
        assert!(via_combusta(&body(BodyId::Moon, 210.0, 13.0)));
        assert!(!via_combusta(&body(BodyId::Moon, 195.0, 13.0)));
        assert!(!via_combusta(&body(BodyId::Moon, 225.0, 13.0)));
    }

    #[test]
    fn house_scores() {
        let h = |n| house_score(HouseId::new(n).unwrap());
        assert_eq!(h(1), 5);
        assert_eq!(h(10), 5);
        assert_eq!(h(7), 4);
        assert_eq!(h(3), 1);
        assert_eq!(h(8), -2);
        assert_eq!(h(12), -5);
    }

    #[test]
    fn breakdown_views() {
        let s = AccidentalScore {
            id: BodyId::Mars,
            factors: vec![
                (AccidentalFactor::House, 5),
                (AccidentalFactor::Light, 0),
                (AccidentalFactor::Speed, -2),
            ],
        };
        assert_eq!(s.total(), 3);
        assert_eq!(s.get(AccidentalFactor::Speed), -2);
        assert_eq!(s.get(AccidentalFactor::Feral), 0);
        assert_eq!(s.non_zero().len(), 2);
    }
}

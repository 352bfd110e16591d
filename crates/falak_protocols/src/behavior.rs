//! The behavior protocol: four sets of planets describing conduct.

use falak_aspects::{AspectType, MAJOR_ASPECTS, bodies_aspecting, is_aspecting};
use falak_core::{ALL_HOUSES, AngleId, BodyId, BodyPoint, Chart, CoreError};
use falak_dignity::ruler;
use serde::Serialize;

use crate::temperament::TEMPERAMENT_ASPECTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BehaviorFactorKind {
    House1OrConjAsc,
    ConjMoonOrMercury,
    AscRulerAspectedByDisposer,
    AspMoonOrMercury,
}

impl BehaviorFactorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::House1OrConjAsc => "Planets in House1 or Conj Asc",
            Self::ConjMoonOrMercury => "Planets Conj Moon or Mercury",
            Self::AscRulerAspectedByDisposer => "Asc Ruler if aspected by its disposer",
            Self::AspMoonOrMercury => "Planets Asp Moon or Mercury",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorFactor {
    pub factor: BehaviorFactorKind,
    pub bodies: Vec<BodyId>,
}

/// Union of body lists, first occurrence kept.
fn merge<'a>(lists: [Vec<&'a BodyPoint>; 2]) -> Vec<BodyId> {
    let mut res = Vec::new();
    for body in lists.into_iter().flatten() {
        if !res.contains(&body.id) {
            res.push(body.id);
        }
    }
    res
}

pub fn behavior(chart: &Chart) -> Result<Vec<BehaviorFactor>, CoreError> {
    let asc = chart.angle(AngleId::Asc);
    let moon = chart.body(BodyId::Moon)?;
    let mercury = chart.body(BodyId::Mercury)?;
    let conj = [AspectType::Conjunction];

    let house1 = merge([
        chart.bodies_in_house(ALL_HOUSES[0]),
        bodies_aspecting(chart, asc, &conj),
    ]);
    let conj_lights = merge([
        bodies_aspecting(chart, moon, &conj),
        bodies_aspecting(chart, mercury, &conj),
    ]);

    let asc_ruler = chart.body(ruler(asc.position.sign))?;
    let disposer = chart.body(ruler(asc_ruler.position.sign))?;
    let ruler_set = if is_aspecting(disposer, asc_ruler, &MAJOR_ASPECTS) {
        vec![asc_ruler.id]
    } else {
        Vec::new()
    };

    let asp_lights = merge([
        bodies_aspecting(chart, moon, &TEMPERAMENT_ASPECTS),
        bodies_aspecting(chart, mercury, &TEMPERAMENT_ASPECTS),
    ]);

    Ok(vec![
        BehaviorFactor {
            factor: BehaviorFactorKind::House1OrConjAsc,
            bodies: house1,
        },
        BehaviorFactor {
            factor: BehaviorFactorKind::ConjMoonOrMercury,
            bodies: conj_lights,
        },
        BehaviorFactor {
            factor: BehaviorFactorKind::AscRulerAspectedByDisposer,
            bodies: ruler_set,
        },
        BehaviorFactor {
            factor: BehaviorFactorKind::AspMoonOrMercury,
            bodies: asp_lights,
        },
    ])
}

//! Relations between the classical planets of one chart: reception,
//! disposition and the aspects each planet is forming.

use falak_aspects::{AspectType, MAJOR_ASPECTS, Movement, aspect_type, get_aspect, is_aspecting};
use falak_core::{BodyId, Chart, CoreError, PointId, SEVEN_PLANETS};
use serde::Serialize;

use crate::essential::{DignityKind, EssentialScorer};

/// An aspect seen from one planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectEntry {
    pub id: BodyId,
    pub aspect_type: AspectType,
    pub orb: f64,
}

/// In-orb aspects of a planet grouped by the planet's own movement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AspectsByCategory {
    pub applicative: Vec<AspectEntry>,
    pub separative: Vec<AspectEntry>,
    pub exact: Vec<AspectEntry>,
    pub stationary: Vec<AspectEntry>,
    pub no_movement: Vec<AspectEntry>,
}

impl AspectsByCategory {
    fn bucket_mut(&mut self, movement: Movement) -> &mut Vec<AspectEntry> {
        match movement {
            Movement::Applicative => &mut self.applicative,
            Movement::Separative => &mut self.separative,
            Movement::Exact => &mut self.exact,
            Movement::Stationary => &mut self.stationary,
            Movement::NoMovement => &mut self.no_movement,
        }
    }

    pub fn bucket(&self, movement: Movement) -> &[AspectEntry] {
        match movement {
            Movement::Applicative => &self.applicative,
            Movement::Separative => &self.separative,
            Movement::Exact => &self.exact,
            Movement::Stationary => &self.stationary,
            Movement::NoMovement => &self.no_movement,
        }
    }
}

/// Reception and aspect queries over a chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartDynamics<'c> {
    chart: &'c Chart,
    scorer: EssentialScorer,
}

impl<'c> ChartDynamics<'c> {
    pub const fn new(chart: &'c Chart, scorer: EssentialScorer) -> Self {
        Self { chart, scorer }
    }

    pub const fn chart(&self) -> &'c Chart {
        self.chart
    }

    // -----------------------------------------------------------------------
    // Reception
    // -----------------------------------------------------------------------

    /// Dignities at `a`'s position that belong to `b`.
    pub fn in_dignities(&self, a: BodyId, b: BodyId) -> Result<Vec<DignityKind>, CoreError> {
        let obj = self.chart.body(a)?;
        Ok(self
            .scorer
            .info(obj.position.sign, obj.position.sign_lon)
            .held_by(b))
    }

    /// Dignities in which `a` receives `b`.
    ///
    /// `b` must aspect `a` (major aspects, `b` active) and stand in
    /// dignities of `a`.
    pub fn receives(&self, a: BodyId, b: BodyId) -> Result<Vec<DignityKind>, CoreError> {
        let obj_a = self.chart.body(a)?;
        let obj_b = self.chart.body(b)?;
        if is_aspecting(obj_b, obj_a, &MAJOR_ASPECTS) {
            self.in_dignities(b, a)
        } else {
            Ok(Vec::new())
        }
    }

    /// Dignities in which `a` disposes of `b`.
    pub fn disposits(&self, a: BodyId, b: BodyId) -> Result<Vec<DignityKind>, CoreError> {
        self.in_dignities(b, a)
    }

    /// Every pairing of `a` receiving `b` with `b` receiving `a`.
    pub fn mutual_receptions(
        &self,
        a: BodyId,
        b: BodyId,
    ) -> Result<Vec<(DignityKind, DignityKind)>, CoreError> {
        let ab = self.receives(a, b)?;
        let ba = self.receives(b, a)?;
        Ok(ab
            .iter()
            .flat_map(|x| ba.iter().map(move |y| (*x, *y)))
            .collect())
    }

    /// Mutual receptions where both sides use the same kind, ruler or exaltation.
    pub fn equal_mutual_receptions(
        &self,
        a: BodyId,
        b: BodyId,
    ) -> Result<Vec<(DignityKind, DignityKind)>, CoreError> {
        Ok(self
            .mutual_receptions(a, b)?
            .into_iter()
            .filter(|(x, y)| x == y && matches!(x, DignityKind::Ruler | DignityKind::Exalt))
            .collect())
    }

    // -----------------------------------------------------------------------
    // Aspects
    // -----------------------------------------------------------------------

    /// Aspect types `id` forms with the other six classical planets.
    pub fn valid_aspects(
        &self,
        id: BodyId,
        aspects: &[AspectType],
    ) -> Result<Vec<(BodyId, AspectType)>, CoreError> {
        let obj = self.chart.body(id)?;
        let mut res = Vec::new();
        for other in SEVEN_PLANETS {
            if other == id {
                continue;
            }
            let asp = aspect_type(obj, self.chart.body(other)?, aspects);
            if asp != AspectType::NoAspect {
                res.push((other, asp));
            }
        }
        Ok(res)
    }

    /// Aspects within `id`'s own orb, grouped by `id`'s movement.
    pub fn aspects_by_category(
        &self,
        id: BodyId,
        aspects: &[AspectType],
    ) -> Result<AspectsByCategory, CoreError> {
        let obj = self.chart.body(id)?;
        let mut res = AspectsByCategory::default();
        for (other, _) in self.valid_aspects(id, aspects)? {
            let asp = get_aspect(obj, self.chart.body(other)?, aspects);
            if let Some(role) = asp.role(PointId::Body(id)).filter(|r| r.in_orb) {
                res.bucket_mut(role.movement).push(AspectEntry {
                    id: other,
                    aspect_type: asp.aspect_type,
                    orb: asp.orb,
                });
            }
        }
        Ok(res)
    }

    /// Last separation and next application (exact aspects included),
    /// each the one with the smallest orb.
    pub fn immediate_aspects(
        &self,
        id: BodyId,
        aspects: &[AspectType],
    ) -> Result<(Option<AspectEntry>, Option<AspectEntry>), CoreError> {
        let cat = self.aspects_by_category(id, aspects)?;
        let by_orb = |a: &&AspectEntry, b: &&AspectEntry| a.orb.total_cmp(&b.orb);
        let separation = cat.separative.iter().min_by(by_orb).copied();
        let application = cat
            .applicative
            .iter()
            .chain(cat.exact.iter())
            .min_by(by_orb)
            .copied();
        Ok((separation, application))
    }

    /// No applicative or exact major aspect, regardless of sign condition.
    pub fn is_void_of_course(&self, id: BodyId) -> Result<bool, CoreError> {
        let cat = self.aspects_by_category(id, &MAJOR_ASPECTS)?;
        Ok(cat.applicative.is_empty() && cat.exact.is_empty())
    }
}

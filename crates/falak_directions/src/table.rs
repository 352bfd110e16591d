//! Promissor × significator direction tables.

use std::cmp::Ordering;

use falak_aspects::AspectType;
use falak_config::{FalakConfig, TermVariant};
use falak_core::{AngleId, BodyId, Chart, Positional, Sign};
use falak_dignity::term_longitudes;
use serde::Serialize;
use tracing::debug;

use crate::arc::arc;
use crate::error::DirectionError;
use crate::points::{DirectedObject, DirectionPoint, DirectionPointId};

/// Objects used as significators and as the base of aspect promissors.
pub const SIG_OBJECTS: [BodyId; 10] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::ParsFortuna,
    BodyId::NorthNode,
    BodyId::SouthNode,
];

pub const SIG_ANGLES: [AngleId; 2] = [AngleId::Asc, AngleId::Mc];

/// Latitude kept (in mundo) or dropped (in zodiaco).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DirectionKind {
    InMundo,
    InZodiaco,
}

impl DirectionKind {
    pub const fn code(self) -> char {
        match self {
            Self::InMundo => 'M',
            Self::InZodiaco => 'Z',
        }
    }
}

/// Both arcs between one promissor and one significator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionArcs {
    pub promissor: DirectionPointId,
    pub significator: DirectionPointId,
    pub in_mundo: f64,
    pub in_zodiaco: f64,
}

/// One retained direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimaryDirection {
    pub arc: f64,
    pub promissor: DirectionPointId,
    pub significator: DirectionPointId,
    pub kind: DirectionKind,
}

/// Point builders and arcs for one chart.
#[derive(Debug, Clone)]
pub struct PrimaryDirections<'c> {
    chart: &'c Chart,
    lat: f64,
    mc_ra: f64,
    terms: Vec<(BodyId, Sign, f64)>,
}

impl<'c> PrimaryDirections<'c> {
    pub fn new(chart: &'c Chart, terms: TermVariant) -> Result<Self, DirectionError> {
        let mc = chart.angle(AngleId::Mc);
        let mc_ra = mc.position.equatorial(true)?.ra_deg;
        Ok(Self {
            chart,
            lat: chart.location.latitude_deg,
            mc_ra,
            terms: term_longitudes(terms),
        })
    }

    pub const fn mc_ra(&self) -> f64 {
        self.mc_ra
    }

    fn object(&self, obj: DirectedObject) -> Result<&dyn Positional, DirectionError> {
        let p: &dyn Positional = match obj {
            DirectedObject::Body(id) => self.chart.body(id)?,
            DirectedObject::Angle(id) => self.chart.angle(id),
        };
        Ok(p)
    }

    fn relocated(
        &self,
        obj: DirectedObject,
        offset: f64,
        id: DirectionPointId,
    ) -> Result<DirectionPoint, DirectionError> {
        let p = self.object(obj)?;
        let pos = p.position().relocated(p.lon() + offset);
        DirectionPoint::new(id, pos.lon, pos.lat)
    }

    // -----------------------------------------------------------------------
    // Point builders
    // -----------------------------------------------------------------------

    /// Start of `ruler`'s term in `sign`, on the ecliptic.
    pub fn term(&self, ruler: BodyId, sign: Sign) -> Result<DirectionPoint, DirectionError> {
        let lon = self
            .terms
            .iter()
            .find(|(r, s, _)| *r == ruler && *s == sign)
            .map(|(_, _, lon)| *lon)
            .ok_or(DirectionError::InvalidConfig("planet holds no term in sign"))?;
        DirectionPoint::new(DirectionPointId::Term { ruler, sign }, lon, 0.0)
    }

    pub fn antiscia(&self, id: BodyId) -> Result<DirectionPoint, DirectionError> {
        let a = self.chart.body(id)?.antiscia();
        DirectionPoint::new(DirectionPointId::Antiscia(id), a.position.lon, a.position.lat)
    }

    pub fn contra_antiscia(&self, id: BodyId) -> Result<DirectionPoint, DirectionError> {
        let c = self.chart.body(id)?.contra_antiscia();
        DirectionPoint::new(DirectionPointId::ContraAntiscia(id), c.position.lon, c.position.lat)
    }

    pub fn dexter(&self, obj: DirectedObject, asp: AspectType) -> Result<DirectionPoint, DirectionError> {
        self.relocated(obj, -asp.angle(), DirectionPointId::Dexter(obj, asp))
    }

    pub fn sinister(&self, obj: DirectedObject, asp: AspectType) -> Result<DirectionPoint, DirectionError> {
        self.relocated(obj, asp.angle(), DirectionPointId::Sinister(obj, asp))
    }

    /// Conjunction (or opposition) point of an object.
    pub fn natal(&self, obj: DirectedObject, asp: AspectType) -> Result<DirectionPoint, DirectionError> {
        self.relocated(obj, asp.angle(), DirectionPointId::Natal(obj, asp))
    }

    // -----------------------------------------------------------------------
    // Arcs and lists
    // -----------------------------------------------------------------------

    pub fn arcs(&self, prom: &DirectionPoint, sig: &DirectionPoint) -> Result<DirectionArcs, DirectionError> {
        Ok(DirectionArcs {
            promissor: prom.id,
            significator: sig.id,
            in_mundo: arc(prom.ra, prom.decl, sig.ra, sig.decl, self.mc_ra, self.lat)?,
            in_zodiaco: arc(prom.ra_z, prom.decl_z, sig.ra_z, sig.decl_z, self.mc_ra, self.lat)?,
        })
    }

    pub fn significators(&self) -> Result<Vec<DirectionPoint>, DirectionError> {
        SIG_OBJECTS
            .iter()
            .map(|id| DirectedObject::Body(*id))
            .chain(SIG_ANGLES.iter().map(|id| DirectedObject::Angle(*id)))
            .map(|obj| self.natal(obj, AspectType::Conjunction))
            .collect()
    }

    /// Aspect points of every object, then terms, antiscia and contra-antiscia.
    ///
    /// Conjunctions and oppositions give one natal point; other angles give
    /// a dexter and a sinister point.
    pub fn promissors(&self, aspects: &[AspectType]) -> Result<Vec<DirectionPoint>, DirectionError> {
        let mut res = Vec::new();
        for asp in aspects.iter().copied().filter(|a| *a != AspectType::NoAspect) {
            if matches!(asp, AspectType::Conjunction | AspectType::Opposition) {
                for id in SIG_OBJECTS {
                    res.push(self.natal(id.into(), asp)?);
                }
            } else {
                for id in SIG_OBJECTS {
                    res.push(self.dexter(id.into(), asp)?);
                }
                for id in SIG_OBJECTS {
                    res.push(self.sinister(id.into(), asp)?);
                }
            }
        }
        for (ruler, sign, _) in &self.terms {
            res.push(self.term(*ruler, *sign)?);
        }
        for id in SIG_OBJECTS {
            res.push(self.antiscia(id)?);
        }
        for id in SIG_OBJECTS {
            res.push(self.contra_antiscia(id)?);
        }
        Ok(res)
    }

    /// Every arc in `(0, max_arc)`, sorted ascending.
    pub fn list(&self, aspects: &[AspectType], max_arc: f64) -> Result<Vec<PrimaryDirection>, DirectionError> {
        let significators = self.significators()?;
        let promissors = self.promissors(aspects)?;

        let mut res = Vec::new();
        for prom in &promissors {
            for sig in &significators {
                if prom.id == sig.id {
                    continue;
                }
                let arcs = self.arcs(prom, sig)?;
                for (value, kind) in [
                    (arcs.in_mundo, DirectionKind::InMundo),
                    (arcs.in_zodiaco, DirectionKind::InZodiaco),
                ] {
                    if 0.0 < value && value < max_arc {
                        res.push(PrimaryDirection {
                            arc: value,
                            promissor: prom.id,
                            significator: sig.id,
                            kind,
                        });
                    }
                }
            }
        }
        res.sort_by(compare_directions);
        debug!(
            promissors = promissors.len(),
            significators = significators.len(),
            retained = res.len(),
            "primary directions"
        );
        Ok(res)
    }
}

fn compare_directions(a: &PrimaryDirection, b: &PrimaryDirection) -> Ordering {
    a.arc
        .total_cmp(&b.arc)
        .then_with(|| a.promissor.to_string().cmp(&b.promissor.to_string()))
        .then_with(|| a.significator.to_string().cmp(&b.significator.to_string()))
        .then_with(|| a.kind.cmp(&b.kind))
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Sorted primary directions of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionTable {
    directions: Vec<PrimaryDirection>,
}

impl DirectionTable {
    pub fn new(chart: &Chart, config: &FalakConfig, aspects: &[AspectType]) -> Result<Self, DirectionError> {
        config
            .directions
            .validate()
            .map_err(DirectionError::InvalidConfig)?;
        let pd = PrimaryDirections::new(chart, config.dignity.terms)?;
        Ok(Self {
            directions: pd.list(aspects, config.directions.max_arc)?,
        })
    }

    pub fn directions(&self) -> &[PrimaryDirection] {
        &self.directions
    }

    /// Directions with `min < arc < max`.
    pub fn view(&self, min: f64, max: f64) -> Vec<&PrimaryDirection> {
        self.directions
            .iter()
            .filter(|d| min < d.arc && d.arc < max)
            .collect()
    }

    pub fn by_significator(&self, obj: DirectedObject) -> Vec<&PrimaryDirection> {
        self.directions
            .iter()
            .filter(|d| d.significator.involves(obj))
            .collect()
    }

    pub fn by_promissor(&self, obj: DirectedObject) -> Vec<&PrimaryDirection> {
        self.directions
            .iter()
            .filter(|d| d.promissor.involves(obj))
            .collect()
    }
}

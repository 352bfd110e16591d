//! Essential dignities: what a zodiacal position grants each planet.
//!
//! The term and face variants are captured in the scorer at construction,
//! so two scorers with different variants can coexist.

use falak_config::DignityConfig;
use falak_core::{BodyId, BodyPoint, SEVEN_PLANETS, Sign};
use serde::Serialize;

use crate::tables::{face_table, sign_dignities, term_table};

// ---------------------------------------------------------------------------
// Dignity kinds
// ---------------------------------------------------------------------------

/// The nine essential dignity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DignityKind {
    Ruler,
    Exalt,
    DayTrip,
    NightTrip,
    PartTrip,
    Term,
    Face,
    Exile,
    Fall,
}

/// All kinds in lookup order.
pub const ALL_DIGNITY_KINDS: [DignityKind; 9] = [
    DignityKind::Ruler,
    DignityKind::Exalt,
    DignityKind::DayTrip,
    DignityKind::NightTrip,
    DignityKind::PartTrip,
    DignityKind::Term,
    DignityKind::Face,
    DignityKind::Exile,
    DignityKind::Fall,
];

impl DignityKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ruler => "ruler",
            Self::Exalt => "exalt",
            Self::DayTrip => "dayTrip",
            Self::NightTrip => "nightTrip",
            Self::PartTrip => "partTrip",
            Self::Term => "term",
            Self::Face => "face",
            Self::Exile => "exile",
            Self::Fall => "fall",
        }
    }

    pub const fn score(self) -> i32 {
        match self {
            Self::Ruler => 5,
            Self::Exalt => 4,
            Self::DayTrip | Self::NightTrip | Self::PartTrip => 3,
            Self::Term => 2,
            Self::Face => 1,
            Self::Exile => -5,
            Self::Fall => -4,
        }
    }

    /// Exile and fall are debilities; everything else is a dignity.
    pub const fn is_positive(self) -> bool {
        !matches!(self, Self::Exile | Self::Fall)
    }
}

// ---------------------------------------------------------------------------
// Position info
// ---------------------------------------------------------------------------

/// Holder of each dignity kind at one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EssentialInfo {
    pub sign: Sign,
    pub sign_lon: f64,
    pub ruler: BodyId,
    pub exalt: Option<BodyId>,
    pub day_trip: BodyId,
    pub night_trip: BodyId,
    pub part_trip: BodyId,
    pub term: BodyId,
    pub face: BodyId,
    pub exile: BodyId,
    pub fall: Option<BodyId>,
}

impl EssentialInfo {
    pub const fn holder(&self, kind: DignityKind) -> Option<BodyId> {
        match kind {
            DignityKind::Ruler => Some(self.ruler),
            DignityKind::Exalt => self.exalt,
            DignityKind::DayTrip => Some(self.day_trip),
            DignityKind::NightTrip => Some(self.night_trip),
            DignityKind::PartTrip => Some(self.part_trip),
            DignityKind::Term => Some(self.term),
            DignityKind::Face => Some(self.face),
            DignityKind::Exile => Some(self.exile),
            DignityKind::Fall => self.fall,
        }
    }

    /// Kinds held by `id` here, in lookup order.
    pub fn held_by(&self, id: BodyId) -> Vec<DignityKind> {
        ALL_DIGNITY_KINDS
            .into_iter()
            .filter(|kind| self.holder(*kind) == Some(id))
            .collect()
    }
}

/// Essential condition of one body at its own position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyDignity {
    pub id: BodyId,
    pub info: EssentialInfo,
    pub dignities: Vec<DignityKind>,
    pub score: i32,
    pub almutem: Option<BodyId>,
    pub peregrine: bool,
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Table lookups and scores under one term/face selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EssentialScorer {
    config: DignityConfig,
}

/// Largest longitude within a sign.
const MAX_SIGN_LON: f64 = 30.0 - 1e-9;

/// Clamp into `[0, 30)`; NaN maps to 0.
fn clamp_sign_lon(sign_lon: f64) -> f64 {
    sign_lon.max(0.0).min(MAX_SIGN_LON)
}

impl EssentialScorer {
    pub const fn new(config: DignityConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> DignityConfig {
        self.config
    }

    /// Term ruler: the `[start, end)` range containing `sign_lon`.
    ///
    /// `sign_lon` is clamped into `[0, 30)` first; the bands of a sign are
    /// contiguous from 0 to 30, so every clamped value falls in one band.
    pub fn term(&self, sign: Sign, sign_lon: f64) -> BodyId {
        let lon = clamp_sign_lon(sign_lon);
        let terms = &term_table(self.config.terms)[sign.index()];
        let i = terms.iter().rposition(|t| t.start <= lon).unwrap_or(0);
        terms[i].ruler
    }

    /// Face ruler: three 10 deg bands, after the same clamp as [`Self::term`].
    pub fn face(&self, sign: Sign, sign_lon: f64) -> BodyId {
        let sign_lon = clamp_sign_lon(sign_lon);
        let faces = &face_table(self.config.faces)[sign.index()];
        if sign_lon < 10.0 {
            faces[0]
        } else if sign_lon < 20.0 {
            faces[1]
        } else {
            faces[2]
        }
    }

    pub fn info(&self, sign: Sign, sign_lon: f64) -> EssentialInfo {
        let d = sign_dignities(sign);
        EssentialInfo {
            sign,
            sign_lon,
            ruler: d.ruler,
            exalt: d.exalt.map(|(id, _)| id),
            day_trip: d.trip[0],
            night_trip: d.trip[1],
            part_trip: d.trip[2],
            term: self.term(sign, sign_lon),
            face: self.face(sign, sign_lon),
            exile: d.exile,
            fall: d.fall.map(|(id, _)| id),
        }
    }

    /// Dignities (and debilities) `id` holds at a position.
    pub fn dignities(&self, id: BodyId, sign: Sign, sign_lon: f64) -> Vec<DignityKind> {
        self.info(sign, sign_lon).held_by(id)
    }

    /// True when `id` holds none of the seven positive kinds here.
    pub fn is_peregrine(&self, id: BodyId, sign: Sign, sign_lon: f64) -> bool {
        !self
            .dignities(id, sign, sign_lon)
            .iter()
            .any(|kind| kind.is_positive())
    }

    pub fn score(&self, id: BodyId, sign: Sign, sign_lon: f64) -> i32 {
        self.dignities(id, sign, sign_lon)
            .iter()
            .map(|kind| kind.score())
            .sum()
    }

    /// Classical planet with the strictly highest score; earliest wins ties.
    ///
    /// `None` when no planet scores above zero.
    pub fn almutem(&self, sign: Sign, sign_lon: f64) -> Option<BodyId> {
        let info = self.info(sign, sign_lon);
        let mut best: Option<(BodyId, i32)> = None;
        for id in SEVEN_PLANETS {
            let score: i32 = info.held_by(id).iter().map(|k| k.score()).sum();
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn body_dignity(&self, body: &BodyPoint) -> BodyDignity {
        let (sign, sign_lon) = (body.position.sign, body.position.sign_lon);
        let info = self.info(sign, sign_lon);
        let dignities = info.held_by(body.id);
        BodyDignity {
            id: body.id,
            info,
            score: dignities.iter().map(|k| k.score()).sum(),
            peregrine: !dignities.iter().any(|k| k.is_positive()),
            dignities,
            almutem: self.almutem(sign, sign_lon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use falak_config::{FaceVariant, TermVariant};

    fn scorer() -> EssentialScorer {
        EssentialScorer::default()
    }

    #[test]
    fn aries_early_degrees() {
        let s = scorer();
        let info = s.info(Sign::Aries, 3.0);
        assert_eq!(info.ruler, BodyId::Mars);
        assert_eq!(info.exalt, Some(BodyId::Sun));
        assert_eq!(info.day_trip, BodyId::Sun);
        assert_eq!(info.term, BodyId::Jupiter);
        assert_eq!(info.face, BodyId::Mars);
        assert_eq!(info.fall, Some(BodyId::Saturn));

        assert_eq!(
            s.dignities(BodyId::Mars, Sign::Aries, 3.0),
            vec![DignityKind::Ruler, DignityKind::Face]
        );
        assert_eq!(s.score(BodyId::Mars, Sign::Aries, 3.0), 6);
        assert_eq!(
            s.dignities(BodyId::Sun, Sign::Aries, 3.0),
            vec![DignityKind::Exalt, DignityKind::DayTrip]
        );
        assert_eq!(s.score(BodyId::Sun, Sign::Aries, 3.0), 7);
    }

    #[test]
    fn debilities_count_negative() {
        let s = scorer();
        // Saturn in Aries 0: participating triplicity, fall
        assert_eq!(s.score(BodyId::Saturn, Sign::Aries, 1.0), 3 - 4);
        // Venus in Aries 0: exile only
        assert_eq!(s.score(BodyId::Venus, Sign::Aries, 1.0), -5);
        assert!(s.is_peregrine(BodyId::Venus, Sign::Aries, 1.0));
        assert!(!s.is_peregrine(BodyId::Saturn, Sign::Aries, 1.0));
    }

    #[test]
    fn term_boundaries() {
        let s = scorer();
        assert_eq!(s.term(Sign::Aries, 5.999), BodyId::Jupiter);
        assert_eq!(s.term(Sign::Aries, 6.0), BodyId::Venus);
        assert_eq!(s.term(Sign::Aries, 29.99), BodyId::Saturn);
    }

    #[test]
    fn out_of_range_sign_lon_is_clamped() {
        let s = scorer();
        // Leo terms: Jupiter from 0, Mars from 24
        assert_eq!(s.term(Sign::Leo, -0.5), BodyId::Jupiter);
        assert_eq!(s.term(Sign::Leo, 30.0), BodyId::Mars);
        assert_eq!(s.term(Sign::Leo, 42.0), BodyId::Mars);
        assert_eq!(s.term(Sign::Leo, f64::NAN), BodyId::Jupiter);
        assert_eq!(s.face(Sign::Leo, 30.0), s.face(Sign::Leo, 25.0));
        assert_eq!(s.face(Sign::Leo, -1.0), s.face(Sign::Leo, 0.0));
    }

    #[test]
    fn term_variants_differ() {
        let egyptian = scorer();
        let lilly = EssentialScorer::new(DignityConfig {
            terms: TermVariant::Lilly,
            faces: FaceVariant::Chaldean,
        });
        assert_eq!(egyptian.term(Sign::Leo, 2.0), BodyId::Jupiter);
        assert_eq!(lilly.term(Sign::Leo, 2.0), BodyId::Saturn);
    }

    #[test]
    fn face_variants_differ() {
        let chaldean = scorer();
        let trip = EssentialScorer::new(DignityConfig {
            terms: TermVariant::Egyptian,
            faces: FaceVariant::Triplicity,
        });
        assert_eq!(chaldean.face(Sign::Aries, 15.0), BodyId::Sun);
        assert_eq!(trip.face(Sign::Aries, 25.0), BodyId::Jupiter);
        assert_eq!(chaldean.face(Sign::Pisces, 20.0), BodyId::Mars);
    }

    #[test]
    fn almutem_highest_score() {
        let s = scorer();
        // Aries 3: Mars 6, Sun 7, Jupiter 2+0
        assert_eq!(s.almutem(Sign::Aries, 3.0), Some(BodyId::Sun));
        // Leo 2: Sun ruler + day trip = 8
        assert_eq!(s.almutem(Sign::Leo, 2.0), Some(BodyId::Sun));
    }

    #[test]
    fn almutem_sums_every_kind() {
        let s = scorer();
        // Gemini 0 (Egyptian): Mercury ruler+night trip+term = 10
        assert_eq!(s.almutem(Sign::Gemini, 0.5), Some(BodyId::Mercury));
        // Scorpio 25: Mars ruler+night trip = 8, Saturn term = 2
        assert_eq!(s.almutem(Sign::Scorpio, 25.0), Some(BodyId::Mars));
    }

    #[test]
    fn body_dignity_matches_free_functions() {
        let s = scorer();
        let mars = BodyPoint::new(BodyId::Mars, 3.0, 0.0, 0.7, 0.0);
        let d = s.body_dignity(&mars);
        assert_eq!(d.score, s.score(BodyId::Mars, Sign::Aries, 3.0));
        assert_eq!(d.almutem, Some(BodyId::Sun));
        assert!(!d.peregrine);
    }

    #[test]
    fn scores_table() {
        let total: i32 = ALL_DIGNITY_KINDS.iter().map(|k| k.score()).sum();
        assert_eq!(total, 5 + 4 + 9 + 2 + 1 - 5 - 4);
    }
}

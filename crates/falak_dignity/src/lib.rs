//! Essential and accidental dignities for traditional charts.
//!
//! This crate provides:
//! - Static dignity tables with selectable term and face variants
//! - Essential scoring, peregrine test and almutem of a position
//! - Chart dynamics: reception, disposition and aspect categories
//! - Accidental scoring with a per-factor breakdown

pub mod accidental;
pub mod dynamics;
pub mod essential;
pub mod tables;

pub use accidental::{
    AccidentalFactor, AccidentalScore, AccidentalScorer, Haiz, Light, Orientality, SunRelation,
    haiz, house_score, light, orientality, sun_relation, via_combusta,
};
pub use dynamics::{AspectEntry, AspectsByCategory, ChartDynamics};
pub use essential::{ALL_DIGNITY_KINDS, BodyDignity, DignityKind, EssentialInfo, EssentialScorer};
pub use tables::{
    ESSENTIAL_DIGNITIES, FaceTable, SignDignities, Term, TermTable, face_table, ruler,
    sign_dignities, term_longitudes, term_table,
};

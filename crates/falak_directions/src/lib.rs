//! Primary directions by the proportional semi-arc method.
//!
//! This crate provides:
//! - The arc of direction between a promissor and a significator
//! - Promissor builders: aspect points, terms, antiscia, contra-antiscia
//! - Sorted in-mundo and in-zodiaco direction tables with views
//!
//! Only direct motion is considered. In-zodiaco arcs drop the latitude of
//! both points; in-mundo arcs keep it.

pub mod arc;
pub mod error;
pub mod points;
pub mod table;

pub use arc::arc;
pub use error::DirectionError;
pub use points::{DirectedObject, DirectionPoint, DirectionPointId};
pub use table::{
    DirectionArcs, DirectionKind, DirectionTable, PrimaryDirection, PrimaryDirections, SIG_ANGLES,
    SIG_OBJECTS,
};

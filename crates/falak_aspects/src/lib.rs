//! Aspect engine: role selection, angle matching and movement analysis
//! between chart points.

pub mod engine;
pub mod types;

pub use engine::{
    MAX_EXACT_ORB, MAX_MINOR_ORB, active_passive, aspect_speed, aspect_type, bodies_aspecting,
    get_aspect, has_aspect, is_aspecting, transit_aspects,
};
pub use types::{
    ALL_ASPECTS, Aspect, AspectRole, AspectType, Condition, Direction, MAJOR_ASPECTS,
    MINOR_ASPECTS, Movement,
};

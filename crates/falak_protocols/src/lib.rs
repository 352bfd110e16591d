//! Traditional interpretation protocols built on dignities and aspects.
//!
//! This crate provides:
//! - Per-planet score rows and tables with folding
//! - The almutem protocol and topical almutens
//! - Planetary days and hours
//! - Arabic parts
//! - Temperament and behavior protocols
//! - Annual profections

pub mod almutem;
pub mod arabic_parts;
pub mod behavior;
pub mod hours;
pub mod profections;
pub mod score;
pub mod temperament;
pub mod topical;

pub use almutem::{DAY_RULER_SCORE, HOUR_RULER_SCORE, HOUSE_SCORES, almutem, house_row, hylegic_points, rulers_row};
pub use arabic_parts::{ALL_ARABIC_PARTS, ArabicPart, PartOperand, arabic_part, part_lon};
pub use behavior::{BehaviorFactor, BehaviorFactorKind, behavior};
pub use hours::{DAY_RULERS, HourEntry, HourInfo, HourMode, HourTable, NIGHT_RULERS, ROUND, local_weekday, nth_ruler, weekday};
pub use profections::{profection, profection_rotation};
pub use score::{ALMUTEM_DIGNITIES, ScoreCell, ScoreRow, ScoreTable, fold_rows};
pub use temperament::{
    FactorSource, ModifiedFactor, TemperamentFactor, TemperamentFactorKind, TemperamentModifier,
    TemperamentProtocol, TemperamentScore,
};
pub use topical::{ALL_TOPICAL_PROTOCOLS, TopicBuilder, TopicalProtocol, topical_almuten};

//! Error types for angle math.

use thiserror::Error;

/// Errors from angle conversions and spherical geometry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    /// The requested coordinate has no defined value (pole, circumpolar body).
    #[error("undefined coordinate: {0}")]
    UndefinedCoordinate(&'static str),
    /// A sexagesimal string could not be parsed.
    #[error("invalid sexagesimal string: {0:?}")]
    InvalidSexagesimal(String),
}

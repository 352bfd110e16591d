//! Error types for primary directions.

use falak_core::CoreError;
use falak_math::MathError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DirectionError {
    /// A chart point required by the table is missing.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// Equatorial conversion or semi-arc failed (pole, circumpolar point).
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

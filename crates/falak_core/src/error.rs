//! Error types for chart-level computations.

use falak_math::MathError;
use thiserror::Error;

/// Errors from identity lookups, chart queries, the ephemeris seam and
/// iterative searches.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A body, sign, house or angle name that does not exist.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// An iterative search ran out of iterations.
    #[error("no convergence in {search}, last approximation jd {last_jd}")]
    NoConvergence { search: &'static str, last_jd: f64 },
    /// The ephemeris provider failed.
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
    /// Chart data is internally inconsistent (e.g. cusps leave a gap).
    #[error("invalid chart: {0}")]
    InvalidChart(&'static str),
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Geometry failure in angle math.
    #[error(transparent)]
    Math(#[from] MathError),
}

//! Error type shared by spline construction and evaluation.
use thiserror::Error;

/// Failures during spline construction or evaluation.
///
/// None of these are recoverable mid-computation; the caller must
/// supply corrected input and rebuild.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Malformed or insufficient sample data, or mismatched buffer sizes
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Observation point outside the breakpoints under `Extrapolation::Reject`
    #[error("observation point {loc} is outside the sampled range [{lo}, {hi}]")]
    OutOfRangeQuery { loc: f64, lo: f64, hi: f64 },

    /// Zero or non-finite pivot encountered during the tridiagonal solve
    #[error("tridiagonal system is singular")]
    SingularSystem,

    /// Numeric conversion to or from the working float type failed
    #[error("unrepresentable number")]
    Unrepresentable,
}

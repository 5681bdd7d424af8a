//! Piecewise cubic spline interpolation.
//!
//! The interpolant is twice continuously differentiable: values, first,
//! and second derivatives match at every interior breakpoint. Building it
//! takes one tridiagonal solve for the second derivative at each breakpoint,
//! which is O(n) in time and memory; evaluation is a bisection search for the
//! containing interval followed by one cubic in Horner form.
//!
//! Unlike the local Hermite-style methods, every sample influences the
//! interpolant everywhere through that linear solve.
//!
//! # Boundary conditions
//! The interior continuity conditions leave two degrees of freedom, fixed by
//! one of
//! * `Natural`: zero second derivative at both ends (the default)
//! * `NotAKnot`: third derivative continuous across the second and
//!   second-to-last breakpoints, so the first two and last two intervals
//!   each share one cubic
//! * `Clamped`: imposed first derivatives at both ends
//!
//! # Extrapolation
//! Outside the breakpoints, by default the nearest boundary interval's cubic
//! is continued (`Extrapolation::Cubic`). This is a policy choice rather than
//! anything the samples imply, and can grow quickly away from the data;
//! `Linear`, `Hold`, and `Reject` are available instead.
//!
//! ```rust
//! use splinterp::cubic::{self, CubicSpline, Extrapolation};
//! use splinterp::one_dim::Interp1D;
//!
//! let x = [1.0_f64, 3.0, 5.0, 8.0];
//! let y = [2.0_f64, 3.0, 9.0, 10.0];
//!
//! let spline = CubicSpline::new(&x, &y).unwrap();
//! let v = cubic::evaluate_at(&spline, 4.0).unwrap();
//! assert!((v - 225.0 / 38.0).abs() < 1e-12);
//!
//! // Dense (x, y) series for plotting, endpoints included
//! let dense = cubic::evaluate_dense_grid(&spline, 100).unwrap();
//! assert_eq!(dense.len(), 100);
//! assert_eq!(dense[99], (8.0, 10.0));
//!
//! // Refuse to extrapolate
//! let spline = spline.with_extrapolation(Extrapolation::Reject);
//! assert!(spline.eval_one(9.0).is_err());
//! ```
use num_traits::Float;
use serde::Deserialize;

use crate::one_dim::Interp1D;
use crate::utils::linspace;
use crate::SplineError;

pub mod spline;
pub(crate) mod tridiagonal;

pub use spline::CubicSpline;

/// Condition closing the spline's linear system at the two end breakpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BoundaryCondition<T> {
    /// Zero second derivative at both ends
    #[default]
    Natural,
    /// Continuous third derivative at the second and second-to-last breakpoints.
    /// With 3 samples this is the parabola through them, and with 2 the line.
    NotAKnot,
    /// Imposed first derivatives at the first and last breakpoints
    Clamped { left: T, right: T },
}

impl<T> BoundaryCondition<T> {
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryCondition::Natural => "natural",
            BoundaryCondition::NotAKnot => "not-a-knot",
            BoundaryCondition::Clamped { .. } => "clamped",
        }
    }
}

/// Policy for observation points outside the breakpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extrapolation {
    /// Continue the cubic of the nearest boundary interval
    #[default]
    Cubic,
    /// Continue with the value and slope at the nearest end breakpoint
    Linear,
    /// Hold the value at the nearest end breakpoint
    Hold,
    /// Return `SplineError::OutOfRangeQuery`
    Reject,
}

/// Evaluate a spline at one observation point.
pub fn evaluate_at<T: Float>(spline: &CubicSpline<T>, x: T) -> Result<T, SplineError> {
    spline.eval_one(x)
}

/// Evaluate a spline at `n_points` evenly spaced locations spanning its
/// breakpoints, endpoints included, returning `(x, y)` pairs.
pub fn evaluate_dense_grid<T: Float>(
    spline: &CubicSpline<T>,
    n_points: usize,
) -> Result<Vec<(T, T)>, SplineError> {
    if n_points < 2 {
        return Err(SplineError::InvalidInput(
            "Dense grid requires at least 2 points",
        ));
    }

    let (lo, hi) = spline.domain();
    linspace(lo, hi, n_points)?
        .into_iter()
        .map(|x| Ok((x, spline.eval_one(x)?)))
        .collect()
}

/// Build a natural cubic spline through `(x, y)` and evaluate it at `obs`,
/// writing the results to `out`.
///
/// This is a convenience function; when evaluating the same samples
/// repeatedly, build a `CubicSpline` once instead, since construction
/// requires a linear solve and allocation.
pub fn interpn<T: Float>(x: &[T], y: &[T], obs: &[T], out: &mut [T]) -> Result<(), SplineError> {
    CubicSpline::new(x, y)?.eval(obs, out)
}

/// Evaluate interpolant, allocating a new Vec for the output.
pub fn interpn_alloc<T: Float>(x: &[T], y: &[T], obs: &[T]) -> Result<Vec<T>, SplineError> {
    CubicSpline::new(x, y)?.eval_alloc(obs)
}

//! Piecewise cubic spline interpolation/extrapolation on strictly increasing
//! 1D samples, prioritizing correctness of the interpolant and its first two
//! derivatives.
//!
//! # Performance Scalings
//! Construction solves one tridiagonal system with the Thomas algorithm, and
//! evaluation performs a bisection search to find the containing interval,
//! which takes a worst-case number of iterations of log2(number of samples).
//!
//! | Method                        | RAM       | Build | Interp. / Extrap. Cost |
//! |-------------------------------|-----------|-------|------------------------|
//! | cubic::CubicSpline            | O(n)      | O(n)  | O(1) + log2(n)         |
//!
//! # Example
//! ```rust
//! use splinterp::cubic::{self, BoundaryCondition, CubicSpline};
//! use splinterp::one_dim::Interp1D;
//!
//! // Samples
//! let x = [1.0_f64, 3.0, 5.0, 8.0];
//! let y = [2.0_f64, 3.0, 9.0, 10.0];
//!
//! // Natural spline by default
//! let spline = CubicSpline::new(&x, &y).unwrap();
//!
//! // Observation points to interpolate/extrapolate
//! let obs = [0.0_f64, 4.0, 9.0];
//!
//! // Storage for output
//! let mut out = [0.0; 3];
//!
//! // Do interpolation
//! spline.eval(&obs, &mut out).unwrap();
//! cubic::interpn(&x, &y, &obs, &mut out).unwrap();
//!
//! // Other boundary conditions
//! let nak = CubicSpline::with_boundary(&x, &y, BoundaryCondition::NotAKnot).unwrap();
//! assert!((nak.eval_one(4.0).unwrap() - 411.0 / 70.0).abs() < 1e-12);
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod error;
pub use error::SplineError;

pub mod cubic;
pub use cubic::{BoundaryCondition, CubicSpline, Extrapolation};

pub mod one_dim;
pub use one_dim::Interp1D;

pub mod config;
pub mod report;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

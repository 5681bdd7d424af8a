//! Construction and evaluation of a piecewise cubic spline through 1D samples.

use itertools::Itertools;
use log::{debug, log_enabled, trace, Level};
use num_traits::Float;

use super::tridiagonal::Tridiagonal;
use super::{BoundaryCondition, Extrapolation};
use crate::one_dim::{index, Extrap, Interp1D};
use crate::SplineError;

/// A piecewise cubic interpolant on a set of strictly increasing breakpoints.
///
/// Each interval `[x_i, x_{i+1}]` stores coefficients `[a, b, c, d]` of
/// `S_i(x) = a + b*dx + c*dx^2 + d*dx^3`, where `dx = x - x_i`.
/// Values and first and second derivatives are continuous at every
/// interior breakpoint.
///
/// The spline is immutable once built; a different boundary condition or
/// sample set requires building a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSpline<T> {
    breaks: Vec<T>,
    coeffs: Vec<[T; 4]>,
    /// Sample value at the last breakpoint, which no interval starts on
    last: T,
    boundary: BoundaryCondition<T>,
    extrapolation: Extrapolation,
}

impl<T: Float> CubicSpline<T> {
    /// Build a natural cubic spline (zero second derivative at both ends).
    ///
    /// Fails with `SplineError::InvalidInput` if fewer than 2 points are given,
    /// if `x` and `y` differ in length, if any value is not finite,
    /// or if `x` is not strictly increasing.
    pub fn new(x: &[T], y: &[T]) -> Result<Self, SplineError> {
        Self::with_boundary(x, y, BoundaryCondition::Natural)
    }

    /// Build a cubic spline with the given boundary condition.
    pub fn with_boundary(
        x: &[T],
        y: &[T],
        boundary: BoundaryCondition<T>,
    ) -> Result<Self, SplineError> {
        validate_samples(x, y)?;
        if let BoundaryCondition::Clamped { left, right } = boundary {
            if !(left.is_finite() && right.is_finite()) {
                return Err(SplineError::InvalidInput("Clamped slopes must be finite"));
            }
        }

        let n = x.len();
        let h: Vec<T> = x.iter().tuple_windows().map(|(x0, x1)| *x1 - *x0).collect();
        let delta: Vec<T> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();
        if !h.iter().chain(delta.iter()).all(|v| v.is_finite()) {
            return Err(SplineError::InvalidInput(
                "Sample spacing or slopes overflow the float type",
            ));
        }

        let m = second_derivatives(&h, &delta, boundary)?;
        if log_enabled!(Level::Trace) {
            let m_f64: Vec<f64> = m.iter().filter_map(|v| v.to_f64()).collect();
            trace!("Solved second derivatives at breakpoints: {m_f64:?}");
        }

        let two = T::one() + T::one();
        let six = two * (two + T::one());
        let coeffs: Vec<[T; 4]> = (0..n - 1)
            .map(|i| {
                let a = y[i];
                let b = delta[i] - h[i] * (two * m[i] + m[i + 1]) / six;
                let c = m[i] / two;
                let d = (m[i + 1] - m[i]) / (six * h[i]);
                [a, b, c, d]
            })
            .collect();
        if !coeffs.iter().flatten().all(|v| v.is_finite()) {
            return Err(SplineError::Unrepresentable);
        }

        debug!(
            "Built {} cubic spline through {} points ({} intervals)",
            boundary.name(),
            n,
            n - 1
        );

        Ok(Self {
            breaks: x.to_vec(),
            coeffs,
            last: y[n - 1],
            boundary,
            extrapolation: Extrapolation::default(),
        })
    }

    /// Replace the policy used for observation points outside the breakpoints.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Breakpoints, i.e. the x-coordinates of the samples
    pub fn breakpoints(&self) -> &[T] {
        &self.breaks
    }

    /// Per-interval polynomial coefficients `[a, b, c, d]` in local coordinates
    pub fn coefficients(&self) -> &[[T; 4]] {
        &self.coeffs
    }

    pub fn boundary(&self) -> BoundaryCondition<T> {
        self.boundary
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    pub fn n_intervals(&self) -> usize {
        self.coeffs.len()
    }

    /// First and last breakpoint
    pub fn domain(&self) -> (T, T) {
        (self.breaks[0], self.breaks[self.breaks.len() - 1])
    }

    /// Evaluate the `order`-th derivative of the interpolant at `loc`.
    ///
    /// Order 0 is the interpolated value. Orders above 3 are identically zero
    /// for a piecewise cubic. Outside the breakpoints the result follows
    /// the extrapolation policy, so e.g. under `Extrapolation::Hold` every
    /// derivative is zero and under `Extrapolation::Linear` only the first
    /// derivative is nonzero.
    #[inline]
    pub fn derivative(&self, loc: T, order: usize) -> Result<T, SplineError> {
        let zero = T::zero();
        let n = self.breaks.len();
        let (i, extrap) = index(&self.breaks, loc);

        match (extrap, self.extrapolation) {
            (Extrap::Inside, _) | (_, Extrapolation::Cubic) => {}
            (_, Extrapolation::Reject) => {
                let (lo, hi) = self.domain();
                return Err(SplineError::OutOfRangeQuery {
                    loc: loc.to_f64().unwrap_or(f64::NAN),
                    lo: lo.to_f64().unwrap_or(f64::NAN),
                    hi: hi.to_f64().unwrap_or(f64::NAN),
                });
            }
            (Extrap::OutsideLow, Extrapolation::Hold) => {
                return Ok(if order == 0 { self.coeffs[0][0] } else { zero });
            }
            (Extrap::OutsideHigh, Extrapolation::Hold) => {
                return Ok(if order == 0 { self.last } else { zero });
            }
            (Extrap::OutsideLow, Extrapolation::Linear) => {
                let [a, b, _, _] = self.coeffs[0];
                return Ok(match order {
                    0 => a + b * (loc - self.breaks[0]),
                    1 => b,
                    _ => zero,
                });
            }
            (Extrap::OutsideHigh, Extrapolation::Linear) => {
                let slope = self.poly(n - 2, self.breaks[n - 1] - self.breaks[n - 2], 1);
                return Ok(match order {
                    0 => self.last + slope * (loc - self.breaks[n - 1]),
                    1 => slope,
                    _ => zero,
                });
            }
        }

        // Exact sample value at the last breakpoint, rather than the
        // rounded sum of the last interval's polynomial terms
        if order == 0 && loc == self.breaks[n - 1] {
            return Ok(self.last);
        }

        Ok(self.poly(i, loc - self.breaks[i], order))
    }

    /// Evaluate the `order`-th derivative of interval `i`'s cubic at local offset `dx`
    #[inline]
    fn poly(&self, i: usize, dx: T, order: usize) -> T {
        let [a, b, c, d] = self.coeffs[i];
        let two = T::one() + T::one();
        let three = two + T::one();

        match order {
            0 => a + dx * (b + dx * (c + dx * d)),
            1 => b + dx * (two * c + three * d * dx),
            2 => two * c + two * three * d * dx,
            3 => two * three * d,
            _ => T::zero(),
        }
    }
}

impl<T: Float> Interp1D<T> for CubicSpline<T> {
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, SplineError> {
        self.derivative(loc, 0)
    }
}

/// Check the invariants of a sample set: matching lengths, at least 2 points,
/// all values finite, and strictly increasing `x`.
fn validate_samples<T: Float>(x: &[T], y: &[T]) -> Result<(), SplineError> {
    if x.len() != y.len() {
        return Err(SplineError::InvalidInput("Length mismatch between x and y"));
    }
    if x.len() < 2 {
        return Err(SplineError::InvalidInput("At least 2 samples are required"));
    }
    if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return Err(SplineError::InvalidInput("Sample values must be finite"));
    }
    if !x.iter().tuple_windows().all(|(x0, x1)| x0 < x1) {
        return Err(SplineError::InvalidInput(
            "Sample x values must be strictly increasing",
        ));
    }

    Ok(())
}

/// Solve for the second derivative of the spline at each breakpoint, given
/// interval widths `h` and divided differences `delta`.
///
/// Interior rows enforce continuity of the first derivative:
/// `h[i-1] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i] m[i+1] = 6 (delta[i] - delta[i-1])`.
/// The first and last rows come from the boundary condition.
fn second_derivatives<T: Float>(
    h: &[T],
    delta: &[T],
    boundary: BoundaryCondition<T>,
) -> Result<Vec<T>, SplineError> {
    let n = h.len() + 1;
    let zero = T::zero();
    let two = T::one() + T::one();
    let six = two * (two + T::one());

    let mut sys = Tridiagonal::zeros(n);
    for i in 1..n - 1 {
        sys.sub[i] = h[i - 1];
        sys.diag[i] = two * (h[i - 1] + h[i]);
        sys.sup[i] = h[i];
        sys.rhs[i] = six * (delta[i] - delta[i - 1]);
    }

    match boundary {
        // With only 2 points, not-a-knot collapses to the straight line
        BoundaryCondition::Natural | BoundaryCondition::NotAKnot if n == 2 => {
            Ok(vec![zero; n])
        }
        BoundaryCondition::Natural => {
            sys.pin(0, zero);
            sys.pin(n - 1, zero);
            sys.solve()
        }
        BoundaryCondition::Clamped { left, right } => {
            sys.diag[0] = two * h[0];
            sys.sup[0] = h[0];
            sys.rhs[0] = six * (delta[0] - left);

            sys.sub[n - 1] = h[n - 2];
            sys.diag[n - 1] = two * h[n - 2];
            sys.rhs[n - 1] = six * (right - delta[n - 2]);

            sys.solve()
        }
        // With 3 points, both not-a-knot conditions land on the middle breakpoint
        // and the spline is the parabola through the samples
        BoundaryCondition::NotAKnot if n == 3 => {
            let m = two * (delta[1] - delta[0]) / (h[0] + h[1]);
            Ok(vec![m; n])
        }
        BoundaryCondition::NotAKnot => {
            // Third derivative continuous at the second breakpoint:
            //   m[0] = ((h0 + h1) m[1] - h0 m[2]) / h1
            // which is substituted into the first interior row.
            let (h0, h1) = (h[0], h[1]);
            sys.pin(0, zero);
            sys.sub[1] = zero;
            sys.diag[1] = (h0 + h1) * (h0 + two * h1) / h1;
            sys.sup[1] = (h1 * h1 - h0 * h0) / h1;

            // Likewise at the second-to-last breakpoint:
            //   m[n-1] = ((a + b) m[n-2] - b m[n-3]) / a
            let (a, b) = (h[n - 3], h[n - 2]);
            sys.sub[n - 2] = (a * a - b * b) / a;
            sys.diag[n - 2] = (a + b) * (two * a + b) / a;
            sys.sup[n - 2] = zero;
            sys.pin(n - 1, zero);

            let mut m = sys.solve()?;
            m[0] = ((h0 + h1) * m[1] - h0 * m[2]) / h1;
            m[n - 1] = ((a + b) * m[n - 2] - b * m[n - 3]) / a;

            Ok(m)
        }
    }
}

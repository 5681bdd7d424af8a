//! One-dimensional evaluation plumbing shared by the spline interpolants:
//! the breakpoint search and the evaluation trait.

use num_traits::Float;

use crate::SplineError;

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Get the index of the lower breakpoint of the interval containing `loc`,
/// along with whether `loc` is inside the breakpoints or off either end.
///
/// The index is clipped to the first or last interval under extrapolation,
/// so `grid[i]` and `grid[i + 1]` are always valid. An observation point
/// exactly on a breakpoint lands in the interval to its right, except for
/// the last breakpoint, which closes the last interval.
///
/// `grid` must be sorted and contain at least 2 entries.
#[inline]
pub fn index<T: Float>(grid: &[T], loc: T) -> (usize, Extrap) {
    let n = grid.len();
    let i = ((grid.partition_point(|v| v <= &loc) as isize - 1).max(0) as usize).min(n - 2);

    let extrap = match loc {
        x if x < grid[0] => Extrap::OutsideLow,
        x if x > grid[n - 1] => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    };

    (i, extrap)
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> Result<T, SplineError>;

    /// Evaluate the interpolant at a set of observation points.
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), SplineError> {
        if locs.len() != out.len() {
            return Err(SplineError::InvalidInput("Length mismatch"));
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i])?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, SplineError> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

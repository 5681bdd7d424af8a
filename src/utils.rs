//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::{Float, NumCast};

use crate::SplineError;

/// Generates `n` evenly spaced values from start to stop,
/// including both endpoints exactly.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Result<Vec<T>, SplineError>
where
    T: Float,
{
    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![start]),
        _ => {}
    }

    let dx: T = (stop - start) / <T as NumCast>::from(n - 1).ok_or(SplineError::Unrepresentable)?;
    let mut out = (0..n)
        .map(|i| Ok(start + <T as NumCast>::from(i).ok_or(SplineError::Unrepresentable)? * dx))
        .collect::<Result<Vec<T>, SplineError>>()?;
    out[n - 1] = stop;

    Ok(out)
}

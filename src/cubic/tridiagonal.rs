//! Thomas algorithm for tridiagonal linear systems.

use num_traits::Float;

use crate::SplineError;

/// A square tridiagonal system `A x = rhs` stored by diagonals.
///
/// Row `i` reads `sub[i] * x[i-1] + diag[i] * x[i] + sup[i] * x[i+1] = rhs[i]`;
/// `sub[0]` and `sup[n-1]` are ignored.
#[derive(Clone, Debug)]
pub(crate) struct Tridiagonal<T> {
    pub sub: Vec<T>,
    pub diag: Vec<T>,
    pub sup: Vec<T>,
    pub rhs: Vec<T>,
}

impl<T: Float> Tridiagonal<T> {
    /// An `n`x`n` system with every entry zeroed.
    pub fn zeros(n: usize) -> Self {
        Self {
            sub: vec![T::zero(); n],
            diag: vec![T::zero(); n],
            sup: vec![T::zero(); n],
            rhs: vec![T::zero(); n],
        }
    }

    /// Replace row `i` with the identity row `x[i] = value`.
    pub fn pin(&mut self, i: usize, value: T) {
        self.sub[i] = T::zero();
        self.diag[i] = T::one();
        self.sup[i] = T::zero();
        self.rhs[i] = value;
    }

    /// Solve by forward elimination and back substitution, consuming the system.
    ///
    /// No pivoting is done, so this is only stable for diagonally dominant
    /// or otherwise well-conditioned systems; a zero or non-finite pivot
    /// is reported rather than propagated as NaN.
    pub fn solve(self) -> Result<Vec<T>, SplineError> {
        let Self {
            sub,
            diag,
            mut sup,
            mut rhs,
        } = self;
        let n = diag.len();
        if n == 0 {
            return Ok(rhs);
        }

        // Forward sweep, normalizing each row by its pivot
        let mut pivot = diag[0];
        check_pivot(pivot)?;
        sup[0] = sup[0] / pivot;
        rhs[0] = rhs[0] / pivot;
        for i in 1..n {
            pivot = diag[i] - sub[i] * sup[i - 1];
            check_pivot(pivot)?;
            if i < n - 1 {
                sup[i] = sup[i] / pivot;
            }
            rhs[i] = (rhs[i] - sub[i] * rhs[i - 1]) / pivot;
        }

        // Back substitution in place
        for i in (0..n - 1).rev() {
            rhs[i] = rhs[i] - sup[i] * rhs[i + 1];
        }

        Ok(rhs)
    }
}

#[inline]
fn check_pivot<T: Float>(pivot: T) -> Result<(), SplineError> {
    if pivot == T::zero() || !pivot.is_finite() {
        return Err(SplineError::SingularSystem);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::Tridiagonal;
    use crate::testing::{randn, rng_fixed_seed};
    use crate::SplineError;

    /// Multiply the tridiagonal matrix by `x`
    fn matvec(sys: &Tridiagonal<f64>, x: &[f64]) -> Vec<f64> {
        let n = x.len();
        (0..n)
            .map(|i| {
                let mut v = sys.diag[i] * x[i];
                if i > 0 {
                    v += sys.sub[i] * x[i - 1];
                }
                if i < n - 1 {
                    v += sys.sup[i] * x[i + 1];
                }
                v
            })
            .collect()
    }

    #[test]
    fn test_solve_diagonally_dominant() {
        let rng = &mut rng_fixed_seed();

        for n in [1, 2, 3, 17, 200] {
            let mut sys = Tridiagonal::<f64>::zeros(n);
            sys.sub = randn::<f64>(rng, n);
            sys.sup = randn::<f64>(rng, n);
            sys.diag = randn::<f64>(rng, n).iter().map(|d| d + 2.5).collect();

            let x_expected: Vec<f64> = randn::<f64>(rng, n).iter().map(|x| 10.0 * x - 5.0).collect();
            sys.rhs = matvec(&sys, &x_expected);

            let x = sys.solve().unwrap();
            for i in 0..n {
                assert_abs_diff_eq!(x[i], x_expected[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_pinned_rows() {
        let mut sys = Tridiagonal::<f64>::zeros(3);
        sys.pin(0, 1.0);
        sys.sub[1] = 1.0;
        sys.diag[1] = 4.0;
        sys.sup[1] = 1.0;
        sys.rhs[1] = 6.0 + 1.0 + 2.0;
        sys.pin(2, 2.0);

        let x = sys.solve().unwrap();
        assert_eq!(x[0], 1.0);
        assert_abs_diff_eq!(x[1], 1.5, epsilon = 1e-15);
        assert_eq!(x[2], 2.0);
    }

    #[test]
    fn test_singular() {
        let sys = Tridiagonal::<f64>::zeros(4);
        assert_eq!(sys.solve().unwrap_err(), SplineError::SingularSystem);
    }
}

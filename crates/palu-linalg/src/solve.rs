//! Dense linear systems `A * x = b` via pivoted LU.

use crate::lu::{factorize_with, PivotedLu};
use crate::matrix::Matrix;
use crate::params::LuParams;
use crate::vector::Vector;
use palu_core::{ensure_dims, Result};

/// Solve `A * x = b`.
///
/// Errors from factorization or from either substitution are returned as
/// they are; nothing is retried.
///
/// ```
/// use palu_linalg::{solve, Matrix, Vector};
/// let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
/// let x = solve(&a, &Vector::from_slice(&[4.0, 6.0])).unwrap();
/// assert_eq!(x.as_slice(), &[2.0, 3.0]);
/// ```
pub fn solve(a: &Matrix, b: &Vector) -> Result<Vector> {
    solve_with(a, b, LuParams::default())
}

/// [`solve`] with explicit [`LuParams`].
pub fn solve_with(a: &Matrix, b: &Vector, params: LuParams) -> Result<Vector> {
    // b is checked before factoring
    ensure_dims!(
        b.len() == a.rows(),
        "{}x{} system with a right-hand side of length {}",
        a.rows(),
        a.cols(),
        b.len()
    );
    let lu: PivotedLu = factorize_with(a, params)?;
    lu.solve(b)
}

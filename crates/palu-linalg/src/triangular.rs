//! Forward and back substitution for triangular systems.
//!
//! Neither routine reads the half of the matrix it does not need, and
//! neither assumes a unit diagonal: every diagonal entry is divided by and
//! must therefore be nonzero.

use crate::matrix::Matrix;
use crate::params::LuParams;
use crate::vector::Vector;
use palu_core::{ensure_dims, singular, Result};

fn check_system(m: &Matrix, rhs: &Vector, name: &str) -> Result<()> {
    ensure_dims!(
        m.is_square(),
        "{name} must be square, got {}x{}",
        m.rows(),
        m.cols()
    );
    ensure_dims!(
        rhs.len() == m.rows(),
        "{name} is {}x{} but the right-hand side has length {}",
        m.rows(),
        m.cols(),
        rhs.len()
    );
    Ok(())
}

/// Solve `L * y = b` for lower-triangular `L`.
///
/// ```
/// use palu_linalg::{forward_solve, Matrix, Vector};
/// let l = Matrix::from_rows(&[[1.0, 0.0], [2.0, 1.0]]).unwrap();
/// let y = forward_solve(&l, &Vector::from_slice(&[1.0, 4.0])).unwrap();
/// assert_eq!(y.as_slice(), &[1.0, 2.0]);
/// ```
pub fn forward_solve(l: &Matrix, b: &Vector) -> Result<Vector> {
    forward_solve_with(l, b, LuParams::default())
}

/// [`forward_solve`] with an explicit zero-diagonal tolerance.
pub fn forward_solve_with(l: &Matrix, b: &Vector, params: LuParams) -> Result<Vector> {
    check_system(l, b, "L")?;
    let n = l.rows();
    let mut y = b.clone();
    for k in 0..n {
        let d = l[(k, k)];
        if params.is_zero_pivot(d) {
            singular!(k);
        }
        let mut acc = y[k];
        for j in 0..k {
            acc -= l[(k, j)] * y[j];
        }
        y[k] = acc / d;
    }
    Ok(y)
}

/// Solve `U * x = y` for upper-triangular `U`.
///
/// ```
/// use palu_linalg::{back_solve, Matrix, Vector};
/// let u = Matrix::from_rows(&[[2.0, 1.0], [0.0, 1.0]]).unwrap();
/// let x = back_solve(&u, &Vector::from_slice(&[2.0, 2.0])).unwrap();
/// assert_eq!(x.as_slice(), &[0.0, 2.0]);
/// ```
pub fn back_solve(u: &Matrix, y: &Vector) -> Result<Vector> {
    back_solve_with(u, y, LuParams::default())
}

/// [`back_solve`] with an explicit zero-diagonal tolerance.
pub fn back_solve_with(u: &Matrix, y: &Vector, params: LuParams) -> Result<Vector> {
    check_system(u, y, "U")?;
    let n = u.rows();
    let mut x = y.clone();
    for k in (0..n).rev() {
        let d = u[(k, k)];
        if params.is_zero_pivot(d) {
            singular!(k);
        }
        let mut acc = x[k];
        for j in (k + 1)..n {
            acc -= u[(k, j)] * x[j];
        }
        x[k] = acc / d;
    }
    Ok(x)
}

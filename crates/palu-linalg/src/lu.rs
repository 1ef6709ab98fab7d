//! LU factorization with partial pivoting, `P * A = L * U`.
//!
//! The elimination works on a private copy of `A`. At step `k` the row with
//! the largest `|B[i][k]|` for `i >= k` is swapped into position `k` (in the
//! working copy, in the partially built `L` and in the permutation), row `k`
//! of the working copy becomes row `k` of `U`, column `k` of `L` is filled
//! with the multipliers `B[i][k] / U[k][k]`, and the trailing block receives
//! the Schur complement update.
//!
//! `L` is not forced to a unit diagonal; its diagonal is whatever the
//! division above produces (which is 1 up to rounding).
//!
//! A pivot is rejected only when it is exactly zero, unless a tolerance is
//! given through [`LuParams`]. Pivots that are tiny but nonzero are accepted
//! with a `log::warn!` and may give inaccurate solutions.

use crate::matrix::Matrix;
use crate::params::LuParams;
use crate::permutation::Permutation;
use crate::pivot::find_pivot_row_from;
use crate::triangular::{back_solve_with, forward_solve_with};
use crate::vector::Vector;
use palu_core::{ensure_dims, singular, Real, Result};

/// The factors of `P * A = L * U`, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedLu {
    perm: Permutation,
    l: Matrix,
    u: Matrix,
    params: LuParams,
}

/// Factor the square matrix `a` with the default (exact-zero) pivot rule.
///
/// ```
/// use palu_linalg::{factorize, Matrix};
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let lu = factorize(&a).unwrap();
/// assert_eq!(lu.permutation().as_slice(), &[1, 0]);
/// assert!(lu.residual(&a).unwrap() < 1e-12);
/// ```
pub fn factorize(a: &Matrix) -> Result<PivotedLu> {
    factorize_with(a, LuParams::default())
}

/// Factor the square matrix `a` using `params`.
pub fn factorize_with(a: &Matrix, params: LuParams) -> Result<PivotedLu> {
    ensure_dims!(
        a.is_square(),
        "LU factorization needs a square matrix, got {}x{}",
        a.rows(),
        a.cols()
    );
    let n = a.rows();
    let scale = a.max_abs();

    let mut b = a.clone();
    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);
    let mut perm = Permutation::identity(n);
    let mut interchanges = 0usize;

    for k in 0..n {
        let p = find_pivot_row_from(&b, k, k)?;
        if p != k {
            b.swap_rows_unchecked(p, k);
            l.swap_rows_unchecked(p, k);
            perm.swap(p, k);
            interchanges += 1;
            log::debug!("step {k}: interchanging rows {k} and {p}");
        }

        for j in k..n {
            u[(k, j)] = b[(k, j)];
        }

        let pivot = u[(k, k)];
        log::trace!("step {k}: pivot {pivot:e} from original row {}", perm.original_row(k));
        if params.is_zero_pivot(pivot) {
            singular!(k);
        }
        if pivot.abs() < Real::EPSILON * scale {
            log::warn!(
                "step {k}: pivot {pivot:e} is tiny relative to max |A| = {scale:e}; \
                 the factors may be inaccurate"
            );
        }

        for i in k..n {
            l[(i, k)] = b[(i, k)] / pivot;
        }

        for i in k..n {
            let lik = l[(i, k)];
            for j in k..n {
                b[(i, j)] -= lik * u[(k, j)];
            }
        }
    }

    log::debug!("factorized {n}x{n} matrix with {interchanges} row interchanges");
    Ok(PivotedLu { perm, l, u, params })
}

impl PivotedLu {
    /// Dimension `n` of the factored `n × n` matrix.
    pub fn dim(&self) -> usize {
        self.perm.len()
    }

    /// The row permutation `P`.
    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }

    /// The lower-triangular factor `L`.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// The upper-triangular factor `U`.
    pub fn u(&self) -> &Matrix {
        &self.u
    }

    /// Consume into `(P, L, U)`.
    pub fn into_parts(self) -> (Permutation, Matrix, Matrix) {
        (self.perm, self.l, self.u)
    }

    /// Solve `A * x = b` with the stored factors: permute `b`, then forward
    /// and back substitution.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        let pb = self.perm.apply(b)?;
        let y = forward_solve_with(&self.l, &pb, self.params)?;
        back_solve_with(&self.u, &y, self.params)
    }

    /// `det(A) = sign(P) * prod(diag L) * prod(diag U)`.
    pub fn determinant(&self) -> Real {
        let diag_l: Real = self.l.diagonal().iter().product();
        let diag_u: Real = self.u.diagonal().iter().product();
        self.perm.sign() * diag_l * diag_u
    }

    /// `Pᵀ * L * U`, i.e. the original matrix up to rounding.
    pub fn reconstruct(&self) -> Result<Matrix> {
        let lu = self.l.matmul(&self.u)?;
        self.perm.inverse().apply_rows(&lu)
    }

    /// Largest entry of `|P * A - L * U|`.
    pub fn residual(&self, a: &Matrix) -> Result<Real> {
        let pa = self.perm.apply_rows(a)?;
        let lu = self.l.matmul(&self.u)?;
        pa.max_abs_diff(&lu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use palu_core::Error;

    #[test]
    fn pivots_on_largest_entry() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let lu = factorize(&a).unwrap();
        assert_eq!(lu.permutation().as_slice(), &[1, 0]);
        assert_eq!(
            lu.permutation().to_matrix(),
            Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap()
        );
        assert_eq!(lu.u().row(0).as_slice(), &[3.0, 4.0]);
        assert_abs_diff_eq!(lu.l()[(1, 0)], 1.0 / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(lu.u()[(1, 1)], 2.0 - 4.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn factors_are_triangular() {
        let a = Matrix::from_rows(&[
            [2.0, -1.0, 0.0, 3.0],
            [4.0, 1.0, -2.0, 0.5],
            [-6.0, 0.0, 1.0, 1.0],
            [1.0, 5.0, 2.0, -1.0],
        ])
        .unwrap();
        let lu = factorize(&a).unwrap();
        assert!(lu.l().is_lower_triangular());
        assert!(lu.u().is_upper_triangular());
        for i in 0..4 {
            assert_abs_diff_eq!(lu.l()[(i, i)], 1.0, epsilon = 1e-15);
            assert!(lu.u()[(i, i)] != 0.0);
        }
        assert!(lu.residual(&a).unwrap() < 1e-12);
        assert!(lu.reconstruct().unwrap().max_abs_diff(&a).unwrap() < 1e-12);
    }

    #[test]
    fn dense_permutation_view_satisfies_pa_eq_lu() {
        let a = Matrix::from_rows(&[[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]]).unwrap();
        let lu = factorize(&a).unwrap();
        let pa = lu.permutation().to_matrix().matmul(&a).unwrap();
        let prod = lu.l().matmul(lu.u()).unwrap();
        assert!(pa.max_abs_diff(&prod).unwrap() < 1e-12);
    }

    #[test]
    fn zero_column_is_singular_at_first_step() {
        let a = Matrix::from_rows(&[[0.0, 1.0], [0.0, 1.0]]).unwrap();
        assert_eq!(factorize(&a), Err(Error::SingularMatrix { index: 0 }));
    }

    #[test]
    fn rank_deficient_is_singular_later() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(factorize(&a), Err(Error::SingularMatrix { index: 1 }));
    }

    #[test]
    fn non_square_is_dimension_error() {
        let a = Matrix::zeros(2, 3);
        assert!(factorize(&a).unwrap_err().is_dimension());
    }

    #[test]
    fn tolerance_catches_near_singular() {
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0 + 1e-14]]).unwrap();
        assert!(factorize(&a).is_ok());
        let params = LuParams::with_pivot_tolerance(1e-10).unwrap();
        assert_eq!(
            factorize_with(&a, params),
            Err(Error::SingularMatrix { index: 1 })
        );
    }

    #[test]
    fn determinant_includes_permutation_sign() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_abs_diff_eq!(factorize(&a).unwrap().determinant(), -2.0, epsilon = 1e-12);
        let b = Matrix::from_rows(&[[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]]).unwrap();
        // 0*(1) - 2*(1) + 1*(0 - 3) = -5
        assert_abs_diff_eq!(factorize(&b).unwrap().determinant(), -5.0, epsilon = 1e-12);
    }

    #[test]
    fn input_is_not_mutated() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let before = a.clone();
        let _ = factorize(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn reuse_factors_for_several_rhs() {
        let a = Matrix::from_rows(&[[4.0, -2.0, 1.0], [3.0, 6.0, -4.0], [2.0, 1.0, 8.0]]).unwrap();
        let lu = factorize(&a).unwrap();
        for b in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [3.0, -1.0, 2.0]] {
            let b = Vector::from_slice(&b);
            let x = lu.solve(&b).unwrap();
            let ax = a.mul_vector(&x).unwrap();
            assert!(ax.max_abs_diff(&b).unwrap() < 1e-12);
        }
        assert!(lu.solve(&Vector::zeros(2)).unwrap_err().is_dimension());
    }

    #[test]
    fn into_parts_and_empty() {
        let lu = factorize(&Matrix::zeros(0, 0)).unwrap();
        assert_eq!(lu.dim(), 0);
        assert_eq!(lu.determinant(), 1.0);
        let (p, l, u) = lu.into_parts();
        assert!(p.is_empty());
        assert_eq!((l.rows(), u.rows()), (0, 0));
    }
}

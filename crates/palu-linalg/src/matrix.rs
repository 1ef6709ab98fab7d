//! `Matrix` — a dense two-dimensional matrix of reals.
//!
//! This is a thin newtype around `nalgebra::DMatrix<f64>` with row-major
//! *access* (`m[(row, col)]`) and dimensions fixed at construction. Every
//! constructor and every operation that combines two operands checks shapes
//! and reports a mismatch as [`Error::Dimension`](palu_core::Error::Dimension)
//! instead of panicking.

use crate::vector::Vector;
use nalgebra::DMatrix;
use palu_core::{ensure_dims, Real, Result};
use std::ops::{Index, IndexMut, Mul, Sub};

/// A dynamically-sized 2D matrix of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice of length `rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Result<Self> {
        ensure_dims!(
            data.len() == rows * cols,
            "{rows}x{cols} matrix needs {} entries, got {}",
            rows * cols,
            data.len()
        );
        Ok(Self(DMatrix::from_row_slice(rows, cols, data)))
    }

    /// Create from a sequence of rows, all of which must have the same
    /// length.
    ///
    /// ```
    /// use palu_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Real]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        for (i, r) in rows.iter().enumerate() {
            ensure_dims!(
                r.as_ref().len() == ncols,
                "row {i} has {} entries, expected {ncols}",
                r.as_ref().len()
            );
        }
        Ok(Self(DMatrix::from_fn(nrows, ncols, |i, j| rows[i].as_ref()[j])))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Consume and return the inner `DMatrix`.
    pub fn into_inner(self) -> DMatrix<Real> {
        self.0
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Diagonal elements as a `Vector`.
    pub fn diagonal(&self) -> Vector {
        let n = self.0.nrows().min(self.0.ncols());
        let data: Vec<Real> = (0..n).map(|i| self.0[(i, i)]).collect();
        Vector::from_vec(data)
    }

    /// Extract a row as a `Vector`.
    pub fn row(&self, i: usize) -> Vector {
        let data: Vec<Real> = self.0.row(i).iter().copied().collect();
        Vector::from_vec(data)
    }

    /// Extract a column as a `Vector`.
    pub fn column(&self, j: usize) -> Vector {
        let data: Vec<Real> = self.0.column(j).iter().copied().collect();
        Vector::from_vec(data)
    }

    /// Largest absolute entry (0 for an empty matrix).
    pub fn max_abs(&self) -> Real {
        self.0.iter().fold(0.0, |acc: Real, x| acc.max(x.abs()))
    }

    /// Return `true` if every entry above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.rows()).all(|i| ((i + 1)..self.cols()).all(|j| self.0[(i, j)] == 0.0))
    }

    /// Return `true` if every entry below the diagonal is exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        (0..self.rows()).all(|i| (0..i.min(self.cols())).all(|j| self.0[(i, j)] == 0.0))
    }

    /// Exchange rows `u` and `v`; callers have already bounds-checked.
    pub(crate) fn swap_rows_unchecked(&mut self, u: usize, v: usize) {
        if u != v {
            self.0.swap_rows(u, v);
        }
    }

    /// Checked matrix product `self * rhs`.
    ///
    /// Fails with a dimension error when `self.cols() != rhs.rows()`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        ensure_dims!(
            self.cols() == rhs.rows(),
            "cannot multiply {}x{} by {}x{}",
            self.rows(),
            self.cols(),
            rhs.rows(),
            rhs.cols()
        );
        Ok(Matrix(&self.0 * &rhs.0))
    }

    /// Checked matrix-vector product `self * v`.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        ensure_dims!(
            self.cols() == v.len(),
            "cannot multiply {}x{} matrix by vector of length {}",
            self.rows(),
            self.cols(),
            v.len()
        );
        Ok(Vector::from(&self.0 * v.inner()))
    }

    /// Largest entry-wise absolute difference to `other`.
    pub fn max_abs_diff(&self, other: &Matrix) -> Result<Real> {
        ensure_dims!(
            self.rows() == other.rows() && self.cols() == other.cols(),
            "shapes {}x{} and {}x{} differ",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols()
        );
        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .fold(0.0, |acc: Real, (a, b)| acc.max((a - b).abs())))
    }
}

// ── From / Into ───────────────────────────────────────────────────────────────

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        Self(m)
    }
}

impl From<Matrix> for DMatrix<Real> {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────
//
// The operators panic on a shape mismatch, as nalgebra does; use `matmul`
// when the shapes are not already known to agree.

impl Sub for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 - &rhs.0)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

//! `Vector` — a fixed-length column of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>`. The length is fixed at
//! construction; nothing in the API resizes it.

use nalgebra::DVector;
use palu_core::{ensure_dims, Real, Result};
use std::ops::{Index, IndexMut};

/// A dynamically-sized, fixed-length vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(DVector<Real>);

impl Vector {
    /// Create a zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create a vector from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create a vector from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Infinity norm, `max |v_i|` (0 for an empty vector).
    pub fn norm_inf(&self) -> Real {
        self.0.iter().fold(0.0, |acc: Real, x| acc.max(x.abs()))
    }

    /// Largest entry-wise absolute difference to `other`.
    pub fn max_abs_diff(&self, other: &Vector) -> Result<Real> {
        ensure_dims!(
            self.len() == other.len(),
            "vector lengths {} and {} differ",
            self.len(),
            other.len()
        );
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(0.0, |acc: Real, (a, b)| acc.max((a - b).abs())))
    }
}

// ── From / Into conversions ───────────────────────────────────────────────────

impl From<DVector<Real>> for Vector {
    fn from(v: DVector<Real>) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVector<Real> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<Vec<Real>> for Vector {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl From<&[Real]> for Vector {
    fn from(s: &[Real]) -> Self {
        Self::from_slice(s)
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.0[i]
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let v = Vector::zeros(4);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|&x| x == 0.0));
        assert!(Vector::zeros(0).is_empty());
    }

    #[test]
    fn norm_inf_picks_largest_magnitude() {
        let v = Vector::from_slice(&[1.0, -7.5, 3.0]);
        assert_eq!(v.norm_inf(), 7.5);
    }

    #[test]
    fn max_abs_diff_checks_length() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[1.5, 1.0]);
        assert_eq!(a.max_abs_diff(&b).unwrap(), 1.0);
        assert!(a.max_abs_diff(&Vector::zeros(3)).unwrap_err().is_dimension());
    }

    #[test]
    fn display() {
        let v = Vector::from_vec(vec![1.0, 2.5]);
        assert_eq!(v.to_string(), "[1, 2.5]");
    }
}

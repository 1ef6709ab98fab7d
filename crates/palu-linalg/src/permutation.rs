//! Row permutations recorded during pivoting.
//!
//! A [`Permutation`] stores, for every final row position `i`, the index of
//! the original row that ended up there. Applying it to a right-hand side
//! gives `b'[i] = b[map[i]]`, which is exactly `P * b` for the dense 0/1
//! matrix returned by [`Permutation::to_matrix`].

use crate::matrix::Matrix;
use crate::vector::Vector;
use palu_core::{ensure_dims, Error, Real, Result};

/// A bijection on `{0, ..., n-1}` in position → original-row form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    /// The identity permutation of length `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Build from an explicit mapping, rejecting anything that is not a
    /// bijection on `0..map.len()`.
    pub fn try_from_vec(map: Vec<usize>) -> Result<Self> {
        let n = map.len();
        let mut seen = vec![false; n];
        for &m in &map {
            if m >= n {
                return Err(Error::InvalidArgument(format!(
                    "permutation entry {m} out of range [0, {n})"
                )));
            }
            if seen[m] {
                return Err(Error::InvalidArgument(format!(
                    "permutation entry {m} appears twice"
                )));
            }
            seen[m] = true;
        }
        Ok(Self { map })
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return `true` for the empty permutation.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The mapping as a slice: `as_slice()[i]` is the original row at
    /// position `i`.
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// Original row index now sitting at position `i`.
    pub fn original_row(&self, i: usize) -> usize {
        self.map[i]
    }

    /// Exchange the entries at positions `p` and `k`.
    pub fn swap(&mut self, p: usize, k: usize) {
        self.map.swap(p, k);
    }

    /// Return `true` if no row has moved.
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// The inverse permutation (original row → position).
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.map.len()];
        for (i, &m) in self.map.iter().enumerate() {
            inv[m] = i;
        }
        Self { map: inv }
    }

    /// Parity of the permutation: `1.0` if even, `-1.0` if odd.
    pub fn sign(&self) -> Real {
        let n = self.map.len();
        let mut visited = vec![false; n];
        let mut cycles = 0;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.map[i];
            }
        }
        if (n - cycles) % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Permute a right-hand side: `b'[i] = b[map[i]]`.
    pub fn apply(&self, b: &Vector) -> Result<Vector> {
        ensure_dims!(
            b.len() == self.len(),
            "vector of length {} cannot be permuted by a permutation of length {}",
            b.len(),
            self.len()
        );
        Ok(Vector::from_vec(self.map.iter().map(|&m| b[m]).collect()))
    }

    /// Permute the rows of `a`: row `i` of the result is row `map[i]` of `a`.
    pub fn apply_rows(&self, a: &Matrix) -> Result<Matrix> {
        ensure_dims!(
            a.rows() == self.len(),
            "{}x{} matrix cannot be row-permuted by a permutation of length {}",
            a.rows(),
            a.cols(),
            self.len()
        );
        let mut out = Matrix::zeros(a.rows(), a.cols());
        for (i, &m) in self.map.iter().enumerate() {
            for j in 0..a.cols() {
                out[(i, j)] = a[(m, j)];
            }
        }
        Ok(out)
    }

    /// Dense 0/1 matrix `P` with `P[i][map[i]] = 1`, so that `P * A` equals
    /// [`apply_rows`](Self::apply_rows)`(A)`.
    pub fn to_matrix(&self) -> Matrix {
        let n = self.map.len();
        let mut p = Matrix::zeros(n, n);
        for (i, &m) in self.map.iter().enumerate() {
            p[(i, m)] = 1.0;
        }
        p
    }
}

//! Partial-pivot selection and row interchanges.

use crate::matrix::Matrix;
use palu_core::{ensure_dims, Error, Result};

fn check_row(m: &Matrix, index: usize) -> Result<()> {
    if index >= m.rows() {
        return Err(Error::IndexOutOfRange {
            index,
            size: m.rows(),
        });
    }
    Ok(())
}

/// Index of the row holding the largest `|m[(i, col)]|` over the whole
/// column.
///
/// Ties go to the lowest row index. The scan does not skip rows above an
/// elimination step; use [`find_pivot_row_from`] for that.
///
/// ```
/// use palu_linalg::{find_pivot_row, Matrix};
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(find_pivot_row(&m, 0).unwrap(), 1);
/// ```
pub fn find_pivot_row(m: &Matrix, col: usize) -> Result<usize> {
    find_pivot_row_from(m, col, 0)
}

/// Like [`find_pivot_row`] but only considers rows `start..`.
pub fn find_pivot_row_from(m: &Matrix, col: usize, start: usize) -> Result<usize> {
    ensure_dims!(m.rows() > 0, "cannot select a pivot in an empty matrix");
    if col >= m.cols() {
        return Err(Error::IndexOutOfRange {
            index: col,
            size: m.cols(),
        });
    }
    check_row(m, start)?;

    let mut index = start;
    let mut cur_max = m[(start, col)].abs();
    for i in (start + 1)..m.rows() {
        let val = m[(i, col)].abs();
        // strict: the first maximum wins
        if val > cur_max {
            cur_max = val;
            index = i;
        }
    }
    Ok(index)
}

/// Exchange rows `u` and `v` of `m` in place. `u == v` is a no-op.
pub fn swap_rows_in_place(m: &mut Matrix, u: usize, v: usize) -> Result<()> {
    check_row(m, u)?;
    check_row(m, v)?;
    m.swap_rows_unchecked(u, v);
    Ok(())
}

/// Return a copy of `m` with rows `u` and `v` exchanged, leaving `m`
/// untouched.
pub fn swap_rows(m: &Matrix, u: usize, v: usize) -> Result<Matrix> {
    let mut out = m.clone();
    swap_rows_in_place(&mut out, u, v)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, -9.0, 0.0], [-4.0, 2.0, 0.0], [4.0, 9.0, 0.0]]).unwrap()
    }

    #[test]
    fn picks_largest_magnitude() {
        let m = sample();
        // |-4| and |4| tie; the lower index wins
        assert_eq!(find_pivot_row(&m, 0).unwrap(), 1);
        // |-9| and |9| tie as well
        assert_eq!(find_pivot_row(&m, 1).unwrap(), 0);
    }

    #[test]
    fn all_zero_column_returns_first_row() {
        assert_eq!(find_pivot_row(&sample(), 2).unwrap(), 0);
        assert_eq!(find_pivot_row_from(&sample(), 2, 1).unwrap(), 1);
    }

    #[test]
    fn scan_from_skips_rows_above_start() {
        let m = sample();
        assert_eq!(find_pivot_row_from(&m, 1, 1).unwrap(), 2);
    }

    #[test]
    fn pivot_index_errors() {
        let m = sample();
        assert_eq!(
            find_pivot_row(&m, 3),
            Err(Error::IndexOutOfRange { index: 3, size: 3 })
        );
        assert!(find_pivot_row_from(&m, 0, 3).is_err());
        assert!(find_pivot_row(&Matrix::zeros(0, 0), 0)
            .unwrap_err()
            .is_dimension());
    }

    #[test]
    fn copy_and_in_place_agree() {
        let m = sample();
        for u in 0..3 {
            for v in 0..3 {
                let copied = swap_rows(&m, u, v).unwrap();
                let mut in_place = m.clone();
                swap_rows_in_place(&mut in_place, u, v).unwrap();
                assert_eq!(copied, in_place, "u={u}, v={v}");
            }
        }
    }

    #[test]
    fn swap_leaves_other_rows_and_source() {
        let m = sample();
        let s = swap_rows(&m, 0, 2).unwrap();
        assert_eq!(s.row(0), m.row(2));
        assert_eq!(s.row(2), m.row(0));
        assert_eq!(s.row(1), m.row(1));
        assert_eq!(m, sample());
        assert_eq!(swap_rows(&m, 1, 1).unwrap(), m);
    }

    #[test]
    fn swap_out_of_range() {
        let mut m = sample();
        assert_eq!(
            swap_rows_in_place(&mut m, 0, 5),
            Err(Error::IndexOutOfRange { index: 5, size: 3 })
        );
        assert_eq!(m, sample());
    }
}

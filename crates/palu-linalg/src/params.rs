//! Tuning parameters for factorization and triangular solves.

use palu_core::{Error, Real, Result};

/// Parameters shared by [`factorize_with`](crate::factorize_with) and the
/// `*_with` triangular solvers.
///
/// A pivot or diagonal entry `d` is treated as zero when
/// `|d| <= pivot_tolerance`. The default tolerance of `0.0` therefore only
/// rejects exact zeros; tiny nonzero pivots are accepted and may give
/// inaccurate results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuParams {
    /// Magnitude at or below which a pivot counts as zero.
    pub pivot_tolerance: Real,
}

impl Default for LuParams {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
        }
    }
}

impl LuParams {
    /// Parameters with the given pivot tolerance.
    ///
    /// ```
    /// use palu_linalg::LuParams;
    /// assert!(LuParams::with_pivot_tolerance(1e-12).is_ok());
    /// assert!(LuParams::with_pivot_tolerance(-1.0).is_err());
    /// ```
    pub fn with_pivot_tolerance(pivot_tolerance: Real) -> Result<Self> {
        if pivot_tolerance.is_nan() || pivot_tolerance < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "pivot tolerance must be non-negative, got {pivot_tolerance}"
            )));
        }
        Ok(Self { pivot_tolerance })
    }

    /// Return `true` if `d` counts as a zero pivot.
    #[inline]
    pub fn is_zero_pivot(&self, d: Real) -> bool {
        d.abs() <= self.pivot_tolerance
    }
}

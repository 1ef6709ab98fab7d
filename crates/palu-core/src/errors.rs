//! Error types for palu.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below. Shape checks
//! go through [`ensure_dims!`](crate::ensure_dims) and zero-pivot failures
//! through [`singular!`](crate::singular).

use thiserror::Error;

/// The top-level error type used throughout palu.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A matrix is not square, its rows are ragged, or a vector/matrix
    /// length does not match the dimension it is paired with.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// A pivot or triangular diagonal entry is zero (or within the
    /// configured pivot tolerance).
    #[error("singular matrix: zero pivot at position {index}")]
    SingularMatrix {
        /// Elimination step or diagonal position of the offending entry.
        index: usize,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for [`Error::Dimension`].
    pub fn is_dimension(&self) -> bool {
        matches!(self, Error::Dimension(_))
    }

    /// Return `true` for [`Error::SingularMatrix`].
    pub fn is_singular(&self) -> bool {
        matches!(self, Error::SingularMatrix { .. })
    }
}

/// Shorthand `Result` type used throughout palu.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Dimension(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use palu_core::{ensure_dims, errors::Error};
/// fn same_len(a: &[f64], b: &[f64]) -> palu_core::errors::Result<()> {
///     ensure_dims!(a.len() == b.len(), "lengths {} and {} differ", a.len(), b.len());
///     Ok(())
/// }
/// assert!(same_len(&[1.0], &[2.0]).is_ok());
/// assert!(matches!(same_len(&[1.0], &[]), Err(Error::Dimension(_))));
/// ```
#[macro_export]
macro_rules! ensure_dims {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Dimension(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::SingularMatrix { index })` immediately.
///
/// # Example
/// ```
/// use palu_core::{singular, errors::Error};
/// fn reciprocal(x: f64) -> palu_core::errors::Result<f64> {
///     if x == 0.0 {
///         singular!(0);
///     }
///     Ok(1.0 / x)
/// }
/// assert_eq!(reciprocal(0.0), Err(Error::SingularMatrix { index: 0 }));
/// ```
#[macro_export]
macro_rules! singular {
    ($index:expr) => {
        return Err($crate::errors::Error::SingularMatrix { index: $index })
    };
}

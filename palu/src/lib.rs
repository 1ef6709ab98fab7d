//! # palu
//!
//! Dense LU factorization with partial pivoting (`P * A = L * U`),
//! forward/back substitution, and a linear solver for square systems.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on the
//! individual `palu-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use palu::prelude::*;
//!
//! let a = Matrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]])?;
//! let b = Vector::from_slice(&[10.0, 12.0]);
//! let x = solve(&a, &b)?;
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 2.0).abs() < 1e-12);
//! # Ok::<(), palu::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Scalar aliases and error definitions.
pub use palu_core as core;

/// Matrices, vectors, LU factorization and solvers.
pub use palu_linalg as linalg;

/// The most commonly used items.
pub mod prelude {
    pub use palu_core::{Error, Real, Result};
    pub use palu_linalg::{
        back_solve, factorize, factorize_with, forward_solve, solve, solve_with, LuParams,
        Matrix, Permutation, PivotedLu, Vector,
    };
}

//! # palu-linalg
//!
//! Dense `Matrix` / `Vector` newtypes over nalgebra, LU factorization with
//! partial pivoting (`P * A = L * U`), forward and back substitution, and a
//! linear solver built from them.
//!
//! Every call works on its own buffers: the working copy used during
//! elimination is private to one [`factorize`] call, so independent systems
//! can be solved from several threads without synchronization.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Pivoted LU factorization.
pub mod lu;

/// Dense matrix newtype.
pub mod matrix;

/// Factorization / solve parameters.
pub mod params;

/// Row permutations.
pub mod permutation;

/// Pivot selection and row swaps.
pub mod pivot;

/// Linear system solver.
pub mod solve;

/// Forward / back substitution.
pub mod triangular;

/// Dense vector newtype.
pub mod vector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lu::{factorize, factorize_with, PivotedLu};
pub use matrix::Matrix;
pub use params::LuParams;
pub use permutation::Permutation;
pub use pivot::{find_pivot_row, find_pivot_row_from, swap_rows, swap_rows_in_place};
pub use solve::{solve, solve_with};
pub use triangular::{back_solve, back_solve_with, forward_solve, forward_solve_with};
pub use vector::Vector;

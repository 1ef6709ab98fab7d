//! # palu-core
//!
//! Scalar aliases and error definitions for palu.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: the floating-point alias, the error enum, and the
//! `ensure_dims!` / `singular!` guard macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure_dims!` / `singular!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

//! Exact rational linear algebra for rank and nullspace decisions.
//!
//! Purpose
//! - Provide the small arithmetic kernel the rigidity analysis stands on:
//!   Gauss-Jordan reduction, rank, kernel bases, and collinearity tests over
//!   `BigRational` scalars in `nalgebra` containers.
//!
//! Why exact
//! - Rigid/flexible classification hinges on whether ranks and kernel entries
//!   are *exactly* zero. A floating-point epsilon can hide a degenerate
//!   (collinear or dependent) configuration or fabricate one, so every
//!   decision here runs over arbitrary-precision rationals.
//!
//! Code cross-refs: `crate::rigid::matrix` builds the matrices reduced here;
//! `crate::framework` stores node positions as `Vec<Rat>`.

mod matrix;
mod point;

pub use matrix::{nullspace, rank, rref_in_place};
pub use point::{is_collinear, rat, rat_vec};

/// Exact scalar used throughout the crate.
pub type Rat = num_rational::BigRational;

//! densemat: dense row-major matrices and a direct linear solver.
//!
//! This crate provides a small owned matrix container (`Matrix`) over `f32`
//! or `f64`, elementwise and matrix-product arithmetic through the standard
//! operator traits, and `solve`, a Gaussian-elimination solver with partial
//! pivoting for square systems.
//!
//! Fallible operations return `densemat::Result`; see [`error::MatrixError`]
//! for the failure taxonomy.
pub mod config;
pub mod error;
pub mod math;
pub mod solve;

pub use config::{DensematConfig, PrintOptions, SolveOptions};
pub use error::{ErrorKind, MatrixError, Result};
pub use math::{Matrix, Scalar};
pub use solve::{residual_norm, solve, solve_with};

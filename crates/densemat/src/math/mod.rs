//! Dense matrix types used throughout the crate.
//!
//! `Matrix` owns a single row-major buffer; `Scalar` restricts the element
//! type to the real floating-point types the solver supports.
pub mod matrix;
pub mod ops;
pub mod scalar;

pub use matrix::{DisplayWith, Matrix};
pub use scalar::Scalar;

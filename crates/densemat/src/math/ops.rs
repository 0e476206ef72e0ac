//! Arithmetic on [`Matrix`].
//!
//! Shape-checked operations return `Result`; the operator impls forward to the
//! named methods, so `&a + &b` yields `Result<Matrix<T>>` and is usually
//! followed by `?`. Scaling by a scalar cannot fail and returns the matrix
//! directly.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum. Shapes must match exactly.
    pub fn try_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.size() != rhs.size() {
            return Err(MatrixError::ShapeMismatch {
                op: "add",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let data = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice().iter())
            .map(|(a, b)| *a + *b)
            .collect();
        Matrix::from_shape_vec(self.size(), data)
    }

    /// `self + rhs * -1.0`.
    pub fn try_sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.try_add(&rhs.scale(-1.0))
    }

    /// Multiply every element by `alpha`.
    pub fn scale(&self, alpha: f64) -> Matrix<T> {
        let alpha = T::from_f64_lossy(alpha);
        self.mapv(|v| *v * alpha)
    }

    /// Matrix product; `self.ncols()` must equal `rhs.nrows()`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.ncols() != rhs.nrows() {
            return Err(MatrixError::ShapeMismatch {
                op: "multiply",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let (rows, inner, cols) = (self.nrows(), self.ncols(), rhs.ncols());
        let mut out = Matrix::zeros(rows, cols);
        for i in 0..rows {
            let lhs_row = self.row_slice(i);
            for j in 0..cols {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc += lhs_row[k] * rhs[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: Matrix<T>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: Matrix<T>) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<'a, 'b, T: Scalar> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl<'a, T: Scalar> Mul<f64> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, alpha: f64) -> Self::Output {
        self.scale(alpha)
    }
}

impl<T: Scalar> Mul<f64> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, alpha: f64) -> Self::Output {
        self.scale(alpha)
    }
}

impl<'a, T: Scalar> Neg for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

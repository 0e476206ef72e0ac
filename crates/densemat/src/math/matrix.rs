use std::fmt;
use std::ops::{Index, IndexMut};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::config::PrintOptions;
use crate::error::{MatrixError, Result};
use crate::math::Scalar;

/// Dense `rows x cols` matrix stored row-major in a single owned buffer.
///
/// The buffer always holds exactly `rows * cols` elements. Cloning makes an
/// independent deep copy.
#[derive(Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// An empty 0x0 matrix. Nothing is allocated.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Column vector (`len x 1`) taking ownership of `data`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrixError::EmptyInput);
        }
        let rows = data.len();
        Ok(Self {
            data,
            rows,
            cols: 1,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != checked_len(rows, cols)? {
            return Err(MatrixError::ShapeMismatch {
                op: "reshape",
                lhs: (rows, cols),
                rhs: (data.len(), 1),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                index: (row, col),
                bound: (self.rows, self.cols),
            });
        }
        Ok(self.offset(row, col))
    }

    /// Borrow row `row` as a slice of `cols` elements.
    pub fn data(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::OutOfRange {
                index: (row, 0),
                bound: (self.rows, self.cols),
            });
        }
        Ok(self.row_slice(row))
    }

    pub fn data_mut(&mut self, row: usize) -> Result<&mut [T]> {
        if row >= self.rows {
            return Err(MatrixError::OutOfRange {
                index: (row, 0),
                bound: (self.rows, self.cols),
            });
        }
        let start = self.offset(row, 0);
        let cols = self.cols;
        Ok(&mut self.data[start..start + cols])
    }

    /// Row view that panics if `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn set(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        let offset = self.check_index(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Column vector copied from `values`.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Self::from_vec(values.to_vec())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.check_index(row, col)?;
        Ok(self.data[offset])
    }
}

impl<T: Scalar> Matrix<T> {
    /// `rows x cols` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; use [`Matrix::try_zeros`]
    /// for shapes that come from user input.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        match Self::try_zeros(rows, cols) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![T::zero(); len],
            rows,
            cols,
        })
    }

    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zeros(n, n);
        for i in 0..n {
            eye[(i, i)] = T::one();
        }
        eye
    }

    /// Euclidean norm of all elements, ignoring shape.
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|v| {
                let v = v.into_f64();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Overwrite every element with an independent draw from `U[0, 1)`.
    pub fn fill_uniform(&mut self) {
        self.fill_uniform_with(&mut rand::thread_rng());
    }

    pub fn fill_uniform_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let dist = Uniform::new(T::zero(), T::one());
        for v in self.data.iter_mut() {
            *v = dist.sample(rng);
        }
    }

    /// Equal shape and every element within `tol` of its counterpart.
    pub fn approx_eq(&self, other: &Matrix<T>, tol: T) -> bool {
        self.size() == other.size()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (*a - *b).abs() <= tol)
    }

    /// Render with a custom field width and precision.
    pub fn display_with(&self, options: PrintOptions) -> DisplayWith<'_, T> {
        DisplayWith {
            matrix: self,
            options,
        }
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Copy-assignment: reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

/// Exact comparison: same object, or same shape with equal elements.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self, PrintOptions::default())
    }
}

/// Display adapter returned by [`Matrix::display_with`].
pub struct DisplayWith<'a, T> {
    matrix: &'a Matrix<T>,
    options: PrintOptions,
}

impl<T: Scalar> fmt::Display for DisplayWith<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.matrix, self.options)
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(MatrixError::CapacityOverflow { rows, cols })
}

fn write_rows<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    matrix: &Matrix<T>,
    options: PrintOptions,
) -> fmt::Result {
    let PrintOptions { width, precision } = options;
    for row in 0..matrix.rows {
        for value in matrix.row_slice(row) {
            write!(f, "{:>width$.precision$}", value, width = width, precision = precision)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

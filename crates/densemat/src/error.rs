use std::error::Error;
use std::fmt;

/// Coarse classification of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad constructor input or incompatible operand shapes.
    InvalidArgument,
    /// Index outside the matrix.
    Range,
    /// The solver met a zero (or below-tolerance) pivot.
    Singular,
}

/// Errors raised by matrix construction, access, arithmetic and solving.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A vector or slice constructor was given no values.
    EmptyInput,
    /// Operand shapes are incompatible for `op`.
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// `rows * cols` does not fit in `usize`.
    CapacityOverflow { rows: usize, cols: usize },
    /// The solver requires a square coefficient matrix.
    NotSquare { rows: usize, cols: usize },
    /// `index` is not below `bound`.
    OutOfRange {
        index: (usize, usize),
        bound: (usize, usize),
    },
    /// Pivot of elimination column `column` was zero.
    SingularMatrix { column: usize },
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::EmptyInput
            | MatrixError::ShapeMismatch { .. }
            | MatrixError::CapacityOverflow { .. }
            | MatrixError::NotSquare { .. } => ErrorKind::InvalidArgument,
            MatrixError::OutOfRange { .. } => ErrorKind::Range,
            MatrixError::SingularMatrix { .. } => ErrorKind::Singular,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::EmptyInput => write!(f, "invalid argument: input is empty"),
            MatrixError::ShapeMismatch { op, lhs, rhs } => write!(
                f,
                "invalid argument: cannot {} matrices of shape ({}, {}) and ({}, {})",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::CapacityOverflow { rows, cols } => write!(
                f,
                "invalid argument: shape ({}, {}) overflows the addressable length",
                rows, cols
            ),
            MatrixError::NotSquare { rows, cols } => write!(
                f,
                "invalid argument: coefficient matrix must be square, got ({}, {})",
                rows, cols
            ),
            MatrixError::OutOfRange { index, bound } => write!(
                f,
                "range error: index ({}, {}) out of range for shape ({}, {})",
                index.0, index.1, bound.0, bound.1
            ),
            MatrixError::SingularMatrix { column } => {
                write!(f, "singular matrix: zero pivot in column {}", column)
            }
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;

//! Direct solver for square linear systems.
//!
//! `solve` runs Gaussian elimination with partial pivoting on the augmented
//! system `[A | b]` followed by back-substitution.
//!
//! At elimination step `i` the row with the largest magnitude in column `i`
//! (among rows `i..n`) is swapped into place; ties keep the lowest row
//! index. Entries below the pivot are set to exactly zero instead of being
//! computed, so no rounding residue is left in the lower triangle.
//!
//! A pivot counts as zero when its magnitude is at or below
//! `max(singular_tolerance, n * eps * max|A|)`. The relative floor catches
//! matrices that are singular in exact arithmetic but leave a rounding
//! residue of order `eps` in the last pivot.

use log::{debug, trace, warn};

use crate::config::SolveOptions;
use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Scalar};

/// Solve `a * x = b` for the column vector `x`, rejecting singular systems.
///
/// # Arguments
///
/// * `a` - Square `n x n` coefficient matrix.
/// * `b` - Right-hand side, an `n x 1` column.
///
/// # Returns
///
/// The `n x 1` solution, or an error if the shapes are incompatible or a
/// pivot is numerically zero.
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    solve_with(a, b, &SolveOptions::default())
}

/// [`solve`] with an explicit pivot policy.
///
/// With `check_singular` disabled a zero pivot is divided through and the
/// result contains non-finite values.
pub fn solve_with<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    options: &SolveOptions,
) -> Result<Matrix<T>> {
    if a.nrows() != b.nrows() {
        return Err(MatrixError::ShapeMismatch {
            op: "solve",
            lhs: a.size(),
            rhs: b.size(),
        });
    }
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if b.ncols() != 1 {
        return Err(MatrixError::ShapeMismatch {
            op: "solve",
            lhs: a.size(),
            rhs: b.size(),
        });
    }

    let n = a.nrows();
    debug!(
        "Solving {}x{} system (check_singular={}, tolerance={:e})",
        n, n, options.check_singular, options.singular_tolerance
    );

    let mut sys = augment(a, b);
    let threshold = pivot_threshold(a, options.singular_tolerance);

    for i in 0..n {
        let (max_row, max_elem) = pivot_row(&sys, i, n);
        trace!("column {}: pivot row {} (|pivot| = {})", i, max_row, max_elem);

        if max_elem <= threshold || max_elem.is_nan() {
            if options.check_singular {
                return Err(MatrixError::SingularMatrix { column: i });
            }
            warn!("zero pivot in column {}; solution will not be finite", i);
        }

        if max_row != i {
            for k in i..=n {
                let tmp = sys[(max_row, k)];
                sys[(max_row, k)] = sys[(i, k)];
                sys[(i, k)] = tmp;
            }
        }

        for j in (i + 1)..n {
            let coef = -sys[(j, i)] / sys[(i, i)];
            sys[(j, i)] = T::zero();
            for k in (i + 1)..=n {
                let delta = coef * sys[(i, k)];
                sys[(j, k)] += delta;
            }
        }
    }

    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        x[i] = sys[(i, n)] / sys[(i, i)];
        for j in 0..i {
            let delta = sys[(j, i)] * x[i];
            sys[(j, n)] -= delta;
        }
    }

    Matrix::from_shape_vec((n, 1), x)
}

/// `‖a * x - b‖₂`, the residual of a candidate solution.
pub fn residual_norm<T: Scalar>(a: &Matrix<T>, x: &Matrix<T>, b: &Matrix<T>) -> Result<f64> {
    let ax = a.matmul(x)?;
    Ok(ax.try_sub(b)?.norm())
}

/// Row in `col..n` holding the largest `|sys[(row, col)]|`, and that magnitude.
/// Only a strictly larger value displaces the current candidate.
fn pivot_row<T: Scalar>(sys: &Matrix<T>, col: usize, n: usize) -> (usize, T) {
    let mut max_elem = sys[(col, col)].abs();
    let mut max_row = col;
    for j in (col + 1)..n {
        let candidate = sys[(j, col)].abs();
        if candidate > max_elem {
            max_elem = candidate;
            max_row = j;
        }
    }
    (max_row, max_elem)
}

/// `max(tolerance, n * eps * max|a|)`.
fn pivot_threshold<T: Scalar>(a: &Matrix<T>, tolerance: f64) -> T {
    let scale = a
        .as_slice()
        .iter()
        .fold(T::zero(), |acc, v| acc.max(v.abs()));
    let floor = T::from_f64_lossy(a.nrows() as f64) * T::epsilon() * scale;
    floor.max(T::from_f64_lossy(tolerance))
}

/// `[a | b]` as an `n x (n + 1)` working matrix.
fn augment<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let n = a.nrows();
    let mut sys = Matrix::zeros(n, n + 1);
    for i in 0..n {
        for (j, value) in a.row_slice(i).iter().enumerate() {
            sys[(i, j)] = *value;
        }
        sys[(i, n)] = b[(i, 0)];
    }
    sys
}

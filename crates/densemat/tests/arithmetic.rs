//! Integration tests for elementwise arithmetic and matrix products.

use densemat::{ErrorKind, Matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn column(values: &[f64]) -> Matrix<f64> {
    Matrix::from_slice(values).unwrap()
}

fn random(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut m = Matrix::zeros(rows, cols);
    m.fill_uniform_with(&mut StdRng::seed_from_u64(seed));
    m
}

// ---------------------------------------------------------------------------
// Addition / subtraction / scaling
// ---------------------------------------------------------------------------

#[test]
fn constant_columns_scenario() {
    let a = column(&[3.0; 5]);
    let b = column(&[2.0; 5]);
    let c = column(&[5.0; 5]);
    let d = column(&[1.0; 5]);

    assert_eq!((&a + &b).unwrap(), c);
    assert_eq!((&a - &b).unwrap(), d);
    assert_eq!(&c * 0.2, d);
    assert_eq!((&a + &b).unwrap() * 0.2, (&a - &b).unwrap());
}

#[test]
fn add_then_sub_restores_lhs() {
    let a = Matrix::from_shape_vec((2, 3), vec![1.0, -2.0, 3.5, 0.0, 8.0, -0.5]).unwrap();
    let b = Matrix::from_shape_vec((2, 3), vec![4.0, 4.0, -1.5, 2.0, 0.25, 1.0]).unwrap();
    let sum = (&a + &b).unwrap();
    assert_eq!((&sum - &b).unwrap(), a);
}

#[test]
fn owned_operands_forward_to_references() {
    let a = column(&[1.0, 2.0]);
    let b = column(&[3.0, 4.0]);
    let sum = (a.clone() + b.clone()).unwrap();
    assert_eq!(sum, column(&[4.0, 6.0]));
    assert_eq!((sum - b).unwrap(), a);
}

#[test]
fn scale_identity_and_zero() {
    let a = random(3, 4, 1);
    assert_eq!(&a * 1.0, a);
    assert_eq!(&a * 0.0, Matrix::zeros(3, 4));
}

#[test]
fn shape_mismatch_is_invalid_argument() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let cases: [Matrix<f64>; 3] = [Matrix::zeros(3, 2), Matrix::zeros(2, 2), Matrix::zeros(1, 3)];
    for b in cases.iter() {
        assert_eq!((&a + b).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!((&a - b).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }
}

// ---------------------------------------------------------------------------
// Matrix product
// ---------------------------------------------------------------------------

#[test]
fn identity_is_neutral_for_products() {
    let mut e: Matrix<f64> = Matrix::zeros(3, 3);
    e.set(1.0, 0, 0).unwrap();
    e.set(1.0, 1, 1).unwrap();
    e.set(1.0, 2, 2).unwrap();
    let f = random(3, 3, 2);

    assert_eq!((&e * &f).unwrap(), f);
    assert_eq!((&f * &e).unwrap(), f);
}

#[test]
fn product_shape_is_outer_dimensions() {
    let a = random(2, 5, 3);
    let b = random(5, 4, 4);
    let c = (&a * &b).unwrap();
    assert_eq!(c.size(), (2, 4));

    let expected: f64 = (0..5).map(|k| a[(1, k)] * b[(k, 3)]).sum();
    assert!((c[(1, 3)] - expected).abs() < 1e-12);
}

#[test]
fn product_known_values() {
    let a = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::from_shape_vec((2, 2), vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    let c = (a * b).unwrap();
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn product_inner_mismatch_is_invalid_argument() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let cases: [Matrix<f64>; 3] = [Matrix::zeros(2, 3), Matrix::zeros(4, 1), Matrix::zeros(0, 0)];
    for b in cases.iter() {
        assert_eq!((&a * b).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn mismatch_error_reports_both_shapes() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let b: Matrix<f64> = Matrix::zeros(4, 1);
    let msg = a.matmul(&b).unwrap_err().to_string();
    assert!(msg.contains("(2, 3)"), "{}", msg);
    assert!(msg.contains("(4, 1)"), "{}", msg);
}

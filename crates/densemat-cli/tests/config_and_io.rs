//! Integration tests for config loading and the command runners.

use std::io::Write;

use densemat::{DensematConfig, ErrorKind, MatrixError};
use densemat_cli::commands::{load_config, run_multiply, run_random, run_solve};
use densemat_cli::io::{read_matrix, write_matrix_file};

// ---------------------------------------------------------------------------
// load_config
// ---------------------------------------------------------------------------

#[test]
fn load_config_reads_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, r#"{{ "solve": {{ "check_singular": false }} }}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert!(!config.solve.check_singular);
    assert_eq!(config.print, DensematConfig::default().print);
}

#[test]
fn load_config_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn load_config_missing_file_errors() {
    assert!(load_config("/nonexistent/config.json").is_err());
}

// ---------------------------------------------------------------------------
// Runners
// ---------------------------------------------------------------------------

#[test]
fn run_solve_reports_residual() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    std::fs::write(&a, "4,1,0\n1,4,1\n0,1,4\n").unwrap();
    std::fs::write(&b, "5\n6\n5\n").unwrap();

    let result = run_solve(&a, &b, &DensematConfig::default()).unwrap();
    assert_eq!(result.x.size(), (3, 1));
    assert!(result.residual < 1e-12);
}

#[test]
fn run_solve_surfaces_matrix_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    std::fs::write(&a, "1,2\n3,4\n5,6\n").unwrap();
    std::fs::write(&b, "1\n2\n3\n").unwrap();

    let err = run_solve(&a, &b, &DensematConfig::default()).unwrap_err();
    let matrix_err = err.downcast_ref::<MatrixError>().unwrap();
    assert_eq!(matrix_err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn run_multiply_checks_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    std::fs::write(&a, "1,2\n").unwrap();
    std::fs::write(&b, "3\n4\n").unwrap();
    let product = run_multiply(&a, &b).unwrap();
    assert_eq!(product.as_slice(), &[11.0]);
    assert!(run_multiply(&a, &a).is_err());
}

#[test]
fn run_random_respects_shape_and_seed() {
    let m = run_random(5, 2, Some(3)).unwrap();
    assert_eq!(m.size(), (5, 2));
    assert_eq!(m, run_random(5, 2, Some(3)).unwrap());
    assert!(m.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn run_random_rejects_overflowing_shape() {
    let err = run_random(usize::MAX, 2, Some(1)).unwrap_err();
    let matrix_err = err.downcast_ref::<MatrixError>().unwrap();
    assert_eq!(matrix_err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn matrix_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.tsv");
    let m = run_random(3, 3, Some(8)).unwrap();
    write_matrix_file(&path, &m).unwrap();
    assert_eq!(read_matrix(&path).unwrap(), m);
}

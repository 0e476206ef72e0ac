//! Command runners for the `densemat` binary.
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use densemat::{residual_norm, solve_with, DensematConfig, Matrix};

use crate::io::read_matrix;

/// Load a configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DensematConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DensematConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Solution of a loaded system together with its residual.
#[derive(Debug)]
pub struct SolveResult {
    pub x: Matrix<f64>,
    pub residual: f64,
}

/// Solve the system stored in `a_path` / `b_path`.
pub fn run_solve<P: AsRef<Path>>(a_path: P, b_path: P, config: &DensematConfig) -> Result<SolveResult> {
    let a = read_matrix(&a_path)?;
    let b = read_matrix(&b_path)?;
    log::info!(
        "[densemat::solve] A is {}x{}, b is {}x{}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols()
    );

    let x = solve_with(&a, &b, &config.solve).context("Failed to solve system")?;
    let residual = residual_norm(&a, &x, &b)?;
    log::info!("[densemat::solve] residual = {:e}", residual);
    Ok(SolveResult { x, residual })
}

/// Product of the matrices stored in `lhs_path` and `rhs_path`.
pub fn run_multiply<P: AsRef<Path>>(lhs_path: P, rhs_path: P) -> Result<Matrix<f64>> {
    let lhs = read_matrix(&lhs_path)?;
    let rhs = read_matrix(&rhs_path)?;
    let product = lhs.matmul(&rhs).context("Failed to multiply matrices")?;
    Ok(product)
}

/// A `rows x cols` matrix of uniform draws; seeded when `seed` is given.
pub fn run_random(rows: usize, cols: usize, seed: Option<u64>) -> Result<Matrix<f64>> {
    let mut m = Matrix::try_zeros(rows, cols).context("Failed to allocate random matrix")?;
    match seed {
        Some(seed) => m.fill_uniform_with(&mut StdRng::seed_from_u64(seed)),
        None => m.fill_uniform(),
    }
    Ok(m)
}

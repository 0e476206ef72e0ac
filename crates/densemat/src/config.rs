use serde::{Deserialize, Serialize};

/// Central configuration for printing and solving.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DensematConfig {
    pub print: PrintOptions,
    pub solve: SolveOptions,
}

/// Layout of the diagnostic text rendering of a matrix.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    /// Minimum field width; values are right-justified.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl PrintOptions {
    pub fn new(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            width: 8,
            precision: 3,
        }
    }
}

/// Pivot policy for [`crate::solve_with`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SolveOptions {
    /// Report a singular system instead of dividing by a zero pivot.
    pub check_singular: bool,
    /// Pivots with magnitude at or below this value count as zero. The solver
    /// never uses less than `n * eps * max|A|`.
    pub singular_tolerance: f64,
}

impl SolveOptions {
    pub fn new(check_singular: bool, singular_tolerance: f64) -> Self {
        Self {
            check_singular,
            singular_tolerance,
        }
    }

    /// Skip the pivot check; zero pivots propagate as non-finite values.
    pub fn unchecked() -> Self {
        Self {
            check_singular: false,
            ..Self::default()
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            check_singular: true,
            singular_tolerance: 0.0,
        }
    }
}

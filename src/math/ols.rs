//! Least squares solver.
//!
//! In this project we repeatedly solve small polynomial regression problems of
//! the form:
//!
//! ```text
//! minimize Σ (y_i - v_i^T c)^2
//! ```
//!
//! where `v_i` is a Vandermonde row. One solve per swept degree.
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly even when the
//!   design matrix is tall (more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Vandermonde columns become nearly collinear at high degrees, so we try
//!   progressively looser tolerances before giving up.

use nalgebra::{DMatrix, DVector};

use crate::error::AppError;

/// Output of a successful least-squares solve.
#[derive(Debug, Clone)]
pub struct LsSolution {
    /// Solution vector, in the column order of the design matrix.
    pub coefficients: Vec<f64>,
    /// Effective rank of the design matrix at the accepted tolerance.
    ///
    /// A rank below the column count means the residual is not meaningful:
    /// the system admits an exact (non-unique) solution.
    pub rank: usize,
}

/// Solve a least squares problem using SVD.
///
/// Fails with a `NumericalInstability` error if the system is too
/// ill-conditioned to solve robustly.
pub fn solve_least_squares(a: &DMatrix<f64>, y: &DVector<f64>) -> Result<LsSolution, AppError> {
    let svd = a.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(solution) = svd.solve(y, tol) {
            if solution.iter().all(|v| v.is_finite()) {
                return Ok(LsSolution {
                    coefficients: solution.iter().copied().collect(),
                    rank: svd.rank(tol),
                });
            }
        }
    }

    Err(AppError::numerical(
        "least-squares solve failed: design matrix too ill-conditioned",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let sol = solve_least_squares(&a, &y).unwrap();
        assert_eq!(sol.rank, 2);
        assert!((sol.coefficients[0] - 2.0).abs() < 1e-10);
        assert!((sol.coefficients[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn rank_deficient_system_reports_reduced_rank() {
        // Two identical columns: rank 1 out of 2.
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);

        let sol = solve_least_squares(&a, &y).unwrap();
        assert_eq!(sol.rank, 1);
        assert!(sol.coefficients.iter().all(|v| v.is_finite()));
    }
}

//! Polynomial primitives.
//!
//! The fitter relies on two operations:
//! - build the Vandermonde design matrix for a given degree (for OLS)
//! - evaluate a fitted polynomial at a point (for residuals/plots)
//!
//! Coefficients are ordered highest power first throughout the crate, so
//! `[a, b, c]` means `a*x^2 + b*x + c`.

use nalgebra::DMatrix;

/// Evaluate a polynomial at `x` via Horner's scheme.
///
/// An empty coefficient slice evaluates to `0.0`.
pub fn eval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Build the `n x (degree + 1)` Vandermonde matrix for the given x values.
///
/// Column `j` holds `x^(degree - j)`, matching the coefficient order above:
/// the highest power is the leftmost column and the constant term the last.
pub fn vandermonde(xs: &[f64], degree: usize) -> DMatrix<f64> {
    DMatrix::from_fn(xs.len(), degree + 1, |i, j| {
        xs[i].powi((degree - j) as i32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_horner_matches_expanded_form() {
        // 2x^2 - 3x + 1
        let coeffs = [2.0, -3.0, 1.0];
        assert_eq!(eval(&coeffs, 0.0), 1.0);
        assert_eq!(eval(&coeffs, 1.0), 0.0);
        assert_eq!(eval(&coeffs, 3.0), 10.0);
    }

    #[test]
    fn eval_empty_is_zero() {
        assert_eq!(eval(&[], 5.0), 0.0);
    }

    #[test]
    fn vandermonde_orders_highest_power_first() {
        let m = vandermonde(&[2.0, 3.0], 2);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(0, 0)], 4.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(0, 2)], 1.0);
        assert_eq!(m[(1, 0)], 9.0);
    }
}

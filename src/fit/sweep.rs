//! Degree-sweep polynomial fitting and best-fit selection.
//!
//! Given a sample set and a half-open degree range `[min_degree, max_degree)`,
//! we solve, for each degree:
//! - an ordinary least-squares polynomial regression (Vandermonde + SVD)
//! - the resulting residual sum of squares
//!
//! and select the best result by the policy below. The range is half-open:
//! `max_degree` itself is never evaluated.
//!
//! Selection policy, evaluated in degree order, first match wins:
//! 1. the first result becomes `best`
//! 2. a strictly lower squared error replaces `best` (ties do not replace)
//! 3. a second zero-error result is an overfit signal: reported once per
//!    sweep, and `best` stays pinned to the lowest zero-error degree
//!
//! Degrees are independent, so the solves run in parallel; selection then
//! consumes the results sequentially in ascending-degree order, which keeps
//! the policy deterministic regardless of execution order.

use nalgebra::DVector;
use rayon::prelude::*;

use crate::domain::{FitReport, FitResult, SampleSet, SkippedDegree};
use crate::error::AppError;
use crate::fit::observer::SweepObserver;
use crate::math::{eval, solve_least_squares, vandermonde};

/// Relative noise floor below which a residual sum of squares is treated as
/// an exact fit. Keeps zero-error comparisons in the selection policy exact
/// even when the solver leaves ~1e-28 of float dust on noise-free data.
const EXACT_FIT_RSS_REL: f64 = 1e-12;

/// Fit polynomials of every degree in `[min_degree, max_degree)` and select
/// the best one.
///
/// Fails with an `InvalidRange` error when `min_degree < 1` and with an
/// `UnderdeterminedFit` error when the topmost swept degree needs more
/// samples than are available. An empty range (`max_degree <= min_degree`)
/// is not an error here: it yields an empty report with `best = None`, which
/// callers must treat as a hard stop.
pub fn sweep_degrees(
    samples: &SampleSet,
    min_degree: usize,
    max_degree: usize,
    observer: &mut dyn SweepObserver,
) -> Result<FitReport, AppError> {
    if min_degree < 1 {
        return Err(AppError::invalid_range(format!(
            "min_degree must be >= 1, got {min_degree}"
        )));
    }
    if max_degree <= min_degree {
        return Ok(FitReport::default());
    }

    let n = samples.len();
    // The topmost swept degree is max_degree - 1 and needs max_degree points.
    if n < max_degree {
        return Err(AppError::underdetermined(format!(
            "degree sweep up to {} requires at least {} samples, got {n}",
            max_degree - 1,
            max_degree
        )));
    }

    let noise_floor = rss_noise_floor(samples.ys());

    // Evaluate each degree independently (parallel); `collect` preserves the
    // ascending-degree order for the sequential selection pass below.
    let outcomes: Vec<(usize, Result<FitResult, AppError>)> = (min_degree..max_degree)
        .into_par_iter()
        .map(|degree| (degree, fit_degree(samples, degree, noise_floor)))
        .collect();

    let mut report = FitReport::default();
    for (degree, outcome) in outcomes {
        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                let reason = err.to_string();
                observer.degree_skipped(degree, &reason);
                report.skipped.push(SkippedDegree { degree, reason });
                continue;
            }
        };

        observer.degree_fitted(degree, result.squared_error);

        let current = result.squared_error;
        match report.best.as_ref().map(|b| b.squared_error) {
            None => report.best = Some(result.clone()),
            Some(best) if best > current => report.best = Some(result.clone()),
            Some(best) if best == 0.0 && current == 0.0 => {
                if !report.overfit_suspected {
                    observer.overfit_suspected(degree);
                    report.overfit_suspected = true;
                }
            }
            Some(_) => {}
        }

        report.all_results.push(result);
    }

    Ok(report)
}

/// Solve the degree-`d` regression and compute its squared error.
fn fit_degree(samples: &SampleSet, degree: usize, noise_floor: f64) -> Result<FitResult, AppError> {
    let design = vandermonde(samples.xs(), degree);
    let y = DVector::from_column_slice(samples.ys());

    let solution = solve_least_squares(&design, &y)?;

    let p = degree + 1;
    let squared_error = if samples.len() == p || solution.rank < p {
        // Exactly determined or rank-deficient: no residual vector exists.
        0.0
    } else {
        let rss = residual_sum_of_squares(samples, &solution.coefficients);
        if rss <= noise_floor { 0.0 } else { rss }
    };

    Ok(FitResult {
        coefficients: solution.coefficients,
        squared_error,
    })
}

fn residual_sum_of_squares(samples: &SampleSet, coefficients: &[f64]) -> f64 {
    samples
        .iter()
        .map(|(x, y)| {
            let r = y - eval(coefficients, x);
            r * r
        })
        .sum()
}

fn rss_noise_floor(ys: &[f64]) -> f64 {
    let y_sq_sum: f64 = ys.iter().map(|y| y * y).sum();
    EXACT_FIT_RSS_REL * y_sq_sum.max(1.0)
}

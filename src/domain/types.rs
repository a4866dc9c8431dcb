//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default values if not explicitly provided.
pub mod defaults {
    pub const X_FROM: f64 = -100.0;
    pub const X_TO: f64 = 100.0;
    pub const X_STEP: f64 = 0.05;
    pub const MIN_DEGREE: usize = 1;
    pub const MAX_DEGREE: usize = 100;

    pub const SYNTH_COUNT: usize = 200;
    pub const SYNTH_NOISE: f64 = 0.0;
    pub const SYNTH_SEED: u64 = 42;

    pub const PLOT_WIDTH: usize = 100;
    pub const PLOT_HEIGHT: usize = 25;
}

/// An immutable, validated set of (x, y) sample points.
///
/// Invariant: the x and y sequences are non-empty and of equal length.
/// The constructor is the only way to build one, so everything downstream
/// (fitter, reporter, plots) can rely on the invariant without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSet {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, AppError> {
        if xs.len() != ys.len() {
            return Err(AppError::input(format!(
                "x and y vectors should be of same shape, got {} and {} (x and y) instead",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(AppError::input("Sample set is empty."));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(AppError::input("Sample set contains non-finite values."));
        }
        Ok(Self { xs, ys })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// (min, max) of the x values.
    pub fn x_extent(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in &self.xs {
            min = min.min(x);
            max = max.max(x);
        }
        (min, max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Least-squares fit of a single polynomial degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Polynomial coefficients, highest-degree term first (length = degree + 1).
    pub coefficients: Vec<f64>,
    /// Residual sum of squares; `0.0` when the solve left no residual vector
    /// (exactly determined or rank-deficient systems).
    pub squared_error: f64,
}

impl FitResult {
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// A degree whose solve failed and was skipped rather than aborting the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDegree {
    pub degree: usize,
    pub reason: String,
}

/// Aggregate output of a degree sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitReport {
    /// Best fit by the selection policy; `None` when the sweep was empty.
    pub best: Option<FitResult>,
    /// All fits, in ascending-degree order.
    pub all_results: Vec<FitResult>,
    /// Degrees skipped due to numerical failures, with reasons.
    pub skipped: Vec<SkippedDegree>,
    /// Whether multiple zero-error fits were observed during the sweep.
    pub overfit_suspected: bool,
}

impl FitReport {
    pub fn is_empty(&self) -> bool {
        self.all_results.is_empty()
    }
}

/// Where sample points come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
    /// Query the remote measurement endpoint on a half-open x grid.
    Remote { x_from: f64, x_to: f64, x_step: f64 },
    /// Parse x/y vectors from a local structured file (JSON or YAML).
    File { path: PathBuf },
    /// Generate seeded synthetic samples (offline runs and demos).
    Synthetic(SynthSpec),
}

/// Synthetic sample generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthSpec {
    /// Degree of the randomly drawn ground-truth polynomial.
    pub degree: usize,
    /// Number of sample points.
    pub count: usize,
    /// Standard deviation of additive Gaussian noise (0 = exact samples).
    pub noise_sigma: f64,
    /// RNG seed; the same seed always produces the same sample set.
    pub seed: u64,
}

/// Plot output switches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    /// Render the terminal plot.
    pub show: bool,
    /// Write an SVG image to this path.
    pub image: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub source: SourceSpec,

    /// Lowest degree evaluated (inclusive).
    pub min_degree: usize,
    /// Upper bound of the sweep (exclusive: this degree is never evaluated).
    pub max_degree: usize,

    /// Report destination; `None` means stdout.
    pub output: Option<PathBuf>,
    /// Pretty (indented, sorted keys) vs compact JSON.
    pub pretty: bool,

    pub plot: PlotOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn sample_set_rejects_length_mismatch() {
        let err = SampleSet::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![1.0, 2.0, 3.0, 4.0])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn sample_set_rejects_empty() {
        let err = SampleSet::new(vec![], vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn sample_set_rejects_non_finite() {
        let err = SampleSet::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn x_extent_spans_unordered_data() {
        let s = SampleSet::new(vec![3.0, -1.0, 2.0], vec![0.0, 0.0, 0.0]).unwrap();
        assert_eq!(s.x_extent(), (-1.0, 3.0));
    }

    #[test]
    fn fit_result_degree_from_coefficients() {
        let fit = FitResult {
            coefficients: vec![1.0, 0.0, -2.0],
            squared_error: 0.0,
        };
        assert_eq!(fit.degree(), 2);
    }
}

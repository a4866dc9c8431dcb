//! Rendering of sample points plus fitted curve.
//!
//! Two backends share the same resampled curve:
//! - `ascii`: deterministic terminal plot
//! - `svg`: Plotters-based image export

pub mod ascii;
pub mod svg;

use crate::domain::{PlotOptions, SampleSet};
use crate::error::AppError;

/// Number of points the fitted curve is resampled at.
const CURVE_SAMPLES: usize = 50;

/// Render the fit according to `opts`. No-op when neither the terminal plot
/// nor an image file is requested.
pub fn render(
    samples: &SampleSet,
    coefficients: &[f64],
    opts: &PlotOptions,
) -> Result<(), AppError> {
    if !opts.show && opts.image.is_none() {
        return Ok(());
    }

    if opts.show {
        println!(
            "{}",
            ascii::render_ascii_plot(samples, coefficients, opts.width, opts.height)
        );
    }

    if let Some(path) = &opts.image {
        svg::write_plot_svg(path, samples, coefficients)?;
        log::info!("Plot image written to '{}'", path.display());
    }

    Ok(())
}

/// Evaluate the fitted polynomial on an even grid spanning `[x_min, x_max]`.
pub fn sample_curve(coefficients: &[f64], x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        out.push((x, crate::math::eval(coefficients, x)));
    }
    out
}

/// Curve over the sample set's own x extent.
fn fitted_curve(samples: &SampleSet, coefficients: &[f64]) -> Vec<(f64, f64)> {
    let (x_min, x_max) = samples.x_extent();
    sample_curve(coefficients, x_min, x_max, CURVE_SAMPLES)
}

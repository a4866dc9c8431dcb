//! SVG image export of the fitted curve.
//!
//! We render with Plotters' SVG backend only: it needs no system font or
//! image libraries and its output is deterministic, which keeps the crate
//! portable and the images diffable.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::SampleSet;
use crate::error::AppError;

const IMAGE_SIZE: (u32, u32) = (800, 600);

/// Write sample points plus fitted curve to an SVG file.
pub fn write_plot_svg(
    path: &Path,
    samples: &SampleSet,
    coefficients: &[f64],
) -> Result<(), AppError> {
    draw(path, samples, coefficients)
        .map_err(|e| AppError::io(format!("Failed to render plot '{}': {e}", path.display())))
}

fn draw(
    path: &Path,
    samples: &SampleSet,
    coefficients: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let curve = super::fitted_curve(samples, coefficients);

    let (x_min, x_max) = expand(samples.x_extent());
    let (y_min, y_max) = expand(value_range(samples, &curve));

    let root = SVGBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fitted polynomial", ("sans-serif", 24))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 35)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .x_labels(8)
        .y_labels(8)
        .draw()?;

    chart.draw_series(LineSeries::new(curve.iter().copied(), &BLUE))?;
    chart.draw_series(
        samples
            .iter()
            .map(|(x, y)| Circle::new((x, y), 3, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn value_range(samples: &SampleSet, curve: &[(f64, f64)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &y in samples.ys() {
        min = min.min(y);
        max = max.max(y);
    }
    for &(_, y) in curve {
        if y.is_finite() {
            min = min.min(y);
            max = max.max(y);
        }
    }
    (min, max)
}

/// Pad a range by 5% so points don't sit on the plot border; widen
/// degenerate ranges so Plotters always gets a non-empty axis.
fn expand((min, max): (f64, f64)) -> (f64, f64) {
    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    if max <= min {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_an_svg_file() {
        let samples =
            SampleSet::new(vec![-1.0, 0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0, 4.0]).unwrap();

        let mut path = std::env::temp_dir();
        path.push(format!("poly_sweep_plot_{}.svg", std::process::id()));

        write_plot_svg(&path, &samples, &[1.0, 0.0, 0.0]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(content.contains("<svg"));
    }

    #[test]
    fn expand_pads_and_fixes_degenerate_ranges() {
        assert_eq!(expand((0.0, 10.0)), (-0.5, 10.5));
        assert_eq!(expand((3.0, 3.0)), (2.5, 3.5));
    }
}

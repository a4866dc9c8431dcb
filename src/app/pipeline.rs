//! Shared "fit pipeline" logic used by the CLI front-end and library callers.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! sample collection -> degree sweep -> selection
//!
//! The CLI then focuses on presentation (report writing, plots).

use crate::data;
use crate::domain::{FitConfig, FitReport, SampleSet, SourceSpec};
use crate::error::AppError;
use crate::fit::{sweep_degrees, SweepObserver};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub report: FitReport,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(
    config: &FitConfig,
    observer: &mut dyn SweepObserver,
) -> Result<RunOutput, AppError> {
    let samples = collect_samples(&config.source)?;

    let (x_min, x_max) = samples.x_extent();
    log::info!(
        "Collected {} samples | x=[{x_min:.3}, {x_max:.3}]",
        samples.len()
    );

    log::debug!(
        "Computing fitting polynomials (min degree: {}, max degree: {})",
        config.min_degree,
        config.max_degree
    );
    let report = sweep_degrees(&samples, config.min_degree, config.max_degree, observer)?;

    Ok(RunOutput { samples, report })
}

/// Build a sample set from the configured source.
pub fn collect_samples(source: &SourceSpec) -> Result<SampleSet, AppError> {
    match source {
        SourceSpec::File { path } => data::load_samples(path),
        SourceSpec::Synthetic(spec) => data::generate_samples(spec),
        SourceSpec::Remote {
            x_from,
            x_to,
            x_step,
        } => data::MeasurementClient::from_env().fetch_grid(*x_from, *x_to, *x_step),
    }
}

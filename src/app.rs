//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - collects samples (remote API, file, or synthetic)
//! - runs the degree sweep
//! - writes the JSON report
//! - renders plots

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{FitConfig, PlotOptions, SourceSpec, SynthSpec};
use crate::error::AppError;
use crate::fit::LogObserver;

pub mod pipeline;

/// Entry point for the `psweep` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("Parsed arguments: {cli:?}");

    let config = fit_config_from_args(&cli);
    let run = pipeline::run_fit(&config, &mut LogObserver)?;

    // An empty sweep is a hard stop: no report, no plot, exit code 1.
    let Some(best) = run.report.best.clone() else {
        return Err(AppError::empty_report("No results available, giving up..."));
    };

    crate::report::write_report(&run.report, config.output.as_deref(), config.pretty)?;
    crate::plot::render(&run.samples, &best.coefficients, &config.plot)?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Resolve CLI flags into a run configuration.
///
/// Source precedence: an explicit input file wins, then the synthetic
/// generator, then the remote API grid.
pub fn fit_config_from_args(cli: &Cli) -> FitConfig {
    let source = if let Some(path) = &cli.input {
        SourceSpec::File { path: path.clone() }
    } else if let Some(degree) = cli.synth_degree {
        SourceSpec::Synthetic(SynthSpec {
            degree,
            count: cli.synth_count,
            noise_sigma: cli.synth_noise,
            seed: cli.seed,
        })
    } else {
        SourceSpec::Remote {
            x_from: cli.x_from,
            x_to: cli.x_to,
            x_step: cli.x_step,
        }
    };

    FitConfig {
        source,
        min_degree: cli.min_degree,
        max_degree: cli.max_degree,
        output: cli.output.clone(),
        pretty: !cli.no_pretty,
        plot: PlotOptions {
            show: !cli.no_show_plot,
            image: cli.output_image.clone(),
            width: cli.plot_width,
            height: cli.plot_height,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_input_takes_precedence() {
        let cli = Cli::parse_from(["psweep", "-i", "samples.yaml"]);
        let config = fit_config_from_args(&cli);
        assert!(matches!(config.source, SourceSpec::File { .. }));
    }

    #[test]
    fn synth_flag_selects_the_synthetic_source() {
        let cli = Cli::parse_from(["psweep", "--synth-degree", "4", "--seed", "9"]);
        let config = fit_config_from_args(&cli);
        match config.source {
            SourceSpec::Synthetic(spec) => {
                assert_eq!(spec.degree, 4);
                assert_eq!(spec.seed, 9);
            }
            other => panic!("expected synthetic source, got {other:?}"),
        }
    }

    #[test]
    fn bare_invocation_uses_the_remote_grid() {
        let cli = Cli::parse_from(["psweep"]);
        let config = fit_config_from_args(&cli);
        assert_eq!(
            config.source,
            SourceSpec::Remote {
                x_from: -100.0,
                x_to: 100.0,
                x_step: 0.05,
            }
        );
        assert!(config.pretty);
        assert!(config.plot.show);
    }
}

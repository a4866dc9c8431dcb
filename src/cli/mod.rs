//! Command-line parsing for the degree-sweep polynomial fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! modeling/math code.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::defaults;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "psweep",
    version,
    about = "Fit the best-degree polynomial to measured (x, y) samples"
)]
pub struct Cli {
    /// Input file to be used - if omitted, the remote API is called to retrieve values.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file for the JSON report - if omitted, defaults to stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output file where the fit image (SVG) should be stored.
    #[arg(long, value_name = "FILE")]
    pub output_image: Option<PathBuf>,

    /// Minimal degree of the fitting polynomial.
    #[arg(long, default_value_t = defaults::MIN_DEGREE)]
    pub min_degree: usize,

    /// Maximal degree of the fitting polynomial (exclusive upper bound of the sweep).
    #[arg(long, default_value_t = defaults::MAX_DEGREE)]
    pub max_degree: usize,

    /// Value on the x axis to start data gathering from.
    #[arg(long, default_value_t = defaults::X_FROM)]
    pub x_from: f64,

    /// Value on the x axis that shouldn't be reached when gathering data.
    #[arg(long, default_value_t = defaults::X_TO)]
    pub x_to: f64,

    /// Step on the x axis between two measurements.
    #[arg(long, default_value_t = defaults::X_STEP)]
    pub x_step: f64,

    /// Turn off pretty formatted output.
    #[arg(long)]
    pub no_pretty: bool,

    /// Do not show the terminal plot.
    #[arg(long)]
    pub no_show_plot: bool,

    /// Terminal plot width (columns).
    #[arg(long, default_value_t = defaults::PLOT_WIDTH)]
    pub plot_width: usize,

    /// Terminal plot height (rows).
    #[arg(long, default_value_t = defaults::PLOT_HEIGHT)]
    pub plot_height: usize,

    /// Generate seeded synthetic samples of this polynomial degree instead of
    /// querying the remote API (useful offline).
    #[arg(long, conflicts_with = "input")]
    pub synth_degree: Option<usize>,

    /// Number of synthetic samples.
    #[arg(long, default_value_t = defaults::SYNTH_COUNT)]
    pub synth_count: usize,

    /// Gaussian noise sigma added to synthetic samples.
    #[arg(long, default_value_t = defaults::SYNTH_NOISE)]
    pub synth_noise: f64,

    /// Random seed for synthetic sample generation.
    #[arg(long, default_value_t = defaults::SYNTH_SEED)]
    pub seed: u64,

    /// Turn on debug messages.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let cli = Cli::parse_from(["psweep"]);
        assert_eq!(cli.x_from, -100.0);
        assert_eq!(cli.x_to, 100.0);
        assert_eq!(cli.x_step, 0.05);
        assert_eq!(cli.min_degree, 1);
        assert_eq!(cli.max_degree, 100);
        assert!(!cli.no_pretty);
        assert!(!cli.no_show_plot);
    }

    #[test]
    fn synth_conflicts_with_input() {
        let result = Cli::try_parse_from(["psweep", "-i", "data.json", "--synth-degree", "3"]);
        assert!(result.is_err());
    }
}

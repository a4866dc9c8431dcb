//! Shared domain types.

mod types;

pub use types::{
    defaults, FitConfig, FitReport, FitResult, PlotOptions, SampleSet, SkippedDegree, SourceSpec,
    SynthSpec,
};

//! Sample sources: remote measurement endpoint, local files, synthetic data.

pub mod file;
pub mod remote;
pub mod synth;

pub use file::load_samples;
pub use remote::MeasurementClient;
pub use synth::generate_samples;

//! Degree-sweep fitting and model selection.

pub mod observer;
pub mod sweep;

pub use observer::{LogObserver, SilentObserver, SweepObserver};
pub use sweep::sweep_degrees;

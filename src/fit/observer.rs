//! Sweep progress observation.
//!
//! The fitter reports progress through an injected observer instead of a
//! process-wide logger, so library callers can capture events (or silence
//! them in tests) without touching global state.

/// Receives fitter events as the sweep consumes results in degree order.
pub trait SweepObserver {
    fn degree_fitted(&mut self, degree: usize, squared_error: f64) {
        let _ = (degree, squared_error);
    }

    fn degree_skipped(&mut self, degree: usize, reason: &str) {
        let _ = (degree, reason);
    }

    /// Called at most once per sweep, on the first repeated zero-error fit.
    fn overfit_suspected(&mut self, degree: usize) {
        let _ = degree;
    }
}

/// Forwards sweep events to the `log` facade.
pub struct LogObserver;

impl SweepObserver for LogObserver {
    fn degree_fitted(&mut self, degree: usize, squared_error: f64) {
        log::info!("Fitted polynomial of degree {degree} (squared error {squared_error:e})");
    }

    fn degree_skipped(&mut self, degree: usize, reason: &str) {
        log::warn!("Skipping degree {degree}: {reason}");
    }

    fn overfit_suspected(&mut self, degree: usize) {
        log::warn!(
            "Multiple results with squared error equal to 0.0 found (degree {degree}), \
             overfitting the data set?"
        );
    }
}

/// Discards all events. Useful in tests and embedding contexts.
pub struct SilentObserver;

impl SweepObserver for SilentObserver {}

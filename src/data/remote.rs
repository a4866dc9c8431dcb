//! Remote measurement API integration.
//!
//! The endpoint serves one measurement per request:
//!
//! ```text
//! GET {base}/do_measurement?x={x}  ->  {"data": {"y": <number|null>}}
//! ```
//!
//! We walk a half-open x grid `[x_from, x_to)` and issue one blocking request
//! per grid point, in order. A null (or missing) y means the instrument had
//! no value at that x; the point is dropped from the sample set, not
//! zero-filled. A `y` of exactly `0` is a legitimate measurement and is kept.
//!
//! Any transport failure or non-success status aborts the run; there is no
//! retry layer.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::SampleSet;
use crate::error::AppError;

const DEFAULT_API_URL: &str = "http://165.227.157.145:8080/api";
const API_URL_ENV: &str = "MEASUREMENT_API_URL";

pub struct MeasurementClient {
    client: Client,
    base_url: String,
}

impl MeasurementClient {
    /// Build a client from the environment (`.env` supported).
    ///
    /// `MEASUREMENT_API_URL` overrides the default endpoint base.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Query one y value per grid point and collect the answered points.
    pub fn fetch_grid(&self, x_from: f64, x_to: f64, x_step: f64) -> Result<SampleSet, AppError> {
        let grid = grid_points(x_from, x_to, x_step)?;

        log::info!(
            "Collecting {} measurements from {} ...",
            grid.len(),
            self.base_url
        );

        let mut xs = Vec::with_capacity(grid.len());
        let mut ys = Vec::with_capacity(grid.len());

        for x in grid {
            match self.fetch_one(x)? {
                Some(y) => {
                    xs.push(x);
                    ys.push(y);
                }
                None => log::debug!("Dropping point: no y value for x={x}"),
            }
        }

        if xs.is_empty() {
            return Err(AppError::input(
                "Remote endpoint returned no usable measurements.",
            ));
        }
        SampleSet::new(xs, ys)
    }

    fn fetch_one(&self, x: f64) -> Result<Option<f64>, AppError> {
        let url = format!("{}/do_measurement", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("x", x)])
            .send()
            .map_err(|e| AppError::transport(format!("Measurement request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::transport(format!(
                "Measurement request for x={x} failed with status {}.",
                resp.status()
            )));
        }

        let body: MeasurementResponse = resp
            .json()
            .map_err(|e| AppError::transport(format!("Failed to parse measurement response: {e}")))?;

        log::debug!("API responded for x={x}: y={:?}", body.data.y);
        Ok(body.data.y)
    }
}

#[derive(Debug, Deserialize)]
struct MeasurementResponse {
    data: MeasurementData,
}

#[derive(Debug, Deserialize)]
struct MeasurementData {
    #[serde(default)]
    y: Option<f64>,
}

/// Compute the half-open measurement grid `[x_from, x_to)`.
///
/// The point count is `trunc((x_to - x_from) / x_step)`, and each point is
/// computed as `x_from + i * x_step` so long grids don't accumulate float
/// drift.
pub fn grid_points(x_from: f64, x_to: f64, x_step: f64) -> Result<Vec<f64>, AppError> {
    if x_from > x_to {
        return Err(AppError::input("x_from cannot be bigger than x_to"));
    }
    if x_step <= 0.0 {
        return Err(AppError::input("x_step has to be non-zero and positive"));
    }

    let count = ((x_to - x_from) / x_step) as usize;
    Ok((0..count).map(|i| x_from + i as f64 * x_step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn grid_is_half_open_with_truncated_count() {
        // (0, 1, 0.5) yields exactly two queries: x=0 and x=0.5.
        let grid = grid_points(0.0, 1.0, 0.5).unwrap();
        assert_eq!(grid, vec![0.0, 0.5]);
    }

    #[test]
    fn grid_does_not_drift_over_long_ranges() {
        let grid = grid_points(-100.0, 100.0, 0.05).unwrap();
        assert_eq!(grid.len(), 4000);
        assert_eq!(grid[0], -100.0);
        assert!((grid[3999] - 99.95).abs() < 1e-9);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = grid_points(1.0, 0.0, 0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn non_positive_step_is_rejected() {
        assert_eq!(grid_points(0.0, 1.0, 0.0).unwrap_err().kind(), ErrorKind::Input);
        assert_eq!(grid_points(0.0, 1.0, -0.1).unwrap_err().kind(), ErrorKind::Input);
    }

    #[test]
    fn null_y_is_absent_but_zero_is_kept() {
        let absent: MeasurementResponse = serde_json::from_str(r#"{"data": {"y": null}}"#).unwrap();
        assert_eq!(absent.data.y, None);

        let missing: MeasurementResponse = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert_eq!(missing.data.y, None);

        let zero: MeasurementResponse = serde_json::from_str(r#"{"data": {"y": 0}}"#).unwrap();
        assert_eq!(zero.data.y, Some(0.0));
    }
}

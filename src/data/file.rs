//! Local file sample source.
//!
//! Accepts a structured file with top-level `x` and `y` arrays of equal
//! length. JSON and YAML are supported; the format is chosen by extension,
//! with a JSON-then-YAML fallback for anything else.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::SampleSet;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct RawSamples {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// Load a sample set from a local structured file.
pub fn load_samples(path: &Path) -> Result<SampleSet, AppError> {
    log::info!("Collecting data from local file '{}' ...", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read '{}': {e}", path.display())))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let raw = match ext.as_deref() {
        Some("json") => parse_json(&content)?,
        Some("yaml") | Some("yml") => parse_yaml(&content)?,
        _ => parse_json(&content).or_else(|_| parse_yaml(&content))?,
    };

    SampleSet::new(raw.x, raw.y)
}

fn parse_json(content: &str) -> Result<RawSamples, AppError> {
    serde_json::from_str(content).map_err(|e| AppError::input(format!("Invalid JSON input: {e}")))
}

fn parse_yaml(content: &str) -> Result<RawSamples, AppError> {
    serde_yaml::from_str(content).map_err(|e| AppError::input(format!("Invalid YAML input: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn load_str(content: &str, ext: &str) -> Result<SampleSet, AppError> {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "poly_sweep_test_{}_{}.{ext}",
            std::process::id(),
            content.len()
        ));
        fs::write(&path, content).unwrap();
        let result = load_samples(&path);
        fs::remove_file(&path).ok();
        result
    }

    #[test]
    fn loads_json_samples() {
        let set = load_str(r#"{"x": [0.0, 1.0, 2.0], "y": [1.0, 2.0, 5.0]}"#, "json").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(set.ys(), &[1.0, 2.0, 5.0]);
    }

    #[test]
    fn loads_yaml_samples() {
        let set = load_str("x: [0.0, 0.5, 1.0]\ny: [3.0, 2.0, 1.0]\n", "yaml").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.ys(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn unknown_extension_falls_back_to_either_format() {
        let set = load_str("x: [1.0]\ny: [2.0]\n", "dat").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = load_str(
            r#"{"x": [1.0, 2.0, 3.0, 4.0, 5.0], "y": [1.0, 2.0, 3.0, 4.0]}"#,
            "json",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn malformed_content_is_an_input_error() {
        let err = load_str("not structured data at all {", "json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}

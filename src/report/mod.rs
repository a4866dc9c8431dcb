//! Fit report serialization.
//!
//! The report is the "portable" representation of a sweep:
//!
//! ```text
//! {"all_results": [{"coefficients": [...], "squared_error": n}, ...],
//!  "best_result": {"coefficients": [...], "squared_error": n}}
//! ```
//!
//! Keys are emitted in sorted order in both modes, so the output is
//! byte-for-byte deterministic for a given report (important for golden
//! tests and downstream diffing).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::{FitReport, FitResult};
use crate::error::AppError;

/// Serialized report document. Field order is the (sorted) key order.
#[derive(Serialize)]
struct ReportDoc<'a> {
    all_results: &'a [FitResult],
    best_result: &'a FitResult,
}

/// Render the report to a JSON string.
///
/// Fails with an `EmptyReport` error if the sweep produced no results;
/// callers are expected to have handled that case already.
pub fn render_report(report: &FitReport, pretty: bool) -> Result<String, AppError> {
    let best = report
        .best
        .as_ref()
        .ok_or_else(|| AppError::empty_report("Cannot serialize an empty fit report."))?;

    let doc = ReportDoc {
        all_results: &report.all_results,
        best_result: best,
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    };
    rendered.map_err(|e| AppError::io(format!("Failed to serialize fit report: {e}")))
}

/// Write the report to the given file, or stdout when `dest` is `None`.
pub fn write_report(
    report: &FitReport,
    dest: Option<&Path>,
    pretty: bool,
) -> Result<(), AppError> {
    let rendered = render_report(report, pretty)?;

    match dest {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                AppError::io(format!("Failed to create report '{}': {e}", path.display()))
            })?;
            writeln!(file, "{rendered}")
                .map_err(|e| AppError::io(format!("Failed to write report: {e}")))?;
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}

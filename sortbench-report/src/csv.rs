//! CSV Output
//!
//! One header row, then one row per trial. Columns follow
//! [`Metric::ALL`](sortbench_core::Metric::ALL).

use crate::error::ReportError;
use sortbench_core::TrialSeries;
use std::fmt::Write;
use std::path::Path;

/// Header row written before the trial rows
pub const CSV_HEADER: &str = "Wall Time (ms),CPU Time (ms),Comparisons,Swaps";

/// Render a series as CSV text
pub fn generate_csv(series: &TrialSeries) -> String {
    let mut output = String::with_capacity(CSV_HEADER.len() + series.len() * 48);
    output.push_str(CSV_HEADER);
    output.push('\n');

    for sample in series.iter() {
        // Writing into a String cannot fail
        let _ = writeln!(
            output,
            "{},{},{},{}",
            sample.wall_ms, sample.cpu_ms, sample.comparisons, sample.movements
        );
    }

    output
}

/// Write a series to `path`, creating parent directories as needed
pub fn write_csv(path: &Path, series: &TrialSeries) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_csv(series))?;
    tracing::debug!(path = %path.display(), rows = series.len(), "Wrote CSV");
    Ok(())
}

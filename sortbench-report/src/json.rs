//! JSON Output

use crate::error::ReportError;
use crate::report::ExperimentReport;
use std::path::Path;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &ExperimentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Write the JSON report to `path`, creating parent directories as needed
pub fn write_json_report(path: &Path, report: &ExperimentReport) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_json_report(report)?)?;
    Ok(())
}

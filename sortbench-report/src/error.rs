//! Report Errors

use sortbench_stats::StatsError;

/// Errors raised while writing experiment outputs
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The plotting backend failed or was given unusable data
    #[error("plot error: {0}")]
    Plot(String),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A statistic could not be computed for the report
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
}

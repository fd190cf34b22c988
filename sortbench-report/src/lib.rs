#![warn(missing_docs)]
//! SortBench Report - Output and Visualization
//!
//! Consumes completed trial series read-only and produces:
//! - CSV (one row per trial, four index-aligned columns)
//! - Box plots (one PNG per metric comparing both algorithms)
//! - JSON (machine-readable statistics report)

mod csv;
mod error;
mod json;
mod plot;
mod report;

pub use csv::{CSV_HEADER, generate_csv, write_csv};
pub use error::ReportError;
pub use json::{generate_json_report, write_json_report};
pub use plot::{DEFAULT_PLOT_SIZE, plot_path, render_all_plots, render_box_plot};
pub use report::{
    AlgorithmReport, ExperimentReport, MetricComparison, MetricSummary, ReportMeta, SystemInfo,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON statistics report
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

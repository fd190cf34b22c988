//! Experiment Executor
//!
//! Runs both sorting algorithms and turns their series into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExperimentConfig (validated once)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Selection Sort batch, then Insertion Sort batch
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Describe every metric of every batch
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Metadata + t-test per metric
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Sequential trial batches with a progress bar
//! - [`statistics`] - Descriptive statistics per metric
//! - [`report`] - Report building with significance tests
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;

// Re-export public API
pub use execution::{AlgorithmRun, Executor};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use report::build_report;
pub use statistics::compute_statistics;

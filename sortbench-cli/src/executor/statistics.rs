//! Statistics Computation
//!
//! Describes every metric of every completed batch. Runs only after all
//! batches have finished, so a statistics failure never leaves half-written
//! outputs behind.

use super::execution::AlgorithmRun;
use sortbench_core::Sorter;
use sortbench_report::{AlgorithmReport, ReportError};

/// Compute per-metric statistics for each run, in run order
pub fn compute_statistics(runs: &[AlgorithmRun]) -> Result<Vec<AlgorithmReport>, ReportError> {
    runs.iter()
        .map(|run| {
            AlgorithmReport::summarize(run.algorithm.name(), &run.series)
                .map(|report| report.with_duration_ms(run.duration_ms))
        })
        .collect()
}

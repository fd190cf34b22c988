//! Report Building
//!
//! Combines metadata, per-algorithm statistics and the per-metric significance
//! tests into an [`ExperimentReport`].

use super::execution::AlgorithmRun;
use super::metadata::build_report_meta;
use super::statistics::compute_statistics;
use sortbench_core::{ExperimentConfig, Sorter};
use sortbench_report::{ExperimentReport, MetricComparison, ReportError};
use sortbench_stats::TestKind;

/// Build the experiment report.
///
/// Every metric of the first run is tested against the same metric of each
/// later run, so the usual two-algorithm experiment yields four comparisons.
pub fn build_report(
    runs: &[AlgorithmRun],
    config: &ExperimentConfig,
    test: TestKind,
) -> Result<ExperimentReport, ReportError> {
    let algorithms = compute_statistics(runs)?;

    let mut comparisons = Vec::new();
    if let Some((baseline, rest)) = runs.split_first() {
        for candidate in rest {
            comparisons.extend(MetricComparison::compare_all(
                (baseline.algorithm.name(), &baseline.series),
                (candidate.algorithm.name(), &candidate.series),
                test,
            )?);
        }
    }

    Ok(ExperimentReport {
        meta: build_report_meta(config, test),
        algorithms,
        comparisons,
    })
}

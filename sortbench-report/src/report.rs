//! Report Data Structures

use crate::error::ReportError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{ExperimentConfig, Metric, TrialSeries};
use sortbench_stats::{
    Descriptive, Quartiles, SeriesComparison, TestKind, compare_series, compute_quartiles,
    describe,
};

/// Complete experiment report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Run metadata
    pub meta: ReportMeta,
    /// Per-algorithm statistics, in run order
    pub algorithms: Vec<AlgorithmReport>,
    /// One t-test per metric and algorithm pair
    pub comparisons: Vec<MetricComparison>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// SortBench version
    pub version: String,
    /// When the report was built
    pub timestamp: DateTime<Utc>,
    /// Host the trials ran on
    pub system: SystemInfo,
    /// Experiment parameters
    pub config: ExperimentConfig,
    /// Significance test variant
    pub test: TestKind,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Logical cores available
    pub cpu_cores: u32,
}

/// Statistics of every metric for one algorithm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmReport {
    /// Algorithm display name
    pub name: String,
    /// Number of trials in the batch
    pub trials: usize,
    /// Wall time of the whole batch in milliseconds, including input
    /// generation and output checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    /// One summary per metric
    pub metrics: Vec<MetricSummary>,
}

/// Statistics of one metric series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Metric described
    pub metric: Metric,
    /// Range, mean, median and standard deviation
    pub stats: Descriptive,
    /// Box plot quartiles
    pub quartiles: Quartiles,
}

/// Significance test of one metric between two algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Metric tested
    pub metric: Metric,
    /// First sample of the test
    pub baseline: String,
    /// Second sample of the test
    pub candidate: String,
    /// Test outcome and verdict
    pub result: SeriesComparison,
}

impl AlgorithmReport {
    /// Describe every metric of `series`
    pub fn summarize(name: &str, series: &TrialSeries) -> Result<Self, ReportError> {
        let metrics = Metric::ALL
            .iter()
            .map(|&metric| -> Result<MetricSummary, ReportError> {
                let samples = series.metric(metric);
                Ok(MetricSummary {
                    metric,
                    stats: describe(&samples)?,
                    quartiles: compute_quartiles(&samples),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            trials: series.len(),
            duration_ms: None,
            metrics,
        })
    }

    /// Attach the batch wall time
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Summary for `metric`, if present
    pub fn metric(&self, metric: Metric) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

impl MetricComparison {
    /// Test every metric of `baseline` against `candidate`
    pub fn compare_all(
        (baseline_name, baseline): (&str, &TrialSeries),
        (candidate_name, candidate): (&str, &TrialSeries),
        kind: TestKind,
    ) -> Result<Vec<Self>, ReportError> {
        Metric::ALL
            .iter()
            .map(|&metric| -> Result<Self, ReportError> {
                let result =
                    compare_series(&baseline.metric(metric), &candidate.metric(metric), kind)?;
                Ok(Self {
                    metric,
                    baseline: baseline_name.to_string(),
                    candidate: candidate_name.to_string(),
                    result,
                })
            })
            .collect()
    }
}

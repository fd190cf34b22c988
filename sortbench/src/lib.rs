#![warn(missing_docs)]
//! # SortBench
//!
//! Empirical comparison of selection sort and insertion sort.
//!
//! SortBench runs each algorithm over many freshly generated inputs while
//! counting comparisons and element movements, then compares the two
//! distributions:
//! - **Instrumented Sorters**: exact comparison and movement counts behind a `Sorter` trait
//! - **Controlled Inputs**: random, fixed-seed and partially sorted arrays from an explicit random source
//! - **Dual Timing**: monotonic wall clock and process CPU time per sort
//! - **Statistics**: range, mean, median, sample standard deviation, Student or Welch t-test
//! - **Outputs**: per-algorithm CSV, one box plot per metric, terminal or JSON report
//!
//! ## Quick Start
//!
//! ```
//! use sortbench::{Algorithm, ExperimentConfig, InputStrategy, TrialRunner, describe};
//!
//! let config = ExperimentConfig::new(50, 10, InputStrategy::FixedSeed);
//! let mut runner = TrialRunner::new(config).unwrap();
//! let series = runner.run(&Algorithm::Selection).unwrap();
//!
//! assert_eq!(series.len(), 10);
//! assert!(series.comparisons().iter().all(|&c| c == 1225));
//!
//! let stats = describe(series.wall_ms()).unwrap();
//! assert!(stats.min <= stats.median && stats.median <= stats.max);
//! ```
//!
//! ## Instrumented Sorting
//!
//! ```
//! use sortbench::{InsertionSort, Sorter};
//!
//! let result = InsertionSort.sort(vec![3, 1, 2]).unwrap();
//! assert_eq!(result.sorted, vec![1, 2, 3]);
//! assert_eq!(result.comparisons, 3);
//! assert_eq!(result.movements, 2);
//! ```

// Re-export core types
pub use sortbench_core::{
    Algorithm, ConfigError, Elapsed, ExperimentConfig, GenerateError, HAS_CPU_CLOCK, InputArray,
    InputGenerator, InputStrategy, InsertionSort, Metric, OpCounts, SelectionSort, SortError,
    SortResult, Sorter, Timer, TrialError, TrialRunner, TrialSample, TrialSeries,
    UNIQUE_POPULATION_FACTOR, check_request,
};

// Re-export stats
pub use sortbench_stats::{
    Descriptive, Quartiles, SIGNIFICANCE_LEVEL, SeriesComparison, Significance, StatsError,
    TTestResult, TestKind, classify, compare_series, compute_percentile, compute_quartiles,
    describe, t_test,
};

// Re-export report types
pub use sortbench_report::{
    AlgorithmReport, CSV_HEADER, ExperimentReport, MetricComparison, MetricSummary, OutputFormat,
    ReportError, generate_csv, generate_json_report, plot_path, render_all_plots, write_csv,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, ExperimentConfig, InputStrategy, InsertionSort, Metric, SelectionSort, Sorter,
        TestKind, TrialRunner, TrialSeries,
    };
}

/// Run the SortBench CLI.
///
/// Call this from a binary's `main()`:
/// ```no_run
/// fn main() -> anyhow::Result<()> {
///     sortbench::run()
/// }
/// ```
pub use sortbench_cli::run;

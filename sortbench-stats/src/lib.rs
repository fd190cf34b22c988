#![warn(missing_docs)]
//! SortBench Statistical Engine
//!
//! Statistics over completed trial series:
//! - Descriptive statistics (range, mean, median, sample standard deviation)
//! - Percentiles and quartiles for box plots
//! - Two-sample t-test (Student or Welch) with a fixed 0.05 significance level

mod percentiles;
mod significance;
mod summary;

pub use percentiles::{Quartiles, compute_percentile, compute_quartiles};
pub use significance::{
    SIGNIFICANCE_LEVEL, SeriesComparison, Significance, TTestResult, TestKind, classify,
    compare_series, t_test, two_tailed_p,
};
pub use summary::{Descriptive, MIN_SAMPLES, StatsError, describe};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_SAMPLES, 2);
        assert!((SIGNIFICANCE_LEVEL - 0.05).abs() < f64::EPSILON);
    }
}

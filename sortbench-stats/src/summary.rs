//! Descriptive Statistics
//!
//! Range, mean, median and sample standard deviation of one metric series.
//! Every sample is used; nothing is trimmed as an outlier, because the
//! operation-count series are exact and the timing tails are part of what is
//! being compared.

use crate::percentiles::percentile_of_sorted;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Descriptive {
    /// Number of samples
    pub count: usize,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// `max - min`
    pub range: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Sample standard deviation (divisor `n - 1`)
    pub std_dev: f64,
}

/// Errors from statistical computations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Fewer samples than the statistic needs
    #[error("need at least {required} samples, got {actual}")]
    Degenerate {
        /// Minimum number of samples
        required: usize,
        /// Samples supplied
        actual: usize,
    },
    /// A sample was NaN or infinite
    #[error("sample {index} is not a finite number")]
    NonFinite {
        /// Position of the offending sample
        index: usize,
    },
}

/// Minimum series length for a sample standard deviation
pub const MIN_SAMPLES: usize = 2;

pub(crate) fn check_samples(samples: &[f64]) -> Result<(), StatsError> {
    if samples.len() < MIN_SAMPLES {
        return Err(StatsError::Degenerate {
            required: MIN_SAMPLES,
            actual: samples.len(),
        });
    }
    if let Some(index) = samples.iter().position(|x| !x.is_finite()) {
        return Err(StatsError::NonFinite { index });
    }
    Ok(())
}

pub(crate) fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected variance; callers guarantee `samples.len() >= 2`
pub(crate) fn sample_variance(samples: &[f64], mean: f64) -> f64 {
    samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64
}

/// Describe a metric series.
///
/// Fails with [`StatsError::Degenerate`] for fewer than two samples, where the
/// sample standard deviation is undefined.
///
/// # Examples
///
/// ```
/// # use sortbench_stats::describe;
/// let d = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(d.mean, 3.0);
/// assert_eq!(d.median, 3.0);
/// assert_eq!(d.range, 4.0);
/// assert!((d.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
/// ```
pub fn describe(samples: &[f64]) -> Result<Descriptive, StatsError> {
    check_samples(samples)?;

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mean = mean(samples);
    let std_dev = sample_variance(samples, mean).sqrt();

    Ok(Descriptive {
        count: samples.len(),
        min,
        max,
        range: max - min,
        mean,
        median: percentile_of_sorted(&sorted, 50.0),
        std_dev,
    })
}

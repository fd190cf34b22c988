//! Percentile Computation
//!
//! Linear interpolation between nearest ranks. The median reported by
//! [`describe`](crate::describe) is the 50th percentile computed here, which
//! equals the middle element for odd counts and the mean of the two middle
//! elements for even counts.

use serde::{Deserialize, Serialize};

/// Quartiles of a series, as drawn by a box plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Compute a single percentile from samples
///
/// Uses linear interpolation between nearest ranks. Returns 0.0 for an empty
/// slice.
///
/// # Examples
///
/// ```
/// # use sortbench_stats::compute_percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&samples, 50.0), 2.5);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    percentile_of_sorted(&sorted, percentile)
}

/// Percentile of an already ascending slice
pub(crate) fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let p = (percentile / 100.0).clamp(0.0, 1.0);
            let rank = p * (n - 1) as f64;
            let lower_idx = rank.floor() as usize;
            let upper_idx = (lower_idx + 1).min(n - 1);
            let fraction = rank - lower_idx as f64;

            sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
        }
    }
}

/// Compute the quartiles of `samples`
pub fn compute_quartiles(samples: &[f64]) -> Quartiles {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Quartiles {
        q1: percentile_of_sorted(&sorted, 25.0),
        median: percentile_of_sorted(&sorted, 50.0),
        q3: percentile_of_sorted(&sorted, 75.0),
    }
}

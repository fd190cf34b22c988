//! Metric Series
//!
//! Per-trial measurements for one algorithm under one configuration. The four
//! columns are only ever extended together through [`TrialSeries::push`], so
//! they stay index-aligned.

use serde::{Deserialize, Serialize};

/// The four quantities recorded for every trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Monotonic wall-clock time of the sort call
    WallTime,
    /// Process CPU time of the sort call
    CpuTime,
    /// Comparisons counted by the sorter
    Comparisons,
    /// Movements (exchanges or shifts) counted by the sorter
    Swaps,
}

impl Metric {
    /// All metrics in column order
    pub const ALL: [Metric; 4] = [
        Metric::WallTime,
        Metric::CpuTime,
        Metric::Comparisons,
        Metric::Swaps,
    ];

    /// Column header and chart label
    pub fn name(self) -> &'static str {
        match self {
            Metric::WallTime => "Wall Time (ms)",
            Metric::CpuTime => "CPU Time (ms)",
            Metric::Comparisons => "Comparisons",
            Metric::Swaps => "Swaps",
        }
    }

    /// Name lower-cased with spaces replaced by underscores
    pub fn file_stem(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Measurements of a single trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialSample {
    /// Wall-clock milliseconds
    pub wall_ms: f64,
    /// CPU milliseconds
    pub cpu_ms: f64,
    /// Comparison count
    pub comparisons: u64,
    /// Movement count
    pub movements: u64,
}

/// Index-aligned metric series for one batch of trials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSeries {
    wall_ms: Vec<f64>,
    cpu_ms: Vec<f64>,
    comparisons: Vec<u64>,
    movements: Vec<u64>,
}

impl TrialSeries {
    /// Empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty series with room for `trials` samples
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            wall_ms: Vec::with_capacity(trials),
            cpu_ms: Vec::with_capacity(trials),
            comparisons: Vec::with_capacity(trials),
            movements: Vec::with_capacity(trials),
        }
    }

    /// Append one trial to all four columns
    pub fn push(&mut self, sample: TrialSample) {
        self.wall_ms.push(sample.wall_ms);
        self.cpu_ms.push(sample.cpu_ms);
        self.comparisons.push(sample.comparisons);
        self.movements.push(sample.movements);
    }

    /// Number of trials recorded
    pub fn len(&self) -> usize {
        self.wall_ms.len()
    }

    /// Whether no trial has been recorded
    pub fn is_empty(&self) -> bool {
        self.wall_ms.is_empty()
    }

    /// Wall-clock times in milliseconds
    pub fn wall_ms(&self) -> &[f64] {
        &self.wall_ms
    }

    /// CPU times in milliseconds
    pub fn cpu_ms(&self) -> &[f64] {
        &self.cpu_ms
    }

    /// Comparison counts
    pub fn comparisons(&self) -> &[u64] {
        &self.comparisons
    }

    /// Movement counts
    pub fn movements(&self) -> &[u64] {
        &self.movements
    }

    /// One column as `f64` samples, ready for statistics or plotting
    pub fn metric(&self, metric: Metric) -> Vec<f64> {
        match metric {
            Metric::WallTime => self.wall_ms.clone(),
            Metric::CpuTime => self.cpu_ms.clone(),
            Metric::Comparisons => self.comparisons.iter().map(|&c| c as f64).collect(),
            Metric::Swaps => self.movements.iter().map(|&m| m as f64).collect(),
        }
    }

    /// Trial `index` across all four columns
    pub fn get(&self, index: usize) -> Option<TrialSample> {
        Some(TrialSample {
            wall_ms: *self.wall_ms.get(index)?,
            cpu_ms: self.cpu_ms[index],
            comparisons: self.comparisons[index],
            movements: self.movements[index],
        })
    }

    /// Iterate trials in order
    pub fn iter(&self) -> impl Iterator<Item = TrialSample> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

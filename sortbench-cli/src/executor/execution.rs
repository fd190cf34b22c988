//! Experiment Execution
//!
//! Runs one trial batch per algorithm, strictly one after the other, on the
//! calling thread.
//!
//! ## Data Flow
//!
//! ```text
//! ExperimentConfig (validated)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │    Executor      │  TrialRunner per algorithm, progress between trials
//! └────────┬─────────┘
//!          │
//!          ▼
//!  AlgorithmRun (algorithm, TrialSeries)
//! ```

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use sortbench_core::{Algorithm, ExperimentConfig, HAS_CPU_CLOCK, TrialRunner, TrialSeries};
use std::time::Instant;

/// Completed batch for one algorithm
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// Algorithm that produced the series
    pub algorithm: Algorithm,
    /// Index-aligned measurements, one entry per trial
    pub series: TrialSeries,
    /// Wall time of the whole batch, including generation and verification
    pub duration_ms: f64,
}

/// Runs every configured algorithm against the same experiment configuration
pub struct Executor {
    config: ExperimentConfig,
    show_progress: bool,
}

impl Executor {
    /// Create an executor with the progress bar enabled
    pub fn new(config: ExperimentConfig) -> Self {
        Self {
            config,
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run all `algorithms` in order.
    ///
    /// Fails on the first batch error; no partial results are returned.
    pub fn execute(&self, algorithms: &[Algorithm]) -> anyhow::Result<Vec<AlgorithmRun>> {
        let total = (self.config.trial_count * algorithms.len()) as u64;
        let pb = if self.show_progress {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut runs = Vec::with_capacity(algorithms.len());
        for &algorithm in algorithms {
            pb.set_message(algorithm.to_string());
            let run = self.execute_single(algorithm, &pb);
            match run {
                Ok(run) => runs.push(run),
                Err(e) => {
                    pb.abandon_with_message(format!("{} failed", algorithm));
                    return Err(e);
                }
            }
        }

        pb.finish_with_message("Complete");
        Ok(runs)
    }

    fn execute_single(
        &self,
        algorithm: Algorithm,
        pb: &ProgressBar,
    ) -> anyhow::Result<AlgorithmRun> {
        let start = Instant::now();
        // A fresh runner per algorithm: with a configured seed both batches
        // see the same input sequence.
        let mut runner = TrialRunner::new(self.config.clone())?;
        let series = runner
            .run_with_progress(&algorithm, |_| pb.inc(1))
            .with_context(|| format!("{} batch failed", algorithm))?;

        if HAS_CPU_CLOCK && series.cpu_ms().iter().all(|&ms| ms == 0.0) {
            tracing::warn!(
                %algorithm,
                "Every CPU-time sample is zero; inputs may be too small for the clock resolution"
            );
        }

        Ok(AlgorithmRun {
            algorithm,
            series,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::InputStrategy;

    #[test]
    fn test_runs_in_order() {
        let config = ExperimentConfig::new(30, 4, InputStrategy::FixedSeed);
        let runs = Executor::new(config)
            .with_progress(false)
            .execute(&Algorithm::ALL)
            .unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].algorithm, Algorithm::Selection);
        assert_eq!(runs[1].algorithm, Algorithm::Insertion);
        assert!(runs.iter().all(|r| r.series.len() == 4));
        assert!(runs[0].series.comparisons().iter().all(|&c| c == 435));
    }

    #[test]
    fn test_seeded_batches_share_inputs() {
        // Two insertion batches over the same seeded input stream count identically
        let config = ExperimentConfig::new(40, 3, InputStrategy::PartialSort)
            .with_sorted_percent(50.0)
            .with_seed(11);
        let runs = Executor::new(config)
            .with_progress(false)
            .execute(&[Algorithm::Insertion, Algorithm::Insertion])
            .unwrap();

        assert_eq!(runs[0].series.comparisons(), runs[1].series.comparisons());
        assert_eq!(runs[0].series.movements(), runs[1].series.movements());
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = ExperimentConfig::new(0, 4, InputStrategy::Random);
        let err = Executor::new(config)
            .with_progress(false)
            .execute(&Algorithm::ALL)
            .unwrap_err();
        assert!(err.to_string().contains("input size"));
    }
}

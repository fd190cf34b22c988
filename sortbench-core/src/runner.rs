//! Trial Runner
//!
//! Repeats generate → copy → time → sort → record for a configured number of
//! trials and returns the completed [`TrialSeries`].
//!
//! ## Per-trial sequence
//!
//! ```text
//! InputGenerator::generate(config, k)      fresh array (seed = k for "fixed")
//!        │
//!        ▼
//!   input.to_vec()                         sorter never sees the generated array
//!        │
//!        ▼
//!   Timer::start → Sorter::sort → Timer::stop
//!        │
//!        ▼
//!   verify (optional, outside timing) → TrialSeries::push
//! ```
//!
//! Trials run strictly one after the other on the calling thread. Any error
//! aborts the batch; no partial series is ever returned.

use crate::config::{ConfigError, ExperimentConfig};
use crate::generate::{GenerateError, InputArray, InputGenerator};
use crate::measure::Timer;
use crate::series::{TrialSample, TrialSeries};
use crate::sort::{SortError, Sorter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Errors that abort a trial batch
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrialError {
    /// Input generation failed
    #[error("trial {trial}: input generation failed: {source}")]
    Generate {
        /// Zero-based trial index
        trial: usize,
        /// Underlying error
        source: GenerateError,
    },
    /// The sorter hit incomparable elements
    #[error("trial {trial}: {source}")]
    Sort {
        /// Zero-based trial index
        trial: usize,
        /// Underlying error
        source: SortError,
    },
    /// The sorter returned an array that is not a sorted copy of its input
    #[error("trial {trial}: {algorithm} returned unsorted output")]
    UnsortedOutput {
        /// Zero-based trial index
        trial: usize,
        /// Sorter name
        algorithm: &'static str,
    },
}

/// Runs batches of timed, instrumented sorts
pub struct TrialRunner<R = StdRng> {
    config: ExperimentConfig,
    generator: InputGenerator<R>,
}

impl TrialRunner<StdRng> {
    /// Validate `config` and build a runner.
    ///
    /// The random source is seeded from `config.seed`, or from OS entropy
    /// when no seed is configured.
    pub fn new(config: ExperimentConfig) -> Result<Self, ConfigError> {
        let generator = match config.seed {
            Some(seed) => InputGenerator::seeded(seed),
            None => InputGenerator::from_entropy(),
        };
        Self::with_generator(config, generator)
    }
}

impl<R: Rng + SeedableRng> TrialRunner<R> {
    /// Validate `config` and build a runner over a caller-provided generator.
    pub fn with_generator(
        config: ExperimentConfig,
        generator: InputGenerator<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, generator })
    }

    /// The validated configuration
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Run all configured trials with `sorter`.
    pub fn run<S: Sorter>(&mut self, sorter: &S) -> Result<TrialSeries, TrialError> {
        self.run_with_progress(sorter, |_| {})
    }

    /// Run all configured trials, calling `on_trial` after each one completes.
    ///
    /// The callback runs after the trial's end marks, so it is never timed.
    pub fn run_with_progress<S, F>(
        &mut self,
        sorter: &S,
        mut on_trial: F,
    ) -> Result<TrialSeries, TrialError>
    where
        S: Sorter,
        F: FnMut(usize),
    {
        let trials = self.config.trial_count;
        info!(
            algorithm = sorter.name(),
            input_size = self.config.input_size,
            trials,
            strategy = %self.config.strategy,
            "Starting trial batch"
        );

        let mut series = TrialSeries::with_capacity(trials);
        for trial in 0..trials {
            let input = self
                .generator
                .generate(&self.config, trial)
                .map_err(|source| TrialError::Generate { trial, source })?;

            let sample = match &input {
                InputArray::Int(values) => {
                    measure_trial(sorter, values, trial, self.config.verify_output)?
                }
                InputArray::Float(values) => {
                    measure_trial(sorter, values, trial, self.config.verify_output)?
                }
            };

            debug!(
                trial,
                wall_ms = sample.wall_ms,
                cpu_ms = sample.cpu_ms,
                comparisons = sample.comparisons,
                movements = sample.movements,
                "Trial complete"
            );
            series.push(sample);
            on_trial(trial);
        }

        info!(
            algorithm = sorter.name(),
            trials = series.len(),
            "Trial batch complete"
        );
        Ok(series)
    }
}

/// Time one sort of a private copy of `input`.
fn measure_trial<S, T>(
    sorter: &S,
    input: &[T],
    trial: usize,
    verify: bool,
) -> Result<TrialSample, TrialError>
where
    S: Sorter,
    T: PartialOrd + Clone,
{
    let working = input.to_vec();

    let timer = Timer::start();
    let outcome = sorter.sort(working);
    let elapsed = timer.stop();

    let result = outcome.map_err(|source| TrialError::Sort { trial, source })?;

    if verify && !is_sorted_copy(input, &result.sorted) {
        return Err(TrialError::UnsortedOutput {
            trial,
            algorithm: sorter.name(),
        });
    }

    Ok(TrialSample {
        wall_ms: elapsed.wall_ms,
        cpu_ms: elapsed.cpu_ms,
        comparisons: result.comparisons,
        movements: result.movements,
    })
}

/// Non-descending and element-for-element equal to a sorted clone of the input.
fn is_sorted_copy<T: PartialOrd + Clone>(input: &[T], output: &[T]) -> bool {
    if input.len() != output.len() || !output.windows(2).all(|w| w[0] <= w[1]) {
        return false;
    }
    // A NaN in the input can never be matched by an ordered output
    if input.iter().any(|x| x.partial_cmp(x).is_none()) {
        return false;
    }

    let mut expected = input.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    expected
        .iter()
        .zip(output)
        .all(|(e, o)| e.partial_cmp(o) == Some(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputStrategy;
    use crate::sort::{InsertionSort, OpCounts, SelectionSort};

    /// Claims success without sorting anything
    struct Lazy;

    impl Sorter for Lazy {
        fn name(&self) -> &'static str {
            "Lazy Sort"
        }

        fn sort_in_place<T: PartialOrd>(&self, _data: &mut [T]) -> Result<OpCounts, SortError> {
            Ok(OpCounts::default())
        }
    }

    #[test]
    fn test_fixed_strategy_selection_sort() {
        let config = ExperimentConfig::new(50, 10, InputStrategy::FixedSeed);
        let mut runner = TrialRunner::new(config).unwrap();
        let series = runner.run(&SelectionSort).unwrap();

        assert_eq!(series.len(), 10);
        assert_eq!(series.wall_ms().len(), 10);
        assert_eq!(series.cpu_ms().len(), 10);
        assert_eq!(series.movements().len(), 10);
        assert!(series.comparisons().iter().all(|&c| c == 1225));
    }

    #[test]
    fn test_fixed_strategy_reproducible_across_runs() {
        let config = ExperimentConfig::new(40, 5, InputStrategy::FixedSeed);
        let a = TrialRunner::new(config.clone()).unwrap().run(&InsertionSort).unwrap();
        let b = TrialRunner::new(config).unwrap().run(&InsertionSort).unwrap();

        assert_eq!(a.comparisons(), b.comparisons());
        assert_eq!(a.movements(), b.movements());
    }

    #[test]
    fn test_seeded_random_strategy_reproducible() {
        let config = ExperimentConfig::new(60, 4, InputStrategy::Random)
            .with_unique(false)
            .with_seed(2024);
        let a = TrialRunner::new(config.clone()).unwrap().run(&InsertionSort).unwrap();
        let b = TrialRunner::new(config).unwrap().run(&InsertionSort).unwrap();

        assert_eq!(a.comparisons(), b.comparisons());
    }

    #[test]
    fn test_fully_sorted_partial_is_minimal() {
        let config = ExperimentConfig::new(30, 3, InputStrategy::PartialSort).with_sorted_percent(100.0);
        let mut runner = TrialRunner::new(config).unwrap();
        let series = runner.run(&InsertionSort).unwrap();

        assert!(series.comparisons().iter().all(|&c| c == 29));
        assert!(series.movements().iter().all(|&m| m == 0));
    }

    #[test]
    fn test_float_inputs() {
        let config = ExperimentConfig::new(25, 3, InputStrategy::Random)
            .with_unique(true)
            .with_float(true);
        let mut runner = TrialRunner::new(config).unwrap();
        let series = runner.run(&SelectionSort).unwrap();
        assert!(series.comparisons().iter().all(|&c| c == 300));
    }

    #[test]
    fn test_invalid_config_rejected_before_trials() {
        let config = ExperimentConfig::new(30, 3, InputStrategy::PartialSort).with_sorted_percent(-5.0);
        assert!(matches!(
            TrialRunner::new(config),
            Err(ConfigError::Input(GenerateError::InvalidPercent(_)))
        ));
    }

    #[test]
    fn test_progress_called_once_per_trial() {
        let config = ExperimentConfig::new(10, 7, InputStrategy::FixedSeed);
        let mut runner = TrialRunner::new(config).unwrap();
        let mut seen = Vec::new();
        runner.run_with_progress(&SelectionSort, |t| seen.push(t)).unwrap();
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_unsorted_output_aborts_batch() {
        let config = ExperimentConfig::new(20, 5, InputStrategy::PartialSort).with_sorted_percent(0.0);
        let mut runner = TrialRunner::new(config).unwrap();
        let err = runner.run(&Lazy).unwrap_err();
        assert!(matches!(err, TrialError::UnsortedOutput { trial: 0, .. }));
    }

    #[test]
    fn test_verification_can_be_disabled() {
        let config = ExperimentConfig::new(20, 5, InputStrategy::PartialSort)
            .with_sorted_percent(0.0)
            .with_verify_output(false);
        let mut runner = TrialRunner::new(config).unwrap();
        let series = runner.run(&Lazy).unwrap();
        assert_eq!(series.len(), 5);
    }

    #[test]
    fn test_is_sorted_copy() {
        assert!(is_sorted_copy(&[3, 1, 2], &[1, 2, 3]));
        assert!(is_sorted_copy(&[2, 2], &[2, 2]));
        assert!(!is_sorted_copy(&[3, 1, 2], &[1, 3, 2]));
        assert!(!is_sorted_copy(&[3, 1, 2], &[1, 2]));
    }

    #[test]
    fn test_is_sorted_copy_requires_same_elements() {
        assert!(!is_sorted_copy(&[3, 1, 2], &[7, 7, 7]));
        assert!(!is_sorted_copy(&[2, 2, 1], &[1, 2, 3]));
        assert!(!is_sorted_copy(&[2.0, f64::NAN], &[2.0, 2.0]));
        assert!(is_sorted_copy(&[2.5, -1.0, 2.5], &[-1.0, 2.5, 2.5]));
    }
}

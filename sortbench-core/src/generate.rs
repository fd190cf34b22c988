//! Input Generation
//!
//! Three reproducible strategies for building trial inputs:
//! - uniform random (with or without duplicates)
//! - fixed-seed random (identical output for identical `(size, seed)`)
//! - partially sorted (ascending prefix, shuffled suffix)
//!
//! The random source is owned by the [`InputGenerator`] and passed in by the
//! caller. Nothing here touches global random state.

use crate::config::{ExperimentConfig, InputStrategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Multiplier for the unique-draw population: values come from `[1, size * 10)`
pub const UNIQUE_POPULATION_FACTOR: usize = 10;

/// A generated trial input
#[derive(Debug, Clone, PartialEq)]
pub enum InputArray {
    /// Integer elements
    Int(Vec<i64>),
    /// Integer values converted to floating point
    Float(Vec<f64>),
}

impl InputArray {
    /// Wrap integer values, converting them to `f64` when `as_float` is set.
    pub fn from_ints(values: Vec<i64>, as_float: bool) -> Self {
        if as_float {
            InputArray::Float(values.into_iter().map(|v| v as f64).collect())
        } else {
            InputArray::Int(values)
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            InputArray::Int(v) => v.len(),
            InputArray::Float(v) => v.len(),
        }
    }

    /// Whether the array has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors from input generation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Sampling without replacement asked for more values than exist
    #[error("cannot draw {requested} distinct values from a population of {available}")]
    Population {
        /// Values requested
        requested: usize,
        /// Distinct values available
        available: usize,
    },
    /// The with-replacement range `[1, size / 2]` has no values
    #[error("value range [1, {}] is empty for input size {size}", .size / 2)]
    EmptyRange {
        /// Requested input size
        size: usize,
    },
    /// Sorted percentage outside `[0, 100]`
    #[error("sorted percent must be within [0, 100], got {0}")]
    InvalidPercent(f64),
}

/// Check that a request can be satisfied before any random draw happens.
///
/// The trial runner calls this once up front so that a bad configuration is
/// rejected before the first measurement.
pub fn check_request(
    strategy: InputStrategy,
    size: usize,
    unique: bool,
    sorted_percent: f64,
) -> Result<(), GenerateError> {
    match strategy {
        InputStrategy::Random if unique => check_population(1, unique_upper_bound(size), size),
        InputStrategy::Random => check_replacement_range(size),
        InputStrategy::FixedSeed => check_population(1, unique_upper_bound(size), size),
        InputStrategy::PartialSort => check_percent(sorted_percent),
    }
}

fn unique_upper_bound(size: usize) -> i64 {
    size.saturating_mul(UNIQUE_POPULATION_FACTOR)
        .min(i64::MAX as usize) as i64
}

fn check_population(low: i64, high: i64, amount: usize) -> Result<(), GenerateError> {
    let available = high.saturating_sub(low).max(0) as usize;
    if amount > available {
        return Err(GenerateError::Population {
            requested: amount,
            available,
        });
    }
    Ok(())
}

fn check_replacement_range(size: usize) -> Result<(), GenerateError> {
    if size > 0 && size / 2 < 1 {
        return Err(GenerateError::EmptyRange { size });
    }
    Ok(())
}

fn check_percent(sorted_percent: f64) -> Result<(), GenerateError> {
    if !(0.0..=100.0).contains(&sorted_percent) {
        return Err(GenerateError::InvalidPercent(sorted_percent));
    }
    Ok(())
}

/// Input generator over an explicit random source
#[derive(Debug, Clone)]
pub struct InputGenerator<R = StdRng> {
    rng: R,
}

impl InputGenerator<StdRng> {
    /// Generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Generator with a reproducible stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + SeedableRng> InputGenerator<R> {
    /// Wrap a caller-provided random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `amount` distinct integers from `[low, high)`.
    ///
    /// The result is in random order.
    pub fn sample_distinct(
        &mut self,
        low: i64,
        high: i64,
        amount: usize,
    ) -> Result<Vec<i64>, GenerateError> {
        check_population(low, high, amount)?;
        let population = high.saturating_sub(low).max(0) as usize;
        Ok(rand::seq::index::sample(&mut self.rng, population, amount)
            .into_iter()
            .map(|offset| low + offset as i64)
            .collect())
    }

    /// Uniform random input.
    ///
    /// With `unique`, `size` distinct values from `[1, size * 10)`. Without,
    /// `size` independent draws from `[1, size / 2]`, so duplicates are
    /// expected.
    pub fn random(
        &mut self,
        size: usize,
        unique: bool,
        as_float: bool,
    ) -> Result<InputArray, GenerateError> {
        let values = if unique {
            self.sample_distinct(1, unique_upper_bound(size), size)?
        } else {
            check_replacement_range(size)?;
            let high = (size / 2) as i64;
            (0..size).map(|_| self.rng.gen_range(1..=high)).collect()
        };
        Ok(InputArray::from_ints(values, as_float))
    }

    /// Reseed the random source with `seed`, then draw a unique random input.
    ///
    /// The same `(size, seed)` always produces the same array. Draws made
    /// after this call continue the seeded stream.
    pub fn fixed_seed(
        &mut self,
        size: usize,
        seed: u64,
        as_float: bool,
    ) -> Result<InputArray, GenerateError> {
        self.rng = R::seed_from_u64(seed);
        self.random(size, true, as_float)
    }

    /// Ascending `[0, size)` whose first `floor(sorted_percent% * size)`
    /// elements stay in place and whose remainder is shuffled.
    pub fn partially_sorted(
        &mut self,
        size: usize,
        sorted_percent: f64,
        as_float: bool,
    ) -> Result<InputArray, GenerateError> {
        check_percent(sorted_percent)?;
        let num_sorted = ((sorted_percent / 100.0) * size as f64).floor() as usize;
        let num_sorted = num_sorted.min(size);

        let mut values: Vec<i64> = (0..size as i64).collect();
        values[num_sorted..].shuffle(&mut self.rng);
        Ok(InputArray::from_ints(values, as_float))
    }

    /// Generate the input for trial `trial` of an experiment.
    ///
    /// The fixed-seed strategy uses the zero-based trial index as its seed, so
    /// trial `k` is identical across runs of the same configuration.
    pub fn generate(
        &mut self,
        config: &ExperimentConfig,
        trial: usize,
    ) -> Result<InputArray, GenerateError> {
        match config.strategy {
            InputStrategy::Random => self.random(config.input_size, config.unique, config.as_float),
            InputStrategy::FixedSeed => {
                self.fixed_seed(config.input_size, trial as u64, config.as_float)
            }
            InputStrategy::PartialSort => {
                self.partially_sorted(config.input_size, config.sorted_percent, config.as_float)
            }
        }
    }
}

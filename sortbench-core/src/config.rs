//! Experiment Configuration
//!
//! An [`ExperimentConfig`] is built once, validated once, and then stays
//! immutable for the whole run. Validation covers everything that could
//! otherwise fail halfway through a batch, so a bad configuration never
//! produces a partial series.

use crate::generate::{GenerateError, check_request};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How trial inputs are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InputStrategy {
    /// Fresh uniform random values every trial
    #[serde(rename = "random")]
    Random,
    /// Unique random values, seeded with the trial index
    #[serde(rename = "fixed", alias = "fixed-seed")]
    FixedSeed,
    /// Ascending prefix followed by a shuffled suffix
    #[default]
    #[serde(rename = "partial", alias = "partial-sort")]
    PartialSort,
}

impl InputStrategy {
    /// Tag used in configuration files and on the command line
    pub fn tag(self) -> &'static str {
        match self {
            InputStrategy::Random => "random",
            InputStrategy::FixedSeed => "fixed",
            InputStrategy::PartialSort => "partial",
        }
    }
}

impl std::fmt::Display for InputStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for InputStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(InputStrategy::Random),
            "fixed" | "fixed-seed" | "fixedseed" => Ok(InputStrategy::FixedSeed),
            "partial" | "partial-sort" | "partialsort" => Ok(InputStrategy::PartialSort),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Errors from configuration validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Input size must be positive
    #[error("input size must be greater than zero")]
    ZeroInputSize,
    /// Trial count must be positive
    #[error("trial count must be greater than zero")]
    ZeroTrials,
    /// Strategy tag not recognised
    #[error("unknown input strategy '{0}' (expected random, fixed or partial)")]
    UnknownStrategy(String),
    /// The generator cannot satisfy the requested input
    #[error("invalid input parameters: {0}")]
    Input(#[from] GenerateError),
}

/// Parameters of one experiment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Number of elements per generated array
    pub input_size: usize,
    /// Number of trials per algorithm
    #[serde(alias = "trials")]
    pub trial_count: usize,
    /// Input generation strategy
    pub strategy: InputStrategy,
    /// Percentage of the array left in ascending order (partial strategy)
    pub sorted_percent: f64,
    /// Draw distinct values (random strategy)
    pub unique: bool,
    /// Convert generated integers to floating point
    pub as_float: bool,
    /// Seed for the random and partial strategies (entropy when unset)
    pub seed: Option<u64>,
    /// Check every sorter output after timing it
    pub verify_output: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            input_size: 5000,
            trial_count: 100,
            strategy: InputStrategy::PartialSort,
            sorted_percent: 75.0,
            unique: false,
            as_float: false,
            seed: None,
            verify_output: true,
        }
    }
}

impl ExperimentConfig {
    /// Create a configuration with the given size, trial count and strategy.
    ///
    /// Remaining parameters take their defaults.
    pub fn new(input_size: usize, trial_count: usize, strategy: InputStrategy) -> Self {
        Self {
            input_size,
            trial_count,
            strategy,
            ..Self::default()
        }
    }

    /// Set the sorted percentage for the partial strategy
    pub fn with_sorted_percent(mut self, sorted_percent: f64) -> Self {
        self.sorted_percent = sorted_percent;
        self
    }

    /// Set whether random inputs are drawn without replacement
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set whether inputs are converted to floating point
    pub fn with_float(mut self, as_float: bool) -> Self {
        self.as_float = as_float;
        self
    }

    /// Seed the random source for reproducible random/partial runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable post-trial output verification
    pub fn with_verify_output(mut self, verify: bool) -> Self {
        self.verify_output = verify;
        self
    }

    /// Reject any configuration the trial runner could not complete.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_size == 0 {
            return Err(ConfigError::ZeroInputSize);
        }
        if self.trial_count == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        check_request(
            self.strategy,
            self.input_size,
            self.unique,
            self.sorted_percent,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_experiment() {
        let config = ExperimentConfig::default();
        assert_eq!(config.input_size, 5000);
        assert_eq!(config.trial_count, 100);
        assert_eq!(config.strategy, InputStrategy::PartialSort);
        assert!((config.sorted_percent - 75.0).abs() < f64::EPSILON);
        assert!(!config.unique);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("random".parse::<InputStrategy>(), Ok(InputStrategy::Random));
        assert_eq!("fixed".parse::<InputStrategy>(), Ok(InputStrategy::FixedSeed));
        assert_eq!("Fixed-Seed".parse::<InputStrategy>(), Ok(InputStrategy::FixedSeed));
        assert_eq!("partial".parse::<InputStrategy>(), Ok(InputStrategy::PartialSort));
        assert_eq!(
            "sorted".parse::<InputStrategy>(),
            Err(ConfigError::UnknownStrategy("sorted".to_string()))
        );
    }

    #[test]
    fn test_strategy_round_trips_through_tag() {
        for strategy in [
            InputStrategy::Random,
            InputStrategy::FixedSeed,
            InputStrategy::PartialSort,
        ] {
            assert_eq!(strategy.tag().parse::<InputStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let config = ExperimentConfig::new(0, 10, InputStrategy::Random);
        assert_eq!(config.validate(), Err(ConfigError::ZeroInputSize));

        let config = ExperimentConfig::new(10, 0, InputStrategy::Random);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrials));
    }

    #[test]
    fn test_validate_rejects_bad_percent() {
        let config = ExperimentConfig::new(10, 5, InputStrategy::PartialSort).with_sorted_percent(150.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Input(GenerateError::InvalidPercent(150.0)))
        );

        // Percent is irrelevant for other strategies
        let config = ExperimentConfig::new(10, 5, InputStrategy::FixedSeed).with_sorted_percent(150.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_duplicate_range() {
        let config = ExperimentConfig::new(1, 5, InputStrategy::Random).with_unique(false);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Input(GenerateError::EmptyRange { size: 1 }))
        );

        let config = ExperimentConfig::new(1, 5, InputStrategy::Random).with_unique(true);
        assert!(config.validate().is_ok());
    }
}

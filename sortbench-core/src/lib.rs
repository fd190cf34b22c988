#![warn(missing_docs)]
//! SortBench Core - Instrumented Trials
//!
//! This crate provides the measurement side of SortBench:
//! - `Sorter` trait with instrumented selection and insertion sort
//! - Reproducible input generation over an explicit random source
//! - Wall-clock and process CPU-time timing
//! - `TrialRunner` that collects index-aligned metric series

mod config;
mod generate;
mod measure;
mod runner;
mod series;
mod sort;

pub use config::{ConfigError, ExperimentConfig, InputStrategy};
pub use generate::{
    GenerateError, InputArray, InputGenerator, UNIQUE_POPULATION_FACTOR, check_request,
};
/// Whether this platform provides a process CPU-time clock.
/// When `false`, CPU-time samples are reported as 0.
pub use measure::HAS_CPU_CLOCK;
pub use measure::{Elapsed, Timer};
pub use runner::{TrialError, TrialRunner};
pub use series::{Metric, TrialSample, TrialSeries};
pub use sort::{
    Algorithm, InsertionSort, OpCounts, SelectionSort, SortError, SortResult, Sorter,
};

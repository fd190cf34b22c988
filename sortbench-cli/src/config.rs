//! Configuration loading from sortbench.toml
//!
//! SortBench configuration can be specified in a `sortbench.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory. Command line flags override file values.

use serde::{Deserialize, Serialize};
use sortbench_core::ExperimentConfig;
use sortbench_report::DEFAULT_PLOT_SIZE;
use sortbench_stats::TestKind;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`SortbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// SortBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Experiment parameters
    #[serde(default)]
    pub experiment: ExperimentConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Visualization configuration
    #[serde(default)]
    pub visuals: VisualsConfig,
    /// Statistical analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Terminal output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory for per-algorithm CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory for box plots
    #[serde(default = "default_plots_dir")]
    pub plots_dir: PathBuf,
    /// Render box plots
    #[serde(default = "default_enabled")]
    pub plots: bool,
    /// Write CSV files
    #[serde(default = "default_enabled")]
    pub csv: bool,
    /// Also write the JSON report to this file
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            data_dir: default_data_dir(),
            plots_dir: default_plots_dir(),
            plots: default_enabled(),
            csv: default_enabled(),
            report_path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_plots_dir() -> PathBuf {
    PathBuf::from("plots")
}
fn default_enabled() -> bool {
    true
}

/// Visualization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualsConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_PLOT_SIZE.0
}
fn default_height() -> u32 {
    DEFAULT_PLOT_SIZE.1
}

/// Statistical analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Two-sample test: "student" or "welch"
    #[serde(default)]
    pub test: TestKind,
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "Ignoring config: {}", e);
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SortBench Configuration

[experiment]
# Elements per generated array
input_size = 5000
# Trials per algorithm
trials = 100
# Input strategy: "random", "fixed" or "partial"
strategy = "partial"
# Ascending prefix percentage for the partial strategy
sorted_percent = 75.0
# Draw distinct values for the random strategy
unique = false
# Convert inputs to floating point
as_float = false
# Seed for the random and partial strategies (uncomment to enable)
# seed = 42
# Check every sorted output (outside the timed region)
verify_output = true

[output]
# Terminal output format: human or json
format = "human"
# Per-algorithm CSV directory
data_dir = "data"
# Box plot directory
plots_dir = "plots"
# Render box plots
plots = true
# Write CSV files
csv = true
# Also write the JSON report to a file (uncomment to enable)
# report_path = "sortbench.json"

[visuals]
# Chart dimensions
width = 1000
height = 600

[analysis]
# Two-sample test: student or welch
test = "student"
"#
        .to_string()
    }
}

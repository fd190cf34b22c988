#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Command line front end for the sorting experiment. Use
//! `sortbench_cli::run()` in a main function to get the full CLI: configuration
//! discovery, both trial batches with a progress bar, statistics, significance
//! tests, CSV files, box plots and the terminal or JSON report.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     sortbench_cli::run()
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    AlgorithmRun, Executor, build_report, build_report_meta, compute_statistics,
    format_human_output,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sortbench_core::{Algorithm, ExperimentConfig, InputStrategy, Sorter, TrialSeries};
use sortbench_report::{
    ExperimentReport, OutputFormat, generate_json_report, render_all_plots, write_csv,
    write_json_report,
};
use sortbench_stats::{MIN_SAMPLES, TestKind};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(
    author,
    version,
    about = "SortBench - compare selection sort and insertion sort empirically"
)]
pub struct Cli {
    /// Optional subcommand (Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: sortbench.toml discovered upwards)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Elements per generated array
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Trials per algorithm
    #[arg(short = 'n', long, global = true)]
    pub trials: Option<usize>,

    /// Input strategy: random, fixed or partial
    #[arg(long, global = true)]
    pub strategy: Option<InputStrategy>,

    /// Ascending prefix percentage for the partial strategy
    #[arg(long, global = true)]
    pub sorted_percent: Option<f64>,

    /// Draw distinct values for the random strategy
    #[arg(long, global = true, conflicts_with = "duplicates")]
    pub unique: bool,

    /// Allow duplicate values for the random strategy
    #[arg(long, global = true)]
    pub duplicates: bool,

    /// Sort floating point inputs instead of integers
    #[arg(long, global = true)]
    pub float: bool,

    /// Seed for the random and partial strategies
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip checking sorter output
    #[arg(long, global = true)]
    pub no_verify: bool,

    /// Output format: human, json
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Directory for per-algorithm CSV files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory for box plots
    #[arg(long, global = true)]
    pub plots_dir: Option<PathBuf>,

    /// Do not render box plots
    #[arg(long, global = true)]
    pub no_plots: bool,

    /// Do not write CSV files
    #[arg(long, global = true)]
    pub no_csv: bool,

    /// Also write the JSON report to this file
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    /// Use Welch's t-test instead of Student's
    #[arg(long, global = true)]
    pub welch: bool,

    /// Hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the experiment (default)
    Run,
    /// Print a default sortbench.toml
    Init,
}

/// Everything a run needs: `sortbench.toml` values with CLI overrides applied
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Experiment parameters
    pub experiment: ExperimentConfig,
    /// Report format
    pub format: OutputFormat,
    /// Formatted report destination (stdout when `None`)
    pub output: Option<PathBuf>,
    /// CSV directory (no CSV when `None`)
    pub data_dir: Option<PathBuf>,
    /// Plot directory (no plots when `None`)
    pub plots_dir: Option<PathBuf>,
    /// Plot size in pixels
    pub plot_size: (u32, u32),
    /// Extra JSON report file
    pub report_path: Option<PathBuf>,
    /// Significance test variant
    pub test: TestKind,
    /// Draw the progress bar
    pub show_progress: bool,
}

impl RunSettings {
    /// Layer CLI flags over a loaded configuration.
    pub fn resolve(cli: &Cli, config: SortbenchConfig) -> anyhow::Result<Self> {
        let mut experiment = config.experiment;
        if let Some(size) = cli.size {
            experiment.input_size = size;
        }
        if let Some(trials) = cli.trials {
            experiment.trial_count = trials;
        }
        if let Some(strategy) = cli.strategy {
            experiment.strategy = strategy;
        }
        if let Some(percent) = cli.sorted_percent {
            experiment.sorted_percent = percent;
        }
        if cli.unique {
            experiment.unique = true;
        } else if cli.duplicates {
            experiment.unique = false;
        }
        if cli.float {
            experiment.as_float = true;
        }
        if cli.seed.is_some() {
            experiment.seed = cli.seed;
        }
        if cli.no_verify {
            experiment.verify_output = false;
        }

        let format_str = cli.format.as_deref().unwrap_or(&config.output.format);
        let format: OutputFormat = format_str.parse().map_err(anyhow::Error::msg)?;

        let output_cfg = config.output;
        let data_dir = (output_cfg.csv && !cli.no_csv)
            .then(|| cli.data_dir.clone().unwrap_or(output_cfg.data_dir));
        let plots_dir = (output_cfg.plots && !cli.no_plots)
            .then(|| cli.plots_dir.clone().unwrap_or(output_cfg.plots_dir));

        let test = if cli.welch {
            TestKind::Welch
        } else {
            config.analysis.test
        };

        Ok(Self {
            experiment,
            format,
            output: cli.output.clone(),
            data_dir,
            plots_dir,
            plot_size: (config.visuals.width, config.visuals.height),
            report_path: cli.report.clone().or(output_cfg.report_path),
            test,
            show_progress: !cli.quiet,
        })
    }
}

/// Run the SortBench CLI with the process arguments.
/// This is the main entry point of the `sortbench` binary.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging (stderr, so stdout carries only the report)
    let filter = if cli.verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", SortbenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            let config = match &cli.config {
                Some(path) => SortbenchConfig::load(path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                // Discover sortbench.toml configuration (CLI flags override)
                None => SortbenchConfig::discover().unwrap_or_default(),
            };
            let settings = RunSettings::resolve(&cli, config)?;
            let report = run_experiment(&settings)?;
            emit_report(&settings, &report)
        }
    }
}

/// Run both batches, compute statistics, then write CSV, plots and the JSON
/// report file.
///
/// Nothing is written unless both batches and all statistics succeed.
pub fn run_experiment(settings: &RunSettings) -> anyhow::Result<ExperimentReport> {
    let experiment = &settings.experiment;
    experiment.validate()?;
    if experiment.trial_count < MIN_SAMPLES {
        anyhow::bail!(
            "at least {} trials are needed for statistics, got {}",
            MIN_SAMPLES,
            experiment.trial_count
        );
    }

    tracing::info!(
        input_size = experiment.input_size,
        trials = experiment.trial_count,
        strategy = %experiment.strategy,
        test = ?settings.test,
        "Running experiment"
    );
    let start_time = Instant::now();

    let runs = Executor::new(experiment.clone())
        .with_progress(settings.show_progress)
        .execute(&Algorithm::ALL)?;
    let report = build_report(&runs, experiment, settings.test)?;

    write_outputs(settings, &runs, &report)?;

    tracing::info!(
        duration_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        "Experiment complete"
    );
    Ok(report)
}

fn write_outputs(
    settings: &RunSettings,
    runs: &[AlgorithmRun],
    report: &ExperimentReport,
) -> anyhow::Result<()> {
    if let Some(dir) = &settings.data_dir {
        for run in runs {
            let path = dir.join(format!("{}.csv", run.algorithm.slug()));
            write_csv(&path, &run.series)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        tracing::info!(dir = %dir.display(), files = runs.len(), "CSV written");
    }

    if let Some(dir) = &settings.plots_dir {
        let groups: Vec<(&str, &TrialSeries)> = runs
            .iter()
            .map(|run| (run.algorithm.name(), &run.series))
            .collect();
        render_all_plots(dir, &groups, settings.plot_size)
            .with_context(|| format!("failed to render plots into {}", dir.display()))?;
    }

    if let Some(path) = &settings.report_path {
        write_json_report(path, report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "JSON report written");
    }

    Ok(())
}

fn emit_report(settings: &RunSettings, report: &ExperimentReport) -> anyhow::Result<()> {
    let output = match settings.format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Human => format_human_output(report),
    };

    if let Some(ref path) = settings.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sortbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_come_from_config() {
        let settings = RunSettings::resolve(&parse(&[]), SortbenchConfig::default()).unwrap();

        assert_eq!(settings.experiment, ExperimentConfig::default());
        assert_eq!(settings.format, OutputFormat::Human);
        assert_eq!(settings.data_dir, Some(PathBuf::from("data")));
        assert_eq!(settings.plots_dir, Some(PathBuf::from("plots")));
        assert_eq!(settings.plot_size, (1000, 600));
        assert_eq!(settings.test, TestKind::Student);
        assert!(settings.show_progress);
    }

    #[test]
    fn cli_flags_override_config() {
        let mut config = SortbenchConfig::default();
        config.experiment.unique = true;
        config.output.format = "json".to_string();

        let cli = parse(&[
            "--size",
            "300",
            "-n",
            "7",
            "--strategy",
            "random",
            "--duplicates",
            "--float",
            "--seed",
            "99",
            "--format",
            "human",
            "--no-plots",
            "--data-dir",
            "out/csv",
            "--welch",
            "--quiet",
        ]);
        let settings = RunSettings::resolve(&cli, config).unwrap();

        assert_eq!(settings.experiment.input_size, 300);
        assert_eq!(settings.experiment.trial_count, 7);
        assert_eq!(settings.experiment.strategy, InputStrategy::Random);
        assert!(!settings.experiment.unique);
        assert!(settings.experiment.as_float);
        assert_eq!(settings.experiment.seed, Some(99));
        assert_eq!(settings.format, OutputFormat::Human);
        assert_eq!(settings.plots_dir, None);
        assert_eq!(settings.data_dir, Some(PathBuf::from("out/csv")));
        assert_eq!(settings.test, TestKind::Welch);
        assert!(!settings.show_progress);
    }

    #[test]
    fn unknown_strategy_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["sortbench", "--strategy", "bogo"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        let cli = parse(&["--format", "html"]);
        assert!(RunSettings::resolve(&cli, SortbenchConfig::default()).is_err());
    }

    #[test]
    fn unique_conflicts_with_duplicates() {
        let result = Cli::try_parse_from(["sortbench", "--unique", "--duplicates"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommands_parse() {
        assert!(matches!(parse(&["init"]).command, Some(Commands::Init)));
        assert!(matches!(
            parse(&["run", "--size", "10"]).command,
            Some(Commands::Run)
        ));
    }

    #[test]
    fn run_subcommand_accepts_flags() {
        let cli = parse(&[
            "run",
            "--size",
            "10",
            "-n",
            "4",
            "--strategy",
            "fixed",
            "--welch",
            "-q",
        ]);
        assert!(matches!(cli.command, Some(Commands::Run)));

        let settings = RunSettings::resolve(&cli, SortbenchConfig::default()).unwrap();
        assert_eq!(settings.experiment.input_size, 10);
        assert_eq!(settings.experiment.trial_count, 4);
        assert_eq!(settings.experiment.strategy, InputStrategy::FixedSeed);
        assert_eq!(settings.test, TestKind::Welch);
        assert!(!settings.show_progress);

        // Flags before the subcommand still apply
        let cli = parse(&["--size", "12", "run", "-n", "3"]);
        let settings = RunSettings::resolve(&cli, SortbenchConfig::default()).unwrap();
        assert_eq!(settings.experiment.input_size, 12);
        assert_eq!(settings.experiment.trial_count, 3);

        assert!(Cli::try_parse_from(["sortbench", "run", "--unique", "--duplicates"]).is_err());
    }

    fn quiet_settings(experiment: ExperimentConfig, root: &std::path::Path) -> RunSettings {
        RunSettings {
            experiment,
            format: OutputFormat::Json,
            output: None,
            data_dir: Some(root.join("data")),
            plots_dir: None,
            plot_size: (400, 300),
            report_path: Some(root.join("report.json")),
            test: TestKind::Student,
            show_progress: false,
        }
    }

    #[test]
    fn run_experiment_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let experiment = ExperimentConfig::new(40, 5, InputStrategy::FixedSeed);
        let settings = quiet_settings(experiment, dir.path());

        let report = run_experiment(&settings).unwrap();

        assert_eq!(report.algorithms.len(), 2);
        let csv = std::fs::read_to_string(dir.path().join("data/selection_sort.csv")).unwrap();
        assert_eq!(csv.lines().count(), 6);
        assert!(dir.path().join("data/insertion_sort.csv").exists());
        assert!(dir.path().join("report.json").exists());
    }

    #[test]
    fn failed_validation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // Duplicates drawn from [1, size / 2] need size >= 2
        let experiment = ExperimentConfig::new(1, 3, InputStrategy::Random).with_unique(false);
        let settings = quiet_settings(experiment, dir.path());

        assert!(run_experiment(&settings).is_err());
        assert!(!dir.path().join("data").exists());
        assert!(!dir.path().join("report.json").exists());
    }

    #[test]
    fn single_trial_rejected_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let settings = quiet_settings(
            ExperimentConfig::new(10, 1, InputStrategy::FixedSeed),
            dir.path(),
        );
        let err = run_experiment(&settings).unwrap_err();
        assert!(err.to_string().contains("at least 2 trials"));
    }
}

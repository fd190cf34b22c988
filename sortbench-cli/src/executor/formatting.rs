//! Output Formatting
//!
//! Human-readable output formatting for experiment reports.
//!
//! Generates terminal-friendly output with:
//! - The experiment configuration
//! - Batch time, then range, mean, median and standard deviation of every
//!   metric per algorithm
//! - One t-test block per metric with its significance verdict

use sortbench_core::{ExperimentConfig, InputStrategy};
use sortbench_report::{AlgorithmReport, ExperimentReport, MetricComparison};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &ExperimentReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SortBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&describe_config(&report.meta.config));
    output.push_str(&format!("Test: {}\n\n", report.meta.test));

    for algorithm in &report.algorithms {
        output.push_str(&format_algorithm(algorithm));
    }

    if !report.comparisons.is_empty() {
        output.push_str("Significance Tests\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for cmp in &report.comparisons {
            output.push_str(&format_comparison(cmp));
        }
    }

    output
}

fn describe_config(config: &ExperimentConfig) -> String {
    let strategy = match config.strategy {
        InputStrategy::PartialSort => format!("partial ({}% sorted)", config.sorted_percent),
        InputStrategy::Random if config.unique => "random (unique)".to_string(),
        InputStrategy::Random => "random (duplicates)".to_string(),
        InputStrategy::FixedSeed => "fixed (seed = trial index)".to_string(),
    };
    let kind = if config.as_float { "float" } else { "int" };
    let seed = config
        .seed
        .map(|s| format!(", seed {}", s))
        .unwrap_or_default();

    format!(
        "Input: {} {} elements, {}, {} trials{}\n",
        config.input_size, kind, strategy, config.trial_count, seed
    )
}

fn format_algorithm(algorithm: &AlgorithmReport) -> String {
    let mut output = format!("{}\n", algorithm.name);
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if let Some(ms) = algorithm.duration_ms {
        output.push_str(&format!("  Batch time: {:.2} ms\n", ms));
    }

    for summary in &algorithm.metrics {
        let s = &summary.stats;
        output.push_str(&format!("  {}:\n", summary.metric));
        output.push_str(&format!("      Range: {:.2}\n", s.range));
        output.push_str(&format!("      Mean: {:.2}\n", s.mean));
        output.push_str(&format!("      Median: {:.2}\n", s.median));
        output.push_str(&format!("      Std Dev: {:.2}\n", s.std_dev));
    }

    output.push('\n');
    output
}

fn format_comparison(cmp: &MetricComparison) -> String {
    let test = &cmp.result.test;
    format!(
        "T-Test between {} and {} ({}):\n  T-Statistic: {:.4}\n  P-Value: {:.4}\n  Result: {}\n\n",
        cmp.baseline,
        cmp.candidate,
        cmp.metric,
        test.statistic,
        test.p_value,
        cmp.result.significance
    )
}

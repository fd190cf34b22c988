//! Box Plots
//!
//! One PNG per metric. Each chart places one box per algorithm so the two
//! distributions can be compared side by side.

use crate::error::ReportError;
use plotters::prelude::*;
use sortbench_core::{Metric, TrialSeries};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Default image size in pixels
pub const DEFAULT_PLOT_SIZE: (u32, u32) = (1000, 600);

/// Where the plot for `metric` is written inside `dir`.
///
/// ```
/// # use sortbench_core::Metric;
/// # use sortbench_report::plot_path;
/// # use std::path::Path;
/// let path = plot_path(Path::new("plots"), Metric::WallTime);
/// assert_eq!(path, Path::new("plots/wall_time_(ms)_boxplot.png"));
/// ```
pub fn plot_path(dir: &Path, metric: Metric) -> PathBuf {
    dir.join(format!("{}_boxplot.png", metric.file_stem()))
}

/// Draw one box plot of `metric` for every `(name, series)` group.
pub fn render_box_plot(
    path: &Path,
    metric: Metric,
    groups: &[(&str, &TrialSeries)],
    size: (u32, u32),
) -> Result<(), ReportError> {
    let columns = collect_columns(metric, groups)?;
    draw(path, metric, &columns, size).map_err(|e| ReportError::Plot(e.to_string()))
}

/// Render every metric into `dir`, returning the written paths in
/// [`Metric::ALL`] order.
pub fn render_all_plots(
    dir: &Path,
    groups: &[(&str, &TrialSeries)],
    size: (u32, u32),
) -> Result<Vec<PathBuf>, ReportError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let path = plot_path(dir, metric);
        render_box_plot(&path, metric, groups, size)?;
        tracing::debug!(path = %path.display(), %metric, "Rendered box plot");
        written.push(path);
    }

    tracing::info!(dir = %dir.display(), plots = written.len(), "Plots written");
    Ok(written)
}

fn collect_columns(
    metric: Metric,
    groups: &[(&str, &TrialSeries)],
) -> Result<Vec<(String, Vec<f64>)>, ReportError> {
    if groups.is_empty() {
        return Err(ReportError::Plot("no series to plot".to_string()));
    }

    groups
        .iter()
        .map(|(name, series)| {
            if series.is_empty() {
                Err(ReportError::Plot(format!("{} has no samples", name)))
            } else {
                Ok((name.to_string(), series.metric(metric)))
            }
        })
        .collect()
}

/// Y-axis range covering every sample with a 10% margin
fn value_range(columns: &[(String, Vec<f64>)]) -> Range<f32> {
    let (lo, hi) = columns
        .iter()
        .flat_map(|(_, values)| values.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    // Constant series (e.g. selection sort comparisons) still need a visible band
    let pad = if hi > lo {
        (hi - lo) * 0.1
    } else {
        lo.abs().max(1.0) * 0.1
    };
    (lo - pad) as f32..(hi + pad) as f32
}

fn draw(
    path: &Path,
    metric: Metric,
    columns: &[(String, Vec<f64>)],
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} Comparison", metric.name()), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(labels[..].into_segmented(), value_range(columns))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Algorithm")
        .y_desc(metric.name())
        .draw()?;

    chart.draw_series(
        labels
            .iter()
            .zip(columns)
            .map(|(label, (_, values))| {
                Boxplot::new_vertical(SegmentValue::CenterOf(label), &Quartiles::new(values))
            }),
    )?;

    root.present()?;
    Ok(())
}

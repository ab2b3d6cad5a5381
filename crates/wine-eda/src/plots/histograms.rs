//! Per-column histogram grid with mean and median markers.

use crate::audit::statistics::numeric_values;
use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::types::AuditReport;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::PathBuf;

const CHART: &str = "distribution histograms";
const FILE_NAME: &str = "distribution_histograms.svg";
const COLS: usize = 3;

/// Render one histogram per summarized column, with vertical mean and
/// median marker lines, into a single SVG grid.
pub fn render_histograms(
    df: &DataFrame,
    report: &AuditReport,
    config: &AuditConfig,
) -> Result<PathBuf> {
    let path = super::chart_path(&config.graphs_dir(), FILE_NAME)?;

    let n = report.distributions.len();
    if n == 0 {
        return Err(AuditError::render(CHART, "no numeric columns to plot"));
    }
    let rows = n.div_ceil(COLS);

    let root = SVGBackend::new(&path, (1500, (rows as u32) * 320)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AuditError::render(CHART, e))?;
    let areas = root.split_evenly((rows, COLS));

    for (dist, area) in report.distributions.iter().zip(areas.iter()) {
        let series = df
            .column(&dist.column)
            .map_err(|_| AuditError::ColumnNotFound(dist.column.clone()))?;
        let values = numeric_values(series.as_materialized_series())?;
        let bins = super::bin_values(&values, config.histogram_bins);

        let (x_lo, x_hi) = super::value_range(&values);
        let y_max = bins.iter().map(|(_, _, c)| *c).max().unwrap_or(1);
        let y_max = y_max + (y_max / 10).max(1);

        let mut chart = ChartBuilder::on(area)
            .caption(format!("Distribution of {}", dist.column), ("sans-serif", 14))
            .margin(8)
            .x_label_area_size(24)
            .y_label_area_size(40)
            .build_cartesian_2d(x_lo..x_hi, 0u32..y_max)
            .map_err(|e| AuditError::render(CHART, e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(5)
            .y_labels(4)
            .y_desc("Frequency")
            .draw()
            .map_err(|e| AuditError::render(CHART, e))?;

        chart
            .draw_series(bins.iter().map(|(lo, hi, count)| {
                Rectangle::new([(*lo, 0u32), (*hi, *count)], BLUE.mix(0.4).filled())
            }))
            .map_err(|e| AuditError::render(CHART, e))?;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(dist.mean, 0u32), (dist.mean, y_max)],
                RED.stroke_width(2),
            )))
            .map_err(|e| AuditError::render(CHART, e))?
            .label(format!("Mean: {:.2}", dist.mean))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(dist.median, 0u32), (dist.median, y_max)],
                GREEN.stroke_width(2),
            )))
            .map_err(|e| AuditError::render(CHART, e))?
            .label(format!("Median: {:.2}", dist.median))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], GREEN.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| AuditError::render(CHART, e))?;
    }

    root.present().map_err(|e| AuditError::render(CHART, e))?;
    // The backend still borrows `path` until `root` drops
    Ok(path.clone())
}

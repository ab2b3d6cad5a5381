//! Per-feature boxplots grouped by the target label.

use crate::audit::statistics::{is_numeric_dtype, numeric_options};
use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::collections::BTreeMap;
use std::path::PathBuf;

const CHART: &str = "outlier boxplots";
const FILE_NAME: &str = "outlier_boxplots.svg";
const COLS: usize = 2;

/// Render one boxplot panel per numeric feature, with one box per value of
/// the target column (e.g. one box per quality grade).
pub fn render_boxplots(df: &DataFrame, config: &AuditConfig) -> Result<PathBuf> {
    let path = super::chart_path(&config.graphs_dir(), FILE_NAME)?;

    let target = df
        .column(&config.target_column)
        .map_err(|_| AuditError::ColumnNotFound(config.target_column.clone()))?;
    let target_values = numeric_options(target.as_materialized_series())?;

    // Feature columns: every numeric column except the target itself
    let features: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()) && col.name().as_str() != config.target_column)
        .map(|col| col.name().to_string())
        .collect();
    if features.is_empty() {
        return Err(AuditError::render(CHART, "no numeric feature columns to plot"));
    }

    let rows = features.len().div_ceil(COLS);
    let root = SVGBackend::new(&path, (1400, (rows as u32) * 280)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AuditError::render(CHART, e))?;
    let areas = root.split_evenly((rows, COLS));

    for (feature, area) in features.iter().zip(areas.iter()) {
        let series = df.column(feature)?;
        let feature_values = numeric_options(series.as_materialized_series())?;

        // Group feature values by the target label, row-aligned
        let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for (label, value) in target_values.iter().zip(feature_values.iter()) {
            if let (Some(label), Some(value)) = (label, value) {
                groups.entry(label.round() as i32).or_default().push(*value);
            }
        }
        if groups.is_empty() {
            continue;
        }

        let q_min = *groups.keys().next().unwrap_or(&0);
        let q_max = *groups.keys().next_back().unwrap_or(&0);
        let all_values: Vec<f64> = groups.values().flatten().copied().collect();
        // Quartiles yields f32 whiskers, so the value axis is f32 too
        let (y_lo, y_hi) = super::value_range(&all_values);
        let (y_lo, y_hi) = (y_lo as f32, y_hi as f32);

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("{} vs {}", config.target_column, feature),
                ("sans-serif", 14),
            )
            .margin(8)
            .x_label_area_size(24)
            .y_label_area_size(48)
            .build_cartesian_2d((q_min..q_max + 1).into_segmented(), y_lo..y_hi)
            .map_err(|e| AuditError::render(CHART, e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .y_labels(5)
            .x_desc(config.target_column.clone())
            .y_desc(feature.clone())
            .draw()
            .map_err(|e| AuditError::render(CHART, e))?;

        chart
            .draw_series(groups.iter().map(|(label, values)| {
                Boxplot::new_vertical(
                    SegmentValue::CenterOf(*label),
                    &Quartiles::new(values),
                )
                .width(18)
                .whisker_width(0.5)
                .style(BLUE)
            }))
            .map_err(|e| AuditError::render(CHART, e))?;
    }

    root.present().map_err(|e| AuditError::render(CHART, e))?;
    // The backend still borrows `path` until `root` drops
    Ok(path.clone())
}

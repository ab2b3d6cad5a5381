//! Annotated correlation heatmap.

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::types::CorrelationMatrix;
use plotters::prelude::*;
use std::path::PathBuf;

const CHART: &str = "correlation heatmap";
const FILE_NAME: &str = "correlation_heatmap.svg";

/// Render the correlation matrix as a blue-white-red heatmap with one
/// annotated cell per column pair.
pub fn render_heatmap(matrix: &CorrelationMatrix, config: &AuditConfig) -> Result<PathBuf> {
    let path = super::chart_path(&config.graphs_dir(), FILE_NAME)?;

    let n = matrix.columns.len();
    if n == 0 {
        return Err(AuditError::render(CHART, "no numeric columns to correlate"));
    }

    let root = SVGBackend::new(&path, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AuditError::render(CHART, e))?;

    let names = matrix.columns.clone();
    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation map", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(110)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..n as f64, 0f64..n as f64)
        .map_err(|e| AuditError::render(CHART, e))?;

    let x_names = names.clone();
    let y_names = names.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&move |v: &f64| {
            x_names
                .get(v.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_label_formatter(&move |v: &f64| {
            y_names
                .get(v.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_label_style(("sans-serif", 11).into_font().transform(FontTransform::Rotate90))
        .y_label_style(("sans-serif", 11))
        .draw()
        .map_err(|e| AuditError::render(CHART, e))?;

    chart
        .draw_series((0..n).flat_map(move |i| {
            (0..n).map(move |j| {
                Rectangle::new(
                    [(i as f64, j as f64), (i as f64 + 1.0, j as f64 + 1.0)],
                    correlation_color(matrix.values[i][j]).filled(),
                )
            })
        }))
        .map_err(|e| AuditError::render(CHART, e))?;

    chart
        .draw_series((0..n).flat_map(move |i| {
            (0..n).map(move |j| {
                Text::new(
                    format!("{:.2}", matrix.values[i][j]),
                    (i as f64 + 0.28, j as f64 + 0.55),
                    ("sans-serif", 12).into_font().color(&BLACK),
                )
            })
        }))
        .map_err(|e| AuditError::render(CHART, e))?;

    root.present().map_err(|e| AuditError::render(CHART, e))?;
    // The backend still borrows `path` until `root` drops
    Ok(path.clone())
}

/// Map a correlation in [-1, 1] onto a blue-white-red ramp.
fn correlation_color(r: f64) -> RGBColor {
    let r = r.clamp(-1.0, 1.0);
    let fade = (255.0 * (1.0 - r.abs())) as u8;
    if r >= 0.0 {
        RGBColor(255, fade, fade)
    } else {
        RGBColor(fade, fade, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_color_endpoints() {
        assert_eq!(correlation_color(1.0), RGBColor(255, 0, 0));
        assert_eq!(correlation_color(-1.0), RGBColor(0, 0, 255));
        assert_eq!(correlation_color(0.0), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_correlation_color_clamps() {
        assert_eq!(correlation_color(2.0), RGBColor(255, 0, 0));
    }
}

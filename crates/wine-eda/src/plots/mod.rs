//! Chart rendering.
//!
//! Pass-through visualizations of the audited table: a histogram grid, a
//! boxplot panel grouped by the target label, and a correlation heatmap.
//! Each renderer creates the graphs directory if absent, writes one SVG
//! file and returns its path. Rendering failures map to
//! [`AuditError::Render`]; writes are fire-and-forget, there is no
//! transactional guarantee.

mod boxplots;
mod heatmap;
mod histograms;

pub use boxplots::render_boxplots;
pub use heatmap::render_heatmap;
pub use histograms::render_histograms;

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Create the graphs directory if needed and return the target file path.
pub(crate) fn chart_path(graphs_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(graphs_dir)?;
    let path = graphs_dir.join(file_name);
    info!("Rendering chart: {}", path.display());
    Ok(path)
}

/// Histogram bins as (lower edge, upper edge, count).
pub(crate) fn bin_values(values: &[f64], bins: usize) -> Vec<(f64, f64, u32)> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        // Constant column: widen so the single bar is visible
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u32; bins];
    for v in values {
        let mut idx = ((v - lo) / width) as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (lo + i as f64 * width, lo + (i + 1) as f64 * width, c))
        .collect()
}

/// Padded (min, max) range for a value axis.
pub(crate) fn value_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(0.5);
    (lo - pad, hi + pad)
}

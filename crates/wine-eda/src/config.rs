//! Configuration for the audit run.
//!
//! Builder pattern with validation, so both the CLI and library callers
//! construct the same `AuditConfig`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a dataset audit run.
///
/// Use [`AuditConfig::builder()`] for a fluent API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Output directory for the cleaned CSV and reports.
    /// Default: "outputs"
    pub output_dir: PathBuf,

    /// Subdirectory of `output_dir` for rendered charts.
    /// Default: "graphs"
    pub graphs_subdir: String,

    /// Custom name for the cleaned CSV (without extension).
    /// If None, `<input_stem>_clean` is used.
    pub cleaned_name: Option<String>,

    /// Column used as the grouping label for boxplots.
    /// Default: "quality"
    pub target_column: String,

    /// Number of histogram bins per column.
    /// Default: 30
    pub histogram_bins: usize,

    /// Number of rows shown in the load preview.
    /// Default: 5
    pub preview_rows: usize,

    /// Whether to render charts at all.
    /// Default: true
    pub render_plots: bool,

    /// Whether to write a JSON report next to the cleaned CSV.
    /// Default: false
    pub emit_report: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            graphs_subdir: "graphs".to_string(),
            cleaned_name: None,
            target_column: "quality".to_string(),
            histogram_bins: 30,
            preview_rows: 5,
            render_plots: true,
            emit_report: false,
        }
    }
}

impl AuditConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }

    /// Directory where charts are written.
    pub fn graphs_dir(&self) -> PathBuf {
        self.output_dir.join(&self.graphs_subdir)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidHistogramBins(
                self.histogram_bins,
            ));
        }

        if self.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidPreviewRows(self.preview_rows));
        }

        if self.target_column.is_empty() {
            return Err(ConfigValidationError::EmptyTargetColumn);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid histogram bins: {0} (must be at least 1)")]
    InvalidHistogramBins(usize),

    #[error("Invalid preview rows: {0} (must be at least 1)")]
    InvalidPreviewRows(usize),

    #[error("Target column name must not be empty")]
    EmptyTargetColumn,
}

/// Builder for [`AuditConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AuditConfigBuilder {
    output_dir: Option<PathBuf>,
    graphs_subdir: Option<String>,
    cleaned_name: Option<String>,
    target_column: Option<String>,
    histogram_bins: Option<usize>,
    preview_rows: Option<usize>,
    render_plots: Option<bool>,
    emit_report: Option<bool>,
}

impl AuditConfigBuilder {
    /// Set the output directory for cleaned data and reports.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the charts subdirectory name.
    pub fn graphs_subdir(mut self, name: impl Into<String>) -> Self {
        self.graphs_subdir = Some(name.into());
        self
    }

    /// Set a custom cleaned CSV name (without extension).
    pub fn cleaned_name(mut self, name: impl Into<String>) -> Self {
        self.cleaned_name = Some(name.into());
        self
    }

    /// Set the column used to group boxplots.
    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the number of preview rows printed after loading.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Enable or disable chart rendering.
    pub fn render_plots(mut self, render: bool) -> Self {
        self.render_plots = Some(render);
        self
    }

    /// Enable or disable the JSON report file.
    pub fn emit_report(mut self, emit: bool) -> Self {
        self.emit_report = Some(emit);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AuditConfig` or an error if validation fails.
    pub fn build(self) -> Result<AuditConfig, ConfigValidationError> {
        let config = AuditConfig {
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from("outputs")),
            graphs_subdir: self.graphs_subdir.unwrap_or_else(|| "graphs".to_string()),
            cleaned_name: self.cleaned_name,
            target_column: self.target_column.unwrap_or_else(|| "quality".to_string()),
            histogram_bins: self.histogram_bins.unwrap_or(30),
            preview_rows: self.preview_rows.unwrap_or(5),
            render_plots: self.render_plots.unwrap_or(true),
            emit_report: self.emit_report.unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert_eq!(config.target_column, "quality");
        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.preview_rows, 5);
        assert!(config.render_plots);
        assert!(!config.emit_report);
    }

    #[test]
    fn test_builder_defaults() {
        let config = AuditConfig::builder().build().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
        assert_eq!(config.graphs_dir(), PathBuf::from("outputs/graphs"));
    }

    #[test]
    fn test_builder_custom_values() {
        let config = AuditConfig::builder()
            .output_dir("wine/out")
            .graphs_subdir("figures")
            .target_column("rating")
            .histogram_bins(20)
            .render_plots(false)
            .build()
            .unwrap();

        assert_eq!(config.graphs_dir(), PathBuf::from("wine/out/figures"));
        assert_eq!(config.target_column, "rating");
        assert_eq!(config.histogram_bins, 20);
        assert!(!config.render_plots);
    }

    #[test]
    fn test_validation_zero_bins() {
        let result = AuditConfig::builder().histogram_bins(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidHistogramBins(0)
        ));
    }

    #[test]
    fn test_validation_empty_target() {
        let result = AuditConfig::builder().target_column("").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyTargetColumn
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = AuditConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AuditConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.target_column, deserialized.target_column);
        assert_eq!(config.histogram_bins, deserialized.histogram_bins);
    }
}

//! Error types for the dataset audit.
//!
//! One `thiserror` hierarchy covers the whole run. Load-time failures are
//! classified into the taxonomy by the loader; the binary propagates them
//! and terminates instead of continuing with a missing table.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The source file does not exist.
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    /// The source file contains no data rows.
    #[error("Input file is empty: {0}")]
    EmptyData(PathBuf),

    /// The source content is malformed and could not be parsed.
    #[error("Could not parse input: {0}")]
    Parse(String),

    /// A value-level problem (bad cast, non-numeric cell, ...).
    #[error("Invalid value: {0}")]
    Value(String),

    /// A requested column is missing from the table.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A chart could not be rendered or written.
    #[error("Failed to render {chart}: {reason}")]
    Render { chart: String, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for anything outside the taxonomy.
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AuditError>,
    },
}

impl AuditError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AuditError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Build a render error for a named chart.
    pub fn render(chart: impl Into<String>, reason: impl ToString) -> Self {
        AuditError::Render {
            chart: chart.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable code for each error variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::EmptyData(_) => "EMPTY_DATA",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Value(_) => "VALUE_ERROR",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::Render { .. } => "RENDER_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Unexpected(_) => "UNEXPECTED_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check whether this is a load-time failure.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::EmptyData(_) | Self::Parse(_) | Self::Value(_)
        ) || matches!(self, Self::WithContext { source, .. } if source.is_load_error())
    }
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AuditError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            AuditError::NotFound(PathBuf::from("missing.csv")).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AuditError::Parse("bad header".to_string()).error_code(),
            "PARSE_ERROR"
        );
    }

    #[test]
    fn test_is_load_error() {
        assert!(AuditError::EmptyData(PathBuf::from("empty.csv")).is_load_error());
        assert!(AuditError::Value("NaN in quality".to_string()).is_load_error());
        assert!(!AuditError::Unexpected("boom".to_string()).is_load_error());
        assert!(!AuditError::render("heatmap", "disk full").is_load_error());
    }

    #[test]
    fn test_with_context() {
        let error = AuditError::ColumnNotFound("quality".to_string())
            .with_context("While grouping boxplots");
        assert!(error.to_string().contains("While grouping boxplots"));
        // Preserves the original code and load-error status
        assert_eq!(error.error_code(), "COLUMN_NOT_FOUND");
        assert!(!error.is_load_error());
    }

    #[test]
    fn test_context_preserved_through_nesting() {
        let error = AuditError::Parse("row 7".to_string())
            .with_context("loading")
            .with_context("audit run");
        assert!(error.is_load_error());
        assert_eq!(error.error_code(), "PARSE_ERROR");
    }
}

//! Wine-Quality Dataset Auditor
//!
//! A one-shot exploratory-data-analysis library built with Rust and Polars.
//!
//! # Overview
//!
//! The crate loads a tabular CSV, removes exact duplicate rows, audits
//! missing values, classifies per-column skewness, computes Pearson
//! correlations, renders charts and exports the cleaned table:
//!
//! - **Loading**: CSV ingestion with fallback parsing strategies and a
//!   typed load-error taxonomy ([`AuditError`])
//! - **Audit**: deduplication, null audit, distribution summary and
//!   correlation matrix as a pure function of the in-memory table
//! - **Charts**: histogram grid, boxplots grouped by the target label and
//!   a correlation heatmap, written as SVG files
//! - **Export**: cleaned CSV that round-trips through the loader
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wine_eda::{AuditConfig, DatasetAuditor, loader, export, plots};
//! use std::path::Path;
//!
//! let config = AuditConfig::builder()
//!     .output_dir("outputs")
//!     .target_column("quality")
//!     .build()?;
//!
//! let df = loader::load_table(Path::new("winequality-red.csv"))?;
//! let (cleaned, report) = DatasetAuditor::audit(&df)?;
//!
//! plots::render_histograms(&cleaned, &report, &config)?;
//! plots::render_boxplots(&cleaned, &config)?;
//! plots::render_heatmap(&report.correlations, &config)?;
//!
//! export::write_cleaned_csv(&cleaned, Path::new("outputs/wine_clean.csv"))?;
//! ```
//!
//! Load failures terminate the run: [`loader::load_table`] returns a typed
//! error instead of letting downstream steps run against a missing table.

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod plots;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use audit::DatasetAuditor;
pub use config::{AuditConfig, AuditConfigBuilder, ConfigValidationError};
pub use error::{AuditError, Result as AuditResult, ResultExt};
pub use report::EdaReport;
pub use types::{AuditReport, ColumnDistribution, CorrelationMatrix, NullCount, Shape};

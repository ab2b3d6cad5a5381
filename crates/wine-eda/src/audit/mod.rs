//! Dataset audit core: deduplication, null audit, distribution summary,
//! correlations.
//!
//! Everything here is a pure function of the in-memory table. File output
//! (cleaned CSV, charts, JSON report) lives in the `export`, `plots` and
//! `report` modules so the audit itself can be tested without side effects.

pub(crate) mod statistics;

use crate::error::Result;
use crate::types::{AuditReport, ColumnDistribution, CorrelationMatrix, NullCount, Shape};
use polars::prelude::*;
use tracing::{debug, info};

use statistics::{is_numeric_dtype, mean, median, numeric_options, numeric_values, pearson, skewness};

/// Runs the data-quality pass over a loaded table.
pub struct DatasetAuditor;

impl DatasetAuditor {
    /// Run the full audit: dedup, null audit, distribution summary,
    /// correlations.
    ///
    /// Returns the deduplicated table and the report over it. The input is
    /// not mutated.
    pub fn audit(df: &DataFrame) -> Result<(DataFrame, AuditReport)> {
        let rows_before = df.height();
        info!("Auditing dataset: {} rows x {} columns", rows_before, df.width());

        let (duplicates_removed, cleaned) = Self::deduplicate(df)?;
        let null_counts = Self::null_audit(&cleaned);
        let (distributions, warnings) = Self::distribution_summary(&cleaned)?;
        let correlations = Self::correlation_matrix(&cleaned)?;

        let report = AuditReport {
            rows_before,
            rows_after: cleaned.height(),
            columns: cleaned.width(),
            duplicates_removed,
            null_counts,
            distributions,
            correlations,
            warnings,
        };

        info!(
            "Audit complete: {} duplicates removed, {} missing values",
            report.duplicates_removed,
            report.total_nulls()
        );

        Ok((cleaned, report))
    }

    /// Remove exact full-row duplicates, keeping the first occurrence and
    /// preserving row order.
    ///
    /// Returns the number of rows removed and the deduplicated table.
    /// Idempotent: a second pass removes nothing.
    pub fn deduplicate(df: &DataFrame) -> Result<(usize, DataFrame)> {
        let deduped = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        let removed = df.height() - deduped.height();
        debug!("Deduplication removed {} of {} rows", removed, df.height());
        Ok((removed, deduped))
    }

    /// Count missing values per column, in column order. Pure read.
    pub fn null_audit(df: &DataFrame) -> Vec<NullCount> {
        df.get_columns()
            .iter()
            .map(|col| NullCount {
                column: col.name().to_string(),
                nulls: col.null_count(),
            })
            .collect()
    }

    /// Summarize the distribution of each numeric column: skewness, shape
    /// label, mean and median.
    ///
    /// Non-numeric and all-null columns are skipped; one warning per
    /// skipped column is returned alongside the summaries.
    pub fn distribution_summary(
        df: &DataFrame,
    ) -> Result<(Vec<ColumnDistribution>, Vec<String>)> {
        let mut distributions = Vec::new();
        let mut warnings = Vec::new();

        for col in df.get_columns() {
            let name = col.name().to_string();

            if !is_numeric_dtype(col.dtype()) {
                debug!("Skipping '{}': non-numeric dtype {:?}", name, col.dtype());
                warnings.push(format!("Skipped '{}': non-numeric column", name));
                continue;
            }

            let values = numeric_values(col.as_materialized_series())?;
            if values.is_empty() {
                warnings.push(format!("Skipped '{}': no non-null values", name));
                continue;
            }

            let s = skewness(&values);
            distributions.push(ColumnDistribution {
                column: name,
                skewness: s,
                shape: Shape::classify(s),
                mean: mean(&values),
                median: median(&values),
            });
        }

        Ok((distributions, warnings))
    }

    /// Pearson correlation matrix over the numeric columns.
    pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
        let mut columns = Vec::new();
        let mut series_values: Vec<Vec<Option<f64>>> = Vec::new();

        for col in df.get_columns() {
            if is_numeric_dtype(col.dtype()) {
                columns.push(col.name().to_string());
                series_values.push(numeric_options(col.as_materialized_series())?);
            }
        }

        let n = columns.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let r = pearson(&series_values[i], &series_values[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(CorrelationMatrix { columns, values })
    }
}

//! Console report and JSON report file.
//!
//! The console sections use `println!` intentionally: they are the primary
//! output of the tool and should always be visible regardless of log level.
//! The JSON side mirrors the in-memory `AuditReport` one-to-one plus file
//! metadata, for piping into other tools.

use crate::error::Result;
use crate::types::AuditReport;
use chrono::Local;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk report: audit results plus run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Path to the input file.
    pub input_file: String,
    /// Path to the cleaned CSV, if written.
    pub cleaned_file: Option<String>,
    /// Paths of rendered charts, if any.
    pub charts: Vec<String>,
    /// The audit results.
    pub audit: AuditReport,
}

impl EdaReport {
    pub fn new(input_file: impl Into<String>, audit: AuditReport) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.into(),
            cleaned_file: None,
            charts: Vec::new(),
            audit,
        }
    }

    /// Write the report as pretty JSON into `output_dir`.
    pub fn write_to_file(&self, output_dir: &Path, input_stem: &str) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(format!("{input_stem}_report.json"));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        info!("Report written to: {}", path.display());
        Ok(path)
    }
}

/// Print the load confirmation, preview and descriptive statistics.
pub fn print_load_summary(df: &DataFrame, preview: &DataFrame, describe: &DataFrame) {
    println!();
    println!("Dataset loaded: {} rows x {} columns", df.height(), df.width());
    println!();
    println!("Preview:");
    println!("{preview}");
    println!();
    println!("Descriptive statistics:");
    println!("{describe}");
}

/// Print duplicate, null and skewness sections of the audit.
pub fn print_audit_summary(report: &AuditReport) {
    println!();
    println!("{}", "-".repeat(70));
    println!("DATA QUALITY AUDIT");
    println!("{}", "-".repeat(70));
    println!("  Duplicate rows removed: {}", report.duplicates_removed);
    println!(
        "  Rows: {} -> {} ({:.1}% removed)",
        report.rows_before,
        report.rows_after,
        report.rows_removed_percentage()
    );
    println!();

    println!("  Missing values per column:");
    for null in &report.null_counts {
        println!("    {:<24} {}", truncate_str(&null.column, 23), null.nulls);
    }
    println!("  Total missing values: {}", report.total_nulls());

    println!();
    println!("{}", "-".repeat(70));
    println!("SKEWNESS SUMMARY - VARIABLE DISTRIBUTIONS");
    println!("{}", "-".repeat(70));
    println!(
        "{:<24} {:>10} {:<20} {:>10} {:>10}",
        "Variable", "Skewness", "Distribution", "Mean", "Median"
    );
    println!("{}", "-".repeat(70));
    for dist in &report.distributions {
        println!(
            "{:<24} {:>10.3} {:<20} {:>10.3} {:>10.3}",
            truncate_str(&dist.column, 23),
            dist.skewness,
            dist.shape.label(),
            dist.mean,
            dist.median
        );
    }
    println!();
    println!("Legend:");
    println!("  Symmetric: |skewness| < 0.5");
    println!("  Positive: skewness > 0.5");
    println!("  Negative: skewness < -0.5");
    println!("  Strongly positive/negative: |skewness| > 1");

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  ! {warning}");
        }
    }
}

/// Print the narrative insights block.
pub fn print_insights(report: &AuditReport) {
    println!();
    println!("{}", "=".repeat(70));
    println!("KEY INSIGHTS - EXPLORATORY ANALYSIS");
    println!("{}", "=".repeat(70));

    println!();
    println!("1. INITIAL DATA QUALITY:");
    println!("   - Duplicates removed: {} rows", report.duplicates_removed);
    println!(
        "   - Final dataset: {} samples, {} variables",
        report.rows_after, report.columns
    );
    if report.total_nulls() == 0 {
        println!("   - No missing values - data quality is good");
    } else {
        println!(
            "   - {} missing values remain - handle before modeling",
            report.total_nulls()
        );
    }

    println!();
    println!("2. VARIABLE DISTRIBUTIONS:");
    let positive = report.positively_skewed().len();
    let total = report.distributions.len();
    if total > 0 && positive * 2 >= total {
        println!("   - Most variables show POSITIVE skew (right tail)");
    } else {
        println!(
            "   - {} of {} variables show positive skew (right tail)",
            positive, total
        );
    }
    println!("   - Non-normal distributions; the most skewed variables");
    println!("     are candidates for transformation");

    println!();
    println!("3. OUTLIERS:");
    println!("   - Inspect the boxplots for atypical values per variable");
    println!("   - Outliers can distort models that are sensitive to them");

    println!();
    println!("4. MULTICOLLINEARITY:");
    let strong = report.correlations.strong_pairs(0.5);
    if strong.is_empty() {
        println!("   - No strong correlations (>0.5) between variables");
    } else {
        println!("   - Strong correlations (>0.5) between variables:");
        for (a, b, r) in strong.iter().take(5) {
            println!("     {a} ~ {b}: {r:.2}");
        }
        println!("   - Risk of redundant features; consider selection/reduction");
    }

    println!();
    println!("5. DOMAIN CONTEXT (WINE):");
    println!("   - Correlations may have a chemical interpretation");
    println!("   - Some outliers could be exceptional wines");
    println!("   - Validate findings with an oenology expert");

    println!();
    println!("{}", "-".repeat(70));
    println!("FEATURE ENGINEERING OPTIONS");
    println!("{}", "-".repeat(70));
    println!("  1. Apply log/box-cox to highly skewed variables");
    println!("  2. Evaluate scaling (standard or robust)");
    println!("  3. Consider dimensionality reduction for correlated features");
    println!();
    println!("{}", "=".repeat(70));
}

/// Truncate a string to max length with ellipsis, on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnDistribution, CorrelationMatrix, NullCount, Shape};

    fn sample_report() -> AuditReport {
        AuditReport {
            rows_before: 4,
            rows_after: 3,
            columns: 2,
            duplicates_removed: 1,
            null_counts: vec![NullCount { column: "ph".into(), nulls: 0 }],
            distributions: vec![ColumnDistribution {
                column: "ph".into(),
                skewness: 0.2,
                shape: Shape::Symmetric,
                mean: 3.3,
                median: 3.31,
            }],
            correlations: CorrelationMatrix {
                columns: vec!["ph".into()],
                values: vec![vec![1.0]],
            },
            warnings: vec![],
        }
    }

    #[test]
    fn test_eda_report_write_and_reload() {
        let report = EdaReport::new("wine.csv", sample_report());
        let dir = tempfile::tempdir().unwrap();

        let path = report.write_to_file(dir.path(), "wine").unwrap();
        assert!(path.ends_with("wine_report.json"));

        let content = fs::read_to_string(&path).unwrap();
        let back: EdaReport = serde_json::from_str(&content).unwrap();
        assert_eq!(back.input_file, "wine.csv");
        assert_eq!(back.audit.duplicates_removed, 1);
    }

    #[test]
    fn test_eda_report_timestamp_present() {
        let report = EdaReport::new("wine.csv", sample_report());
        assert!(!report.generated_at.is_empty());
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a_rather_long_column_name", 10), "a_rathe...");
    }

    #[test]
    fn test_truncate_str_multibyte_column_name() {
        // Must cut on a char boundary, not a byte offset
        assert_eq!(truncate_str("ácido_cítrico_del_vino_tinto", 10), "ácido_c...");
        assert_eq!(truncate_str("ácidez", 10), "ácidez");
    }
}

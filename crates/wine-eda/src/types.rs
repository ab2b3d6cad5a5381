use serde::{Deserialize, Serialize};

/// Missing-value count for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullCount {
    pub column: String,
    pub nulls: usize,
}

/// Distribution shape of a column, classified from its skewness.
///
/// The rules are an ordered decision list; the first match wins:
///
/// 1. `|s| < 0.5`  -> `Symmetric`
/// 2. `s > 1`      -> `StronglyPositive`
/// 3. `s > 0.5`    -> `Positive`
/// 4. `s < -1`     -> `StronglyNegative`
/// 5. otherwise    -> `Negative`
///
/// Note the asymmetry: `(-1, -0.5]` reaches the catch-all and is labeled
/// `Negative`, with no dedicated band check mirroring `Positive`. Exactly
/// `0.5` also fails every check and lands on the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Symmetric,
    StronglyPositive,
    Positive,
    StronglyNegative,
    Negative,
}

impl Shape {
    /// Classify a skewness value.
    pub fn classify(skewness: f64) -> Self {
        if skewness.abs() < 0.5 {
            Shape::Symmetric
        } else if skewness > 1.0 {
            Shape::StronglyPositive
        } else if skewness > 0.5 {
            Shape::Positive
        } else if skewness < -1.0 {
            Shape::StronglyNegative
        } else {
            Shape::Negative
        }
    }

    /// Human-readable label for console tables.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Symmetric => "Symmetric",
            Shape::StronglyPositive => "Strongly positive",
            Shape::Positive => "Positive",
            Shape::StronglyNegative => "Strongly negative",
            Shape::Negative => "Negative",
        }
    }
}

/// Per-column distribution summary: skewness plus location statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDistribution {
    pub column: String,
    pub skewness: f64,
    pub shape: Shape,
    pub mean: f64,
    pub median: f64,
}

/// Pearson correlation matrix over the numeric columns.
///
/// `values[i][j]` is the correlation between `columns[i]` and `columns[j]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Pairs of distinct columns whose absolute correlation exceeds `threshold`.
    pub fn strong_pairs(&self, threshold: f64) -> Vec<(String, String, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.columns.len() {
            for j in (i + 1)..self.columns.len() {
                let r = self.values[i][j];
                if r.abs() > threshold {
                    pairs.push((self.columns[i].clone(), self.columns[j].clone(), r));
                }
            }
        }
        pairs
    }
}

/// Result of a full dataset audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of rows before deduplication.
    pub rows_before: usize,
    /// Number of rows after deduplication.
    pub rows_after: usize,
    /// Number of columns (unchanged by the audit).
    pub columns: usize,
    /// Exact full-row duplicates removed.
    pub duplicates_removed: usize,
    /// Per-column missing-value counts, in column order.
    pub null_counts: Vec<NullCount>,
    /// Per-column distribution summaries, in column order.
    pub distributions: Vec<ColumnDistribution>,
    /// Pearson correlations over numeric columns.
    pub correlations: CorrelationMatrix,
    /// Notes generated during the audit (skipped columns and the like).
    pub warnings: Vec<String>,
}

impl AuditReport {
    /// Total missing values across all columns.
    pub fn total_nulls(&self) -> usize {
        self.null_counts.iter().map(|n| n.nulls).sum()
    }

    /// Percentage of rows removed by deduplication.
    pub fn rows_removed_percentage(&self) -> f64 {
        if self.rows_before == 0 {
            0.0
        } else {
            (self.duplicates_removed as f64 / self.rows_before as f64) * 100.0
        }
    }

    /// Columns classified as positively skewed (either band).
    pub fn positively_skewed(&self) -> Vec<&ColumnDistribution> {
        self.distributions
            .iter()
            .filter(|d| matches!(d.shape, Shape::Positive | Shape::StronglyPositive))
            .collect()
    }

    /// Add a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

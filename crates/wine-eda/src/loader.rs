//! CSV ingestion.
//!
//! Loading tries a few strategies in order (quote-aware, quote-free, then
//! pre-cleaned content) before giving up. Failures are classified into the
//! [`AuditError`] taxonomy and propagate to the caller; the run terminates
//! on a load failure instead of continuing with no table.

use crate::audit::statistics::{is_numeric_dtype, mean, numeric_values, quantile, sample_std};
use crate::error::{AuditError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Load a tabular CSV file into a DataFrame.
///
/// Errors: [`AuditError::NotFound`] when the path does not exist,
/// [`AuditError::EmptyData`] when no data rows are present,
/// [`AuditError::Parse`] / [`AuditError::Value`] for malformed content,
/// [`AuditError::Unexpected`] for anything else.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(AuditError::NotFound(path.to_path_buf()));
    }

    // Strategy 1: standard loading with quote handling
    match read_with_options(path, true) {
        Ok(df) => return require_rows(path, df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: without quote handling
    match read_with_options(path, false) {
        Ok(df) => return require_rows(path, df),
        Err(e) => debug!("Loading without quotes failed: {}", e),
    }

    // Strategy 3: pre-clean the content and read from memory
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            AuditError::Parse(format!("{}: not valid UTF-8 text", path.display()))
        } else {
            AuditError::Io(e)
        }
    })?;

    let cleaned = clean_csv_content(&content);
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(cleaned))
        .finish()
        .map_err(|e| classify_polars_error(path, e))?;

    require_rows(path, df)
}

/// First `n` rows of the table, for the console preview.
pub fn preview(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

/// Descriptive statistics per numeric column, one statistic per row:
/// count, mean, std, min, quartiles, max. Non-numeric columns are omitted.
pub fn describe(df: &DataFrame) -> Result<DataFrame> {
    const STATS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    let mut columns = vec![Column::new(
        "statistic".into(),
        STATS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
    )];

    for col in df.get_columns() {
        if !is_numeric_dtype(col.dtype()) {
            continue;
        }

        let values = numeric_values(col.as_materialized_series())?;
        let (min, max) = if values.is_empty() {
            (0.0, 0.0)
        } else {
            (
                values.iter().cloned().fold(f64::INFINITY, f64::min),
                values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            )
        };

        let summary = vec![
            values.len() as f64,
            mean(&values),
            sample_std(&values),
            min,
            quantile(&values, 0.25),
            quantile(&values, 0.5),
            quantile(&values, 0.75),
            max,
        ];
        columns.push(Column::new(col.name().clone(), summary));
    }

    Ok(DataFrame::new(columns)?)
}

fn read_with_options(path: &Path, quoted: bool) -> PolarsResult<DataFrame> {
    let mut options = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true);
    if quoted {
        options = options
            .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')));
    }

    options
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}

fn require_rows(path: &Path, df: DataFrame) -> Result<DataFrame> {
    let df = drop_blank_rows(df).map_err(|e| classify_polars_error(path, e))?;
    if df.height() == 0 {
        return Err(AuditError::EmptyData(path.to_path_buf()));
    }
    Ok(df)
}

/// Blank CSV lines parse as fully-null rows; drop them. Rows with at
/// least one present value are kept.
fn drop_blank_rows(df: DataFrame) -> PolarsResult<DataFrame> {
    let mut mask: Option<BooleanChunked> = None;
    for col in df.get_columns() {
        let not_null = col.as_materialized_series().is_not_null();
        mask = Some(match mask {
            Some(m) => m | not_null,
            None => not_null,
        });
    }

    match mask {
        Some(mask) => df.filter(&mask),
        None => Ok(df),
    }
}

/// Map a polars failure onto the load-error taxonomy.
pub(crate) fn classify_polars_error(path: &Path, error: PolarsError) -> AuditError {
    match error {
        PolarsError::NoData(_) => AuditError::EmptyData(path.to_path_buf()),
        PolarsError::ComputeError(msg) | PolarsError::SchemaMismatch(msg) => {
            AuditError::Parse(msg.to_string())
        }
        PolarsError::InvalidOperation(msg) => AuditError::Value(msg.to_string()),
        other => AuditError::Unexpected(other.to_string()),
    }
}

/// Collapse doubled quotes and drop blank lines before the last-resort parse.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_table_success() {
        let file = write_csv("fixed_acidity,ph,quality\n7.4,3.51,5\n7.8,3.26,6\n");
        let df = load_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["fixed_acidity", "ph", "quality"]);
    }

    #[test]
    fn test_load_table_missing_file() {
        let err = load_table(Path::new("no/such/winequality-red.csv")).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.is_load_error());
    }

    #[test]
    fn test_load_table_empty_file() {
        let file = write_csv("");
        let err = load_table(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_DATA");
    }

    #[test]
    fn test_load_table_header_only() {
        let file = write_csv("fixed_acidity,ph,quality\n");
        let err = load_table(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_DATA");
    }

    #[test]
    fn test_load_table_skips_blank_rows() {
        // A blank line parses as a fully-null row and must be dropped
        let file = write_csv("a,b\n1,2\n\n3,4\n");
        let df = load_table(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("a").unwrap().null_count(), 0);
    }

    #[test]
    fn test_load_table_keeps_partially_null_rows() {
        let file = write_csv("a,b\n1,\n,4\n");
        let df = load_table(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("a").unwrap().null_count(), 1);
        assert_eq!(df.column("b").unwrap().null_count(), 1);
    }

    #[test]
    fn test_load_table_only_blank_rows_is_empty() {
        let file = write_csv("a,b\n\n\n");
        let err = load_table(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_DATA");
    }

    #[test]
    fn test_classify_polars_errors() {
        let path = Path::new("data.csv");
        assert_eq!(
            classify_polars_error(path, PolarsError::NoData("empty CSV".into())).error_code(),
            "EMPTY_DATA"
        );
        assert_eq!(
            classify_polars_error(path, PolarsError::ComputeError("bad row".into()))
                .error_code(),
            "PARSE_ERROR"
        );
        assert_eq!(
            classify_polars_error(path, PolarsError::InvalidOperation("bad cast".into()))
                .error_code(),
            "VALUE_ERROR"
        );
        assert_eq!(
            classify_polars_error(path, PolarsError::ShapeMismatch("oops".into()))
                .error_code(),
            "UNEXPECTED_ERROR"
        );
    }

    #[test]
    fn test_preview_limits_rows() {
        let file = write_csv("a\n1\n2\n3\n4\n5\n6\n");
        let df = load_table(file.path()).unwrap();
        assert_eq!(preview(&df, 5).height(), 5);
        assert_eq!(preview(&df, 100).height(), 6);
    }

    #[test]
    fn test_describe_numeric_summary() {
        let file = write_csv("a,b\n1,2.5\n3,4.5\n5,6.5\n");
        let df = load_table(file.path()).unwrap();
        let stats = describe(&df).unwrap();

        // Leading statistic-name column plus one column per numeric column
        assert_eq!(stats.width(), 3);
        assert_eq!(stats.height(), 8);

        // Rows: count, mean, std, min, 25%, 50%, 75%, max
        let a = stats.column("a").unwrap().f64().unwrap();
        assert_eq!(a.get(0), Some(3.0));
        assert_eq!(a.get(1), Some(3.0));
        assert_eq!(a.get(3), Some(1.0));
        assert_eq!(a.get(4), Some(2.0));
        assert_eq!(a.get(5), Some(3.0));
        assert_eq!(a.get(7), Some(5.0));
    }

    #[test]
    fn test_describe_omits_non_numeric_columns() {
        let file = write_csv("v,label\n1,x\n2,y\n");
        let df = load_table(file.path()).unwrap();
        let stats = describe(&df).unwrap();

        assert_eq!(stats.width(), 2);
        assert!(stats.column("label").is_err());
    }
}

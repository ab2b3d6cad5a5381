//! Cleaned-table export.

use crate::config::AuditConfig;
use crate::error::Result;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the deduplicated table as CSV with a header row.
///
/// Column order is preserved and no index column is added; the exported
/// file round-trips through [`crate::loader::load_table`].
pub fn write_cleaned_csv(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut out)?;

    info!("Cleaned dataset written to: {}", path.display());
    Ok(path.to_path_buf())
}

/// Destination path for the cleaned CSV: the configured name, or
/// `<input_stem>_clean.csv` inside the output directory.
pub fn cleaned_csv_path(config: &AuditConfig, input: &Path) -> PathBuf {
    let name = match &config.cleaned_name {
        Some(name) => name.clone(),
        None => {
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("dataset");
            format!("{stem}_clean")
        }
    };

    config.output_dir.join(format!("{name}.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_table;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_round_trip() {
        let df = df!(
            "fixed_acidity" => &[7.4f64, 7.8, 11.2],
            "ph" => &[3.51f64, 3.26, 3.16],
            "quality" => &[5i64, 6, 6],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wine_clean.csv");
        write_cleaned_csv(&df, &path).unwrap();

        let reloaded = load_table(&path).unwrap();
        assert!(df.equals(&reloaded), "round-trip should preserve the table");
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let df = df!("a" => &[1i64, 2]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.csv");

        let written = write_cleaned_csv(&df, &path).unwrap();
        assert!(written.exists());
    }

    #[test]
    fn test_cleaned_csv_path_from_input_stem() {
        let config = AuditConfig::builder()
            .output_dir("outputs")
            .build()
            .unwrap();
        let path = cleaned_csv_path(&config, Path::new("data/winequality-red.csv"));
        assert_eq!(path, PathBuf::from("outputs/winequality-red_clean.csv"));
    }

    #[test]
    fn test_cleaned_csv_path_custom_name() {
        let config = AuditConfig::builder()
            .output_dir("outputs")
            .cleaned_name("wine_eda")
            .build()
            .unwrap();
        let path = cleaned_csv_path(&config, Path::new("data/winequality-red.csv"));
        assert_eq!(path, PathBuf::from("outputs/wine_eda.csv"));
    }
}

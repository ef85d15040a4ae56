//! Dataset loader for CSV and Parquet files

use anyhow::Result;
use polars::prelude::*;
use std::path::Path;

use super::error::AnalysisError;

/// Load a dataset from a file (CSV or Parquet based on extension) into an
/// eager DataFrame, preserving column names and row order as stored.
///
/// `infer_schema_length` controls how many rows the CSV reader scans for
/// type inference; `0` means a full scan.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame, AnalysisError> {
    // Distinguish access failures from parse failures up front
    std::fs::metadata(path).map_err(|source| AnalysisError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(infer)
            .finish()
            .map_err(|e| format_error(path, e))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .map_err(|e| format_error(path, e))?,
        _ => {
            return Err(AnalysisError::Format {
                path: path.to_path_buf(),
                message: format!(
                    "unsupported file format '{}' (supported: csv, parquet)",
                    extension
                ),
            })
        }
    };

    lf.collect().map_err(|e| format_error(path, e))
}

/// Shape and estimated memory footprint of a loaded dataset.
pub fn dataset_stats(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}

fn format_error(path: &Path, e: PolarsError) -> AnalysisError {
    AnalysisError::Format {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

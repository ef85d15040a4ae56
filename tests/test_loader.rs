//! Unit tests for dataset loader

use hepascope::pipeline::{dataset_stats, load_dataset, AnalysisError};
use polars::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("survey.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "weight_kg,height_cm,age").unwrap();
    writeln!(file, "70,175,30").unwrap();
    writeln!(file, "50,160,70").unwrap();
    drop(file);

    let df = load_dataset(&csv_path, 100).unwrap();
    let (rows, cols, mem_mb) = dataset_stats(&df);

    assert_eq!(rows, 2, "Should have 2 data rows");
    assert_eq!(cols, 3, "Should have 3 columns");
    assert_eq!(df.get_column_names_str(), &["weight_kg", "height_cm", "age"]);
    assert!(mem_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_load_csv_preserves_missing_values() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("survey.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "weight_kg,sex").unwrap();
    writeln!(file, "70,Male").unwrap();
    writeln!(file, ",Female").unwrap();
    drop(file);

    let df = load_dataset(&csv_path, 100).unwrap();
    assert_eq!(df.column("weight_kg").unwrap().null_count(), 1);
}

#[test]
fn test_load_parquet_file() {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("survey.parquet");

    let mut df = common::create_survey_dataframe();
    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(&mut df).unwrap();

    let loaded = load_dataset(&parquet_path, 100).unwrap();
    assert_eq!(loaded.shape(), df.shape());
    assert_eq!(loaded.get_column_names(), df.get_column_names());
}

#[test]
fn test_missing_file_is_access_error() {
    let err = load_dataset(std::path::Path::new("does/not/exist.csv"), 100).unwrap_err();
    assert!(matches!(err, AnalysisError::FileAccess { .. }), "got {:?}", err);
}

#[test]
fn test_unsupported_extension_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("survey.xlsx");
    std::fs::write(&path, b"not really a spreadsheet").unwrap();

    let err = load_dataset(&path, 100).unwrap_err();
    assert!(matches!(err, AnalysisError::Format { .. }), "got {:?}", err);
    assert!(err.to_string().contains("xlsx"));
}

#[test]
fn test_unparseable_parquet_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.parquet");
    std::fs::write(&path, b"definitely not parquet").unwrap();

    let err = load_dataset(&path, 100).unwrap_err();
    assert!(matches!(err, AnalysisError::Format { .. }), "got {:?}", err);
}

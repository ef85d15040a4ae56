//! Unit tests for BMI derivation and class bucketing

use hepascope::pipeline::{
    age_class_label, bmi_class_label, bmi_value, with_derived_features,
};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_bmi_formula() {
    let bmi = bmi_value(Some(70.0), Some(175.0)).unwrap();
    assert!((bmi - 22.857142857).abs() < 1e-6, "got {}", bmi);

    let bmi = bmi_value(Some(50.0), Some(160.0)).unwrap();
    assert!((bmi - 19.53125).abs() < 1e-6, "got {}", bmi);
}

#[test]
fn test_bmi_missing_inputs_propagate() {
    assert!(bmi_value(None, Some(175.0)).is_none());
    assert!(bmi_value(Some(70.0), None).is_none());
    assert!(bmi_value(None, None).is_none());
}

#[test]
fn test_bmi_zero_height_is_missing() {
    // Policy: zero height propagates as missing, not as infinity
    assert!(bmi_value(Some(70.0), Some(0.0)).is_none());
    assert!(bmi_value(Some(70.0), Some(-160.0)).is_none());
}

#[test]
fn test_age_class_boundaries() {
    assert_eq!(age_class_label(0.0), Some("0-18"));
    assert_eq!(age_class_label(17.9), Some("0-18"));
    assert_eq!(age_class_label(18.0), Some("19-35"));
    assert_eq!(age_class_label(34.9), Some("19-35"));
    assert_eq!(age_class_label(35.0), Some("36-50"));
    assert_eq!(age_class_label(49.9), Some("36-50"));
    assert_eq!(age_class_label(50.0), Some("51-65"));
    assert_eq!(age_class_label(64.9), Some("51-65"));
    assert_eq!(age_class_label(65.0), Some("65+"));
    assert_eq!(age_class_label(120.0), Some("65+"));
}

#[test]
fn test_age_class_out_of_range() {
    assert_eq!(age_class_label(-1.0), None);
    assert_eq!(age_class_label(f64::NAN), None);
}

#[test]
fn test_bmi_class_boundaries() {
    assert_eq!(bmi_class_label(15.0), Some("Underweight"));
    assert_eq!(bmi_class_label(18.49), Some("Underweight"));
    assert_eq!(bmi_class_label(18.5), Some("Normal"));
    assert_eq!(bmi_class_label(24.99), Some("Normal"));
    assert_eq!(bmi_class_label(25.0), Some("Overweight"));
    assert_eq!(bmi_class_label(29.99), Some("Overweight"));
    assert_eq!(bmi_class_label(30.0), Some("Obese"));
    assert_eq!(bmi_class_label(45.0), Some("Obese"));
}

#[test]
fn test_worked_example_end_to_end() {
    let df = common::create_worked_example_dataframe();
    let df = with_derived_features(&df).unwrap();

    let bmi = df.column("bmi").unwrap().f64().unwrap().clone();
    assert!((bmi.get(0).unwrap() - 22.86).abs() < 0.01);
    assert!((bmi.get(1).unwrap() - 19.53).abs() < 0.01);

    let age_class = df.column("age_class").unwrap().str().unwrap().clone();
    assert_eq!(age_class.get(0), Some("19-35"));
    assert_eq!(age_class.get(1), Some("65+"));

    let bmi_class = df.column("bmi_class").unwrap().str().unwrap().clone();
    assert_eq!(bmi_class.get(0), Some("Normal"));
    assert_eq!(bmi_class.get(1), Some("Normal"));
}

#[test]
fn test_derivation_appends_exactly_three_columns() {
    let df = common::create_survey_dataframe();
    let cols_before = df.width();
    let derived = with_derived_features(&df).unwrap();

    assert_eq!(derived.width(), cols_before + 3);
    assert_eq!(derived.height(), df.height());

    // Original columns are untouched
    for name in df.get_column_names_str() {
        assert!(
            derived.column(name).is_ok(),
            "column '{}' should survive derivation",
            name
        );
    }
}

#[test]
fn test_derivation_propagates_missing_values() {
    let df = common::create_survey_dataframe();
    let derived = with_derived_features(&df).unwrap();

    let bmi = derived.column("bmi").unwrap();
    // Row 3 has missing weight, row 5 missing height, row 6 zero height
    assert_eq!(bmi.null_count(), 3);

    let age_class = derived.column("age_class").unwrap();
    // Row 6 has missing age
    assert_eq!(age_class.null_count(), 1);

    let bmi_class = derived.column("bmi_class").unwrap();
    assert_eq!(bmi_class.null_count(), 3);
}

#[test]
fn test_derivation_missing_source_column_fails() {
    let df = df! {
        "weight_kg" => [70.0f64],
        "height_cm" => [175.0f64],
        // no age column
    }
    .unwrap();

    let err = with_derived_features(&df).unwrap_err();
    assert!(err.to_string().contains("age"), "got: {}", err);
}

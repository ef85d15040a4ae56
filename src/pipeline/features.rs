//! Feature derivation: BMI plus age-class and BMI-class bucketing
//!
//! All derivations are pure per-row functions of weight, height, and age.
//! Missing inputs propagate as missing outputs. A zero or negative height
//! yields a missing BMI rather than an infinite one, so downstream
//! statistics and bucketing never see non-finite values.

use polars::prelude::*;

use super::error::AnalysisError;
use super::schema::{
    AGE_BOUNDS, AGE_CLASS_ORDER, BMI_BOUNDS, BMI_CLASS_ORDER, COL_AGE, COL_AGE_CLASS, COL_BMI,
    COL_BMI_CLASS, COL_HEIGHT, COL_WEIGHT,
};

/// Body-mass index for a single row: weight_kg / (height_cm/100)^2.
pub fn bmi_value(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    match (weight_kg, height_cm) {
        (Some(w), Some(h)) if h > 0.0 => Some(w / (h / 100.0).powi(2)),
        _ => None,
    }
}

/// Age-class label for an age, by half-open interval membership
/// (lower-inclusive, boundaries 0/18/35/50/65).
pub fn age_class_label(age: f64) -> Option<&'static str> {
    bucket_label(age, &AGE_BOUNDS, &AGE_CLASS_ORDER)
}

/// BMI-class label for a BMI value (WHO thresholds 18.5/25/30,
/// lower-inclusive).
pub fn bmi_class_label(bmi: f64) -> Option<&'static str> {
    bucket_label(bmi, &BMI_BOUNDS, &BMI_CLASS_ORDER)
}

/// Append the three derived columns (`bmi`, `age_class`, `bmi_class`) to a
/// copy of the table. No other columns are modified.
pub fn with_derived_features(df: &DataFrame) -> Result<DataFrame, AnalysisError> {
    let weight = numeric_column(df, COL_WEIGHT)?;
    let height = numeric_column(df, COL_HEIGHT)?;
    let age = numeric_column(df, COL_AGE)?;

    let bmi: Float64Chunked = weight
        .iter()
        .zip(height.iter())
        .map(|(w, h)| bmi_value(w, h))
        .collect();
    let bmi = bmi.with_name(COL_BMI.into());

    let age_class: StringChunked = age
        .iter()
        .map(|a| a.and_then(age_class_label))
        .collect();
    let age_class = age_class.with_name(COL_AGE_CLASS.into());

    let bmi_class: StringChunked = bmi
        .iter()
        .map(|b| b.and_then(bmi_class_label))
        .collect();
    let bmi_class = bmi_class.with_name(COL_BMI_CLASS.into());

    let mut out = df.clone();
    for series in [
        bmi.into_series(),
        age_class.into_series(),
        bmi_class.into_series(),
    ] {
        out.with_column(series)
            .map_err(|e| AnalysisError::Computation {
                message: format!("failed to append derived column: {}", e),
            })?;
    }

    Ok(out)
}

/// Fetch a column as Float64, erroring if it is absent or non-numeric.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::missing_column(name))?;
    let column = column
        .cast(&DataType::Float64)
        .map_err(|e| AnalysisError::Computation {
            message: format!("cannot cast column '{}' to float: {}", name, e),
        })?;
    let ca = column.f64().map_err(|e| AnalysisError::Computation {
        message: format!("cannot read column '{}' as float: {}", name, e),
    })?;
    Ok(ca.clone())
}

/// Map a value to the label of the last bin whose lower bound it reaches.
/// Values below the first bound fall outside every bin.
fn bucket_label(value: f64, bounds: &[f64], labels: &[&'static str]) -> Option<&'static str> {
    if value.is_nan() || value < bounds[0] {
        return None;
    }
    let idx = bounds.iter().rposition(|&b| value >= b)?;
    labels.get(idx).copied()
}

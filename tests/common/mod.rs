//! Shared test utilities and fixture generators

use polars::prelude::*;

/// Create a small survey DataFrame with known characteristics.
///
/// Eight respondents covering:
/// - both infection statuses and sexes
/// - a married, non-transfused pediatrician (the filtered-subset case)
/// - missing weight, height, and age values
/// - a zero height (undefined BMI)
pub fn create_survey_dataframe() -> DataFrame {
    df! {
        "weight_kg" => [Some(70.0f64), Some(50.0), Some(85.0), None, Some(95.0), Some(45.0), Some(62.0), Some(70.0)],
        "height_cm" => [Some(175.0f64), Some(160.0), Some(170.0), Some(180.0), Some(168.0), None, Some(0.0), Some(175.0)],
        "age" => [Some(30.0f64), Some(70.0), Some(45.0), Some(17.0), Some(52.0), Some(35.0), None, Some(64.0)],
        "sex" => ["Male", "Female", "Male", "Female", "Male", "Female", "Male", "Female"],
        "marital_status" => ["Married", "Single", "Married", "Single", "Married", "Widowed", "Married", "MARRIED"],
        "profession_category" => [
            "Pediatrician - Senior",
            "Nurse",
            "Surgeon",
            "Pediatrician",
            "Lab technician",
            "Nurse",
            "pediatrician assistant",
            "Midwife",
        ],
        "blood_group" => ["A+", "O-", "B+", "A+", "AB+", "O+", "A-", "O+"],
        "hospital_service" => ["Pediatrics", "Emergency", "Surgery", "Pediatrics", "Laboratory", "Emergency", "Pediatrics", "Maternity"],
        "years_of_practice" => [Some(5.0f64), Some(40.0), Some(20.0), Some(1.0), Some(25.0), Some(10.0), Some(8.0), Some(30.0)],
        "vaccination" => ["Yes", "No", "Yes", "Yes", "No", "Yes", "No", "Yes"],
        "blood_contact" => ["Frequent", "Rare", "Frequent", "Never", "Frequent", "Rare", "Frequent", "Rare"],
        "blood_transfusion" => ["No", "Yes", "No", "no", "Yes", "No", "NO", "No"],
        "protected_intercourse" => ["Yes", "No", "Yes", "Yes", "No", "Yes", "No", "Yes"],
        "vhb_infection" => ["Negative", "Positive", "Negative", "Negative", "Positive", "Negative", "Positive", "Negative"],
    }
    .unwrap()
}

/// Two-row worked example with known answers: BMI ~ [22.86, 19.53], age classes
/// ["19-35", "65+"], BMI classes ["Normal", "Normal"].
pub fn create_worked_example_dataframe() -> DataFrame {
    df! {
        "weight_kg" => [70.0f64, 50.0],
        "height_cm" => [175.0f64, 160.0],
        "age" => [30.0f64, 70.0],
    }
    .unwrap()
}

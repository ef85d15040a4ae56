//! Column names and canonical class orders for the survey dataset.

/// Body weight in kilograms
pub const COL_WEIGHT: &str = "weight_kg";
/// Body height in centimeters
pub const COL_HEIGHT: &str = "height_cm";
/// Age in years
pub const COL_AGE: &str = "age";
/// Sex
pub const COL_SEX: &str = "sex";
/// Marital status
pub const COL_MARITAL_STATUS: &str = "marital_status";
/// Professional category (e.g. nurse, pediatrician, surgeon)
pub const COL_PROFESSION: &str = "profession_category";
/// ABO/Rh blood group
pub const COL_BLOOD_GROUP: &str = "blood_group";
/// Hospital service the respondent works in
pub const COL_HOSPITAL_SERVICE: &str = "hospital_service";
/// Years of hospital practice
pub const COL_YEARS_OF_PRACTICE: &str = "years_of_practice";
/// Hepatitis-B vaccination status
pub const COL_VACCINATION: &str = "vaccination";
/// Occupational blood-contact exposure
pub const COL_BLOOD_CONTACT: &str = "blood_contact";
/// Blood transfusion history
pub const COL_BLOOD_TRANSFUSION: &str = "blood_transfusion";
/// Protected-intercourse status
pub const COL_PROTECTED_INTERCOURSE: &str = "protected_intercourse";
/// Hepatitis-B infection status - the target variable
pub const COL_VHB_INFECTION: &str = "vhb_infection";

/// Derived: body-mass index, weight_kg / (height_cm/100)^2
pub const COL_BMI: &str = "bmi";
/// Derived: age class
pub const COL_AGE_CLASS: &str = "age_class";
/// Derived: body-mass-index class (WHO thresholds)
pub const COL_BMI_CLASS: &str = "bmi_class";

/// Lower bin edges for age classes; right-open, lower-inclusive intervals.
pub const AGE_BOUNDS: [f64; 5] = [0.0, 18.0, 35.0, 50.0, 65.0];
/// Display labels for the age classes, in bin order.
pub const AGE_CLASS_ORDER: [&str; 5] = ["0-18", "19-35", "36-50", "51-65", "65+"];

/// Lower bin edges for BMI classes (WHO thresholds); right-open intervals.
pub const BMI_BOUNDS: [f64; 4] = [0.0, 18.5, 25.0, 30.0];
/// Display labels for the BMI classes, in bin order.
pub const BMI_CLASS_ORDER: [&str; 4] = ["Underweight", "Normal", "Overweight", "Obese"];

/// BMI class label used for the obesity-share pie chart.
pub const BMI_CLASS_OBESE: &str = "Obese";

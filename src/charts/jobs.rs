//! Canonical chart-job list for the survey report
//!
//! Each job is an independent descriptor: a tagged chart kind, source
//! columns, optional canonical category order, optional row filter, and
//! display decorations. Job order is the report-reading order only; no job
//! depends on another.

use crate::pipeline::schema::{
    AGE_CLASS_ORDER, BMI_CLASS_OBESE, BMI_CLASS_ORDER, COL_AGE_CLASS, COL_BLOOD_CONTACT,
    COL_BLOOD_GROUP, COL_BLOOD_TRANSFUSION, COL_BMI_CLASS, COL_HEIGHT, COL_HOSPITAL_SERVICE,
    COL_MARITAL_STATUS, COL_PROFESSION, COL_PROTECTED_INTERCOURSE, COL_SEX, COL_VACCINATION,
    COL_VHB_INFECTION, COL_WEIGHT, COL_YEARS_OF_PRACTICE,
};

/// A chart job: output slug plus the chart descriptor.
#[derive(Debug, Clone)]
pub struct ChartJob {
    /// File-name stem for the rendered artifact
    pub slug: &'static str,
    pub kind: ChartKind,
}

/// Tagged chart descriptor; one rendering function exists per variant.
#[derive(Debug, Clone)]
pub enum ChartKind {
    /// Bar chart of value frequencies in one categorical column.
    CountBar {
        column: &'static str,
        title: &'static str,
        x_label: &'static str,
        /// Canonical category order; first-seen row order when absent
        order: Option<&'static [&'static str]>,
        /// Conjunctive case-insensitive substring row filter
        filter: Option<&'static [(&'static str, &'static str)]>,
    },
    /// Pie chart of one label's share against the rest of the table.
    SharePie {
        column: &'static str,
        label: &'static str,
        title: &'static str,
    },
    /// Stacked bar chart from a two-way frequency table of one categorical
    /// column against the infection-status target.
    StackedCrosstab {
        category: &'static str,
        title: &'static str,
        x_label: &'static str,
        order: Option<&'static [&'static str]>,
    },
    /// Histogram of one numeric column with a gaussian density overlay.
    Histogram {
        column: &'static str,
        bins: usize,
        title: &'static str,
        x_label: &'static str,
    },
    /// Side-by-side box plots of numeric columns.
    NumericBoxPlot {
        columns: &'static [&'static str],
        title: &'static str,
    },
    /// Box plots of one numeric column grouped by a categorical column.
    GroupedBoxPlot {
        value: &'static str,
        group: &'static str,
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
    },
    /// Scatter plot of two numeric columns, optionally colored by a
    /// categorical column and/or overlaid with a least-squares fit.
    Scatter {
        x: &'static str,
        y: &'static str,
        hue: Option<&'static str>,
        regression: bool,
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
    },
    /// Annotated Pearson correlation heatmap over all numeric columns.
    CorrelationHeatmap { title: &'static str },
}

/// Row filter for the pediatrician subset chart: pediatricians who are
/// married and have no transfusion history.
pub const PEDIATRICIAN_SUBSET: &[(&str, &str)] = &[
    (COL_PROFESSION, "Pediatrician"),
    (COL_MARITAL_STATUS, "Married"),
    (COL_BLOOD_TRANSFUSION, "No"),
];

/// The fixed, ordered chart-job list of the survey report.
pub fn report_jobs(histogram_bins: usize) -> Vec<ChartJob> {
    vec![
        ChartJob {
            slug: "sex_distribution",
            kind: ChartKind::CountBar {
                column: COL_SEX,
                title: "Distribution of individuals by sex",
                x_label: "Sex",
                order: None,
                filter: None,
            },
        },
        ChartJob {
            slug: "bmi_class_distribution",
            kind: ChartKind::CountBar {
                column: COL_BMI_CLASS,
                title: "Distribution of individuals by BMI class",
                x_label: "BMI class",
                order: Some(&BMI_CLASS_ORDER),
                filter: None,
            },
        },
        ChartJob {
            slug: "obesity_share",
            kind: ChartKind::SharePie {
                column: COL_BMI_CLASS,
                label: BMI_CLASS_OBESE,
                title: "Proportion of obesity",
            },
        },
        ChartJob {
            slug: "age_class_distribution",
            kind: ChartKind::CountBar {
                column: COL_AGE_CLASS,
                title: "Distribution of individuals by age class",
                x_label: "Age class",
                order: Some(&AGE_CLASS_ORDER),
                filter: None,
            },
        },
        ChartJob {
            slug: "marital_status_distribution",
            kind: ChartKind::CountBar {
                column: COL_MARITAL_STATUS,
                title: "Distribution of individuals by marital status",
                x_label: "Marital status",
                order: None,
                filter: None,
            },
        },
        ChartJob {
            slug: "vhb_infection_distribution",
            kind: ChartKind::CountBar {
                column: COL_VHB_INFECTION,
                title: "Distribution of individuals by VHB infection",
                x_label: "VHB infection",
                order: None,
                filter: None,
            },
        },
        ChartJob {
            slug: "blood_contact_pediatrician_subset",
            kind: ChartKind::CountBar {
                column: COL_BLOOD_CONTACT,
                title: "Blood contact among married, non-transfused pediatricians",
                x_label: "Blood contact",
                order: None,
                filter: Some(PEDIATRICIAN_SUBSET),
            },
        },
        ChartJob {
            slug: "profession_distribution",
            kind: ChartKind::CountBar {
                column: COL_PROFESSION,
                title: "Distribution by professional category",
                x_label: "Professional category",
                order: None,
                filter: None,
            },
        },
        ChartJob {
            slug: "blood_group_distribution",
            kind: ChartKind::CountBar {
                column: COL_BLOOD_GROUP,
                title: "Distribution by blood group",
                x_label: "Blood group",
                order: None,
                filter: None,
            },
        },
        ChartJob {
            slug: "vhb_by_marital_status",
            kind: ChartKind::StackedCrosstab {
                category: COL_MARITAL_STATUS,
                title: "VHB infection by marital status",
                x_label: "Marital status",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_bmi_class",
            kind: ChartKind::StackedCrosstab {
                category: COL_BMI_CLASS,
                title: "VHB infection by BMI class",
                x_label: "BMI class",
                order: Some(&BMI_CLASS_ORDER),
            },
        },
        ChartJob {
            slug: "vhb_by_blood_contact",
            kind: ChartKind::StackedCrosstab {
                category: COL_BLOOD_CONTACT,
                title: "VHB infection by blood contact",
                x_label: "Blood contact",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_blood_group",
            kind: ChartKind::StackedCrosstab {
                category: COL_BLOOD_GROUP,
                title: "VHB infection by blood group",
                x_label: "Blood group",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_sex",
            kind: ChartKind::StackedCrosstab {
                category: COL_SEX,
                title: "VHB infection by sex",
                x_label: "Sex",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_profession",
            kind: ChartKind::StackedCrosstab {
                category: COL_PROFESSION,
                title: "VHB infection by professional category",
                x_label: "Professional category",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_hospital_service",
            kind: ChartKind::StackedCrosstab {
                category: COL_HOSPITAL_SERVICE,
                title: "VHB infection by hospital service",
                x_label: "Hospital service",
                order: None,
            },
        },
        ChartJob {
            slug: "practice_years_by_vhb",
            kind: ChartKind::GroupedBoxPlot {
                value: COL_YEARS_OF_PRACTICE,
                group: COL_VHB_INFECTION,
                title: "Years of practice by VHB infection",
                x_label: "VHB infection",
                y_label: "Years of hospital practice",
            },
        },
        ChartJob {
            slug: "vhb_by_vaccination",
            kind: ChartKind::StackedCrosstab {
                category: COL_VACCINATION,
                title: "VHB infection by vaccination",
                x_label: "Vaccination",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_blood_transfusion",
            kind: ChartKind::StackedCrosstab {
                category: COL_BLOOD_TRANSFUSION,
                title: "VHB infection by blood transfusion",
                x_label: "Blood transfusion",
                order: None,
            },
        },
        ChartJob {
            slug: "vhb_by_protected_intercourse",
            kind: ChartKind::StackedCrosstab {
                category: COL_PROTECTED_INTERCOURSE,
                title: "VHB infection by protected intercourse",
                x_label: "Protected intercourse",
                order: None,
            },
        },
        ChartJob {
            slug: "weight_distribution",
            kind: ChartKind::Histogram {
                column: COL_WEIGHT,
                bins: histogram_bins,
                title: "Weight distribution (kg)",
                x_label: "Weight (kg)",
            },
        },
        ChartJob {
            slug: "height_distribution",
            kind: ChartKind::Histogram {
                column: COL_HEIGHT,
                bins: histogram_bins,
                title: "Height distribution (cm)",
                x_label: "Height (cm)",
            },
        },
        ChartJob {
            slug: "weight_height_boxplots",
            kind: ChartKind::NumericBoxPlot {
                columns: &[COL_WEIGHT, COL_HEIGHT],
                title: "Box plots of weight and height",
            },
        },
        ChartJob {
            slug: "height_vs_weight_by_sex",
            kind: ChartKind::Scatter {
                x: COL_HEIGHT,
                y: COL_WEIGHT,
                hue: Some(COL_SEX),
                regression: false,
                title: "Height vs weight by sex",
                x_label: "Height (cm)",
                y_label: "Weight (kg)",
            },
        },
        ChartJob {
            slug: "height_vs_weight_regression",
            kind: ChartKind::Scatter {
                x: COL_HEIGHT,
                y: COL_WEIGHT,
                hue: None,
                regression: true,
                title: "Linear regression of weight on height",
                x_label: "Height (cm)",
                y_label: "Weight (kg)",
            },
        },
        ChartJob {
            slug: "correlation_heatmap",
            kind: ChartKind::CorrelationHeatmap {
                title: "Correlation matrix of numeric columns",
            },
        },
    ]
}

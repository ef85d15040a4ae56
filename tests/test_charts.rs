//! Unit tests for the chart-job list and per-job failure isolation

use hepascope::charts::{render_all, report_jobs, ChartKind, Theme};
use hepascope::pipeline::with_derived_features;
use polars::prelude::*;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_report_has_canonical_job_list() {
    let jobs = report_jobs(20);
    assert_eq!(jobs.len(), 26);

    // Report-reading order: opens with the sex distribution, closes with
    // the correlation heatmap
    assert_eq!(jobs[0].slug, "sex_distribution");
    assert!(matches!(jobs[0].kind, ChartKind::CountBar { .. }));
    assert_eq!(jobs[25].slug, "correlation_heatmap");
    assert!(matches!(jobs[25].kind, ChartKind::CorrelationHeatmap { .. }));
}

#[test]
fn test_job_seven_is_the_filtered_subset() {
    let jobs = report_jobs(20);
    let job = &jobs[6];

    assert_eq!(job.slug, "blood_contact_pediatrician_subset");
    let ChartKind::CountBar { column, filter, .. } = &job.kind else {
        panic!("job 7 should be a count bar");
    };
    assert_eq!(*column, "blood_contact");

    let filter = filter.expect("job 7 should carry a row filter");
    assert_eq!(filter.len(), 3);
    assert!(filter.contains(&("profession_category", "Pediatrician")));
    assert!(filter.contains(&("marital_status", "Married")));
    assert!(filter.contains(&("blood_transfusion", "No")));
}

#[test]
fn test_bmi_class_axes_use_canonical_order() {
    let jobs = report_jobs(20);

    for job in &jobs {
        let order = match &job.kind {
            ChartKind::CountBar { column, order, .. } if *column == "bmi_class" => order,
            ChartKind::StackedCrosstab { category, order, .. } if *category == "bmi_class" => {
                order
            }
            _ => continue,
        };
        assert_eq!(
            order.expect("bmi_class axis should be reordered"),
            &["Underweight", "Normal", "Overweight", "Obese"]
        );
    }
}

#[test]
fn test_stacked_crosstabs_are_one_parameterized_template() {
    let jobs = report_jobs(20);
    let crosstab_count = jobs
        .iter()
        .filter(|j| matches!(j.kind, ChartKind::StackedCrosstab { .. }))
        .count();
    assert_eq!(crosstab_count, 10);
}

#[test]
fn test_histogram_bins_are_configurable() {
    let jobs = report_jobs(7);
    for job in &jobs {
        if let ChartKind::Histogram { bins, .. } = job.kind {
            assert_eq!(bins, 7);
        }
    }
}

#[test]
fn test_render_all_succeeds_on_survey_data() {
    // The survey fixture carries every column the report needs, so all 26
    // jobs should render to numbered PNG files
    let df = common::create_survey_dataframe();
    let df = with_derived_features(&df).unwrap();
    let out_dir = TempDir::new().unwrap();

    let report = render_all(&df, &report_jobs(20), out_dir.path(), &Theme::default()).unwrap();

    assert!(
        report.failures.is_empty(),
        "no job should fail: {:?}",
        report.failures
    );
    assert_eq!(report.rendered.len(), 26);

    let first = out_dir.path().join("01_sex_distribution.png");
    let last = out_dir.path().join("26_correlation_heatmap.png");
    for path in [&first, &last] {
        assert!(path.is_file(), "missing artifact {}", path.display());
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn test_render_all_isolates_failing_jobs() {
    // A dataset with none of the survey columns: every job fails on a
    // missing column, but render_all still visits all of them
    let df = df! { "unrelated" => [1i32, 2, 3] }.unwrap();
    let out_dir = TempDir::new().unwrap();

    let report = render_all(
        &df,
        &report_jobs(20),
        out_dir.path(),
        &Theme::default(),
    )
    .unwrap();

    assert_eq!(report.rendered.len() + report.failures.len(), 26);
    assert!(report.failures.len() >= 25);

    let (slug, error) = &report.failures[0];
    assert_eq!(slug, "sex_distribution");
    assert!(error.contains("sex"), "error should name the column: {}", error);
}

#[test]
fn test_render_all_creates_output_directory() {
    let df = df! { "unrelated" => [1i32] }.unwrap();
    let out_dir = TempDir::new().unwrap();
    let nested = out_dir.path().join("report").join("charts");

    render_all(&df, &report_jobs(20), &nested, &Theme::default()).unwrap();
    assert!(nested.is_dir());
}

//! Hepascope: Hepatitis-B Survey Analysis CLI Tool
//!
//! Loads one survey dataset, derives BMI and class columns, prints a
//! descriptive summary, and renders the fixed chart report.

mod charts;
mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use charts::{render_all, report_jobs, Theme};
use cli::Cli;
use pipeline::{dataset_stats, load_dataset, with_derived_features};
use report::print_summary;
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output_dir = cli.output_dir();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &output_dir, cli.image_width, cli.image_height);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols, memory_mb) = dataset_stats(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    print_step_time(step_start.elapsed());

    // Step 2: Derive features
    print_step_header(2, "Derive Features");

    let step_start = Instant::now();
    let df = with_derived_features(&df)?;
    print_success("Appended bmi, age_class, and bmi_class columns");

    let undefined_bmi = df
        .column(pipeline::schema::COL_BMI)
        .map(|col| col.null_count())
        .unwrap_or(0);
    if undefined_bmi > 0 {
        print_info(&format!(
            "{} row(s) have an undefined BMI (missing or zero weight/height)",
            undefined_bmi
        ));
    }
    print_step_time(step_start.elapsed());

    // Step 3: Dataset summary
    print_step_header(3, "Dataset Summary");

    let step_start = Instant::now();
    print_summary(&df, cli.preview_rows)?;
    print_step_time(step_start.elapsed());

    // Step 4: Render charts
    print_step_header(4, "Render Charts");

    let step_start = Instant::now();
    let theme = Theme::new(cli.image_width, cli.image_height);
    let jobs = report_jobs(cli.histogram_bins);
    println!();
    let render_report = render_all(&df, &jobs, &output_dir, &theme)?;

    if render_report.failures.is_empty() {
        print_success(&format!(
            "Rendered {} charts to {}",
            render_report.rendered.len(),
            output_dir.display()
        ));
    } else {
        print_success(&format!(
            "Rendered {} of {} charts to {}",
            render_report.rendered.len(),
            jobs.len(),
            output_dir.display()
        ));
        for (slug, error) in &render_report.failures {
            print_warning(&format!("chart '{}' failed: {}", slug, error));
        }
    }
    print_step_time(step_start.elapsed());

    print_completion();

    Ok(())
}

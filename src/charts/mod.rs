//! Chart generation: job descriptors, theming, and rendering

pub mod jobs;
pub mod render;
pub mod theme;

pub use jobs::{report_jobs, ChartJob, ChartKind, PEDIATRICIAN_SUBSET};
pub use render::render_chart;
pub use theme::Theme;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

use crate::utils::create_progress_bar;

/// Outcome of a chart-generation run.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Paths of successfully rendered artifacts, in job order
    pub rendered: Vec<PathBuf>,
    /// (slug, error) for each failed job, in job order
    pub failures: Vec<(String, String)>,
}

/// Render every job into `out_dir` as numbered PNG files.
///
/// Jobs are mutually independent: a failing job is recorded in the report
/// and later jobs still run.
pub fn render_all(
    df: &DataFrame,
    jobs: &[ChartJob],
    out_dir: &Path,
    theme: &Theme,
) -> Result<RenderReport> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create chart directory {}", out_dir.display()))?;

    let pb = create_progress_bar(jobs.len() as u64, "   Rendering charts");
    let mut report = RenderReport::default();

    for (index, job) in jobs.iter().enumerate() {
        let path = out_dir.join(format!("{:02}_{}.png", index + 1, job.slug));
        match render_chart(df, &job.kind, &path, theme) {
            Ok(()) => report.rendered.push(path),
            Err(e) => report.failures.push((job.slug.to_string(), format!("{:#}", e))),
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "   [OK] Rendered {} of {} charts",
        report.rendered.len(),
        jobs.len()
    ));

    Ok(report)
}

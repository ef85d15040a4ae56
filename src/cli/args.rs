//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Hepascope - descriptive analysis and chart report for a hepatitis-B
/// occupational survey dataset
#[derive(Parser, Debug)]
#[command(name = "hepascope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for rendered chart images.
    /// Defaults to a '<input stem>_charts' directory next to the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Number of rows shown in the summary preview
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,

    /// Chart image width in pixels
    #[arg(long, default_value = "1200")]
    pub image_width: u32,

    /// Chart image height in pixels
    #[arg(long, default_value = "800")]
    pub image_height: u32,

    /// Number of bins for the weight and height histograms
    #[arg(long, default_value = "20")]
    pub histogram_bins: usize,
}

impl Cli {
    /// Get the chart output directory, deriving from the input path when
    /// not explicitly provided.
    pub fn output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = self.input.parent().unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("report");
            parent.join(format!("{}_charts", stem))
        })
    }
}

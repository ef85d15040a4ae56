//! Error types for the analysis pipeline.
//!
//! Loader and feature-derivation failures are fatal: no partial table is
//! usable downstream. Chart rendering failures are isolated per job and
//! surface here only as the originating variant.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or analyzing the survey dataset.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input file is missing or unreadable.
    #[error("cannot access input file {}: {source}", path.display())]
    FileAccess {
        /// Path that was attempted
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file exists but cannot be parsed as tabular data.
    #[error("cannot parse '{}' as tabular data: {message}", path.display())]
    Format {
        /// Path that was attempted
        path: PathBuf,
        /// Parser error detail
        message: String,
    },

    /// A referenced column is absent from the loaded schema.
    #[error("column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A derived value or statistic could not be computed.
    #[error("computation failed: {message}")]
    Computation {
        /// Detail of the failed computation
        message: String,
    },
}

impl AnalysisError {
    /// Shorthand for the missing-column case, the most common failure when
    /// a dataset does not match the expected survey schema.
    pub fn missing_column(column: impl Into<String>) -> Self {
        AnalysisError::MissingColumn {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = AnalysisError::missing_column("vhb_infection");
        assert_eq!(err.to_string(), "column 'vhb_infection' not found in dataset");
    }

    #[test]
    fn test_file_access_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AnalysisError::FileAccess {
            path: PathBuf::from("data/survey.csv"),
            source: io_err,
        };
        assert!(err.to_string().contains("data/survey.csv"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_format_display() {
        let err = AnalysisError::Format {
            path: PathBuf::from("bad.csv"),
            message: "invalid utf-8".to_string(),
        };
        assert!(err.to_string().contains("bad.csv"));
        assert!(err.to_string().contains("invalid utf-8"));
    }
}

//! Error types for loading datasets and building reports.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and normalizing the input files.
///
/// Every variant is fatal at startup: the report functions assume a fully
/// normalized dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or inspected.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The tabular dataset is not valid CSV or is missing a column.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The boundary file is not valid GeoJSON.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// A value did not match its expected format or lookup table.
    #[error("data format error at row {row}: {message}")]
    DataFormat {
        /// 1-based data row (header excluded).
        row: usize,
        /// Description of the offending value.
        message: String,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors returned by report functions. These never abort the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The caller asked to summarize a field that has no categorical table.
    #[error("invalid field: {0}")]
    InvalidField(String),
}

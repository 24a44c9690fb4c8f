//! Error types for the ics-export pipeline.

use thiserror::Error;

/// Errors that can abort a pipeline run.
///
/// Only `Fetch` and `Parse` come out of the pipeline stages themselves; the
/// filter and formatter are total. The remaining variants belong to the
/// surrounding configuration and export plumbing.
#[derive(Error, Debug)]
pub enum IcsExportError {
    #[error("Error fetching the ICS file: {0}")]
    Fetch(String),

    #[error("ICS parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ics-export operations.
pub type IcsExportResult<T> = Result<T, IcsExportError>;

impl From<reqwest::Error> for IcsExportError {
    fn from(e: reqwest::Error) -> Self {
        IcsExportError::Fetch(e.to_string())
    }
}

impl From<csv::Error> for IcsExportError {
    fn from(e: csv::Error) -> Self {
        IcsExportError::Export(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for IcsExportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        IcsExportError::Export(e.to_string())
    }
}

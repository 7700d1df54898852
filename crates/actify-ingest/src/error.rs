//! Error types for spreadsheet ingestion.

use thiserror::Error;

/// Errors that can occur while retrieving the spreadsheet export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Transport-level failure (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The export endpoint answered with a non-success status.
    #[error("sheet export returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code returned by the export endpoint.
        status: u16,
    },
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

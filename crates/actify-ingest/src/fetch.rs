//! HTTP retrieval of the spreadsheet CSV export.
//!
//! One GET per refresh cycle against a fixed export URL. Failures are
//! surfaced as `IngestError`; the caller decides whether to degrade to an
//! empty result set.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Spreadsheet id of the production acting-assignment sheet.
pub const DEFAULT_SHEET_ID: &str = "1R36qhv_1z7yI2-wd8bt54Tr7G91l2oQAD9GeLqGR2l0";

/// Worksheet gid within the spreadsheet.
pub const DEFAULT_GID: &str = "0";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Location of a CSV export to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    url: String,
}

impl SheetSource {
    /// Build the Google Sheets CSV export URL for a sheet id and gid.
    pub fn from_parts(sheet_id: &str, gid: &str) -> Self {
        Self {
            url: format!(
                "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&gid={gid}"
            ),
        }
    }

    /// Use a raw export URL as-is.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The export URL this source polls.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SheetSource {
    fn default() -> Self {
        Self::from_parts(DEFAULT_SHEET_ID, DEFAULT_GID)
    }
}

/// Blocking HTTP client for fetching CSV exports.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Create a client with the standard timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(IngestError::from)?;
        Ok(Self { client })
    }

    /// Fetch the full CSV text body from the export endpoint.
    ///
    /// A non-success HTTP status is an error; the body is never inspected
    /// in that case.
    pub fn fetch_csv(&self, source: &SheetSource) -> Result<String> {
        debug!(url = source.url(), "fetching sheet export");
        let response = self
            .client
            .get(source.url())
            .header(
                USER_AGENT,
                format!("actify/{}", env!("CARGO_PKG_VERSION")),
            )
            .send()?;
        if !response.status().is_success() {
            return Err(IngestError::HttpStatus {
                status: response.status().as_u16(),
            });
        }
        let body = response.text()?;
        debug!(bytes = body.len(), "sheet export retrieved");
        Ok(body)
    }
}

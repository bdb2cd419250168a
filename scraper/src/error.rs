//! Error types for the scraper.

use std::io;

use thiserror::Error;

/// Failure while fetching or parsing one category page. Never fatal to a run:
/// the page contributes zero records and the next page is processed.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("no listings table found on {url}")]
    MissingContainer { url: String },
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Failure while writing the spreadsheet.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Failure while writing the JSON export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal conditions for a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("extractor setup failed: {0}")]
    Setup(#[source] ScrapeError),
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

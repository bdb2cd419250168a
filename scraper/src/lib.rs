//! RemoteOK category scraper.
//!
//! Fetches the listing page of each configured category, extracts one
//! [`common::JobRecord`] per job row and writes everything to a styled
//! spreadsheet.

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod logger;
pub mod report;
pub mod run;
pub mod salary;

pub use config::{CategoryPage, Cli, Config};
pub use error::{ExportError, ReportError, RunError, ScrapeError};
pub use extract::{Extractor, derive_category};
pub use fetch::{HttpSource, PageSource};
pub use report::{ReportOutcome, report};
pub use run::{PageReport, RunSummary, collect_records, run, scrape_pages};

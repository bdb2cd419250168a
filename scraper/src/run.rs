//! Drives one scrape: every category page in order, then the report.

use common::JobRecord;
use log::{error, info, warn};

use crate::config::{CategoryPage, Config};
use crate::error::{RunError, ScrapeError};
use crate::export::export_json;
use crate::extract::Extractor;
use crate::fetch::PageSource;
use crate::report::{ReportOutcome, report};

/// What happened to one category page.
#[derive(Debug)]
pub struct PageReport {
    pub category: String,
    pub url: String,
    pub outcome: Result<Vec<JobRecord>, ScrapeError>,
}

impl PageReport {
    pub fn record_count(&self) -> usize {
        self.outcome.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub pages: usize,
    pub failed_pages: usize,
    pub records: usize,
    pub outcome: ReportOutcome,
}

/// Fetches and extracts each page in turn. A failing page is logged and
/// reported; it never stops the pages after it.
pub fn scrape_pages<S: PageSource + ?Sized>(
    source: &S,
    extractor: &Extractor,
    pages: &[CategoryPage],
) -> Vec<PageReport> {
    pages
        .iter()
        .map(|page| {
            info!("Fetching jobs from: {}", page.url);
            let outcome = source
                .fetch(&page.url)
                .and_then(|markup| extractor.parse_page(&markup, &page.url));

            match &outcome {
                Ok(jobs) => info!("{} jobs found on {}", jobs.len(), page.url),
                Err(ScrapeError::MissingContainer { .. }) => {
                    warn!("No listings on {}", page.url)
                }
                Err(e) => error!("Error scraping {}: {}", page.url, e),
            }

            PageReport {
                category: page.label(),
                url: page.url.clone(),
                outcome,
            }
        })
        .collect()
}

/// All successfully scraped records, in page order then document order.
pub fn collect_records(reports: &[PageReport]) -> Vec<JobRecord> {
    reports
        .iter()
        .filter_map(|page| page.outcome.as_ref().ok())
        .flatten()
        .cloned()
        .collect()
}

pub fn run<S: PageSource + ?Sized>(config: &Config, source: &S) -> Result<RunSummary, RunError> {
    let extractor = Extractor::new().map_err(RunError::Setup)?;

    let reports = scrape_pages(source, &extractor, &config.categories);
    let failed_pages = reports.iter().filter(|page| page.outcome.is_err()).count();
    let jobs = collect_records(&reports);

    let outcome = report(&jobs, &config.output)?;
    if let (ReportOutcome::Written { .. }, Some(path)) = (&outcome, &config.json_output) {
        export_json(&jobs, path)?;
    }

    Ok(RunSummary {
        pages: reports.len(),
        failed_pages,
        records: jobs.len(),
        outcome,
    })
}

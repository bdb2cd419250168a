//! Turns a RemoteOK category page into job records.

use common::{
    COMPANY_NOT_FOUND, DEFAULT_LOCATION, DEFAULT_SALARY, JobRecord, REMOTEOK_DOMAIN,
    TITLE_NOT_FOUND,
};
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

const FALLBACK_CATEGORY: &str = "Unknown";

/// CSS selectors for the listings markup, compiled once and reused for all pages.
#[derive(Debug)]
struct Selectors {
    board: Selector,
    row: Selector,
    title: Selector,
    company_name: Selector,
    company_cell: Selector,
    location: Selector,
    salary: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            board: compile("table#jobsboard")?,
            row: compile("tr.job")?,
            title: compile(r#"h2[itemprop="title"]"#)?,
            company_name: compile(r#"h3[itemprop="name"]"#)?,
            company_cell: compile("td.company")?,
            location: compile("div.location")?,
            salary: compile("div.salary")?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Debug)]
pub struct Extractor {
    selectors: Selectors,
}

impl Extractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            selectors: Selectors::new()?,
        })
    }

    /// Extracts every job row on the page, in document order.
    ///
    /// A page without the listings table yields no records.
    pub fn extract(&self, markup: &str, source_url: &str) -> Vec<JobRecord> {
        self.parse_page(markup, source_url).unwrap_or_default()
    }

    /// Like [`Extractor::extract`], but reports a missing listings table as
    /// [`ScrapeError::MissingContainer`] instead of an empty page.
    pub fn parse_page(
        &self,
        markup: &str,
        source_url: &str,
    ) -> Result<Vec<JobRecord>, ScrapeError> {
        let document = Html::parse_document(markup);
        let board = document
            .select(&self.selectors.board)
            .next()
            .ok_or_else(|| ScrapeError::MissingContainer {
                url: source_url.to_string(),
            })?;

        let category = derive_category(source_url);
        let jobs: Vec<JobRecord> = board
            .select(&self.selectors.row)
            .map(|row| self.record(row, &category))
            .collect();

        debug!("{} rows extracted from {}", jobs.len(), source_url);
        Ok(jobs)
    }

    fn record(&self, row: ElementRef<'_>, category: &str) -> JobRecord {
        let sel = &self.selectors;

        let title = attr(row, "data-position")
            .or_else(|| first_text(row, &sel.title))
            .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());

        let company = attr(row, "data-company")
            .or_else(|| first_text(row, &sel.company_name))
            .unwrap_or_else(|| COMPANY_NOT_FOUND.to_string());

        let location = row
            .select(&sel.company_cell)
            .next()
            .and_then(|cell| first_text(cell, &sel.location))
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let salary =
            first_text(row, &sel.salary).unwrap_or_else(|| DEFAULT_SALARY.to_string());

        // A missing data-href leaves the bare domain as the link.
        let link = format!(
            "{}{}",
            REMOTEOK_DOMAIN,
            row.value().attr("data-href").unwrap_or_default()
        );

        JobRecord {
            category: category.to_string(),
            title,
            company,
            location,
            salary,
            link,
        }
    }
}

/// Attribute value, verbatim, when present and non-empty.
fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Trimmed text of the first descendant matching `selector`, if non-empty.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Human label for a category page URL: `.../remote-dev-jobs` becomes `Dev`.
pub fn derive_category(url: &str) -> String {
    let segment = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let slug = segment.strip_prefix("remote-").unwrap_or(segment);
    let slug = slug.strip_suffix("-jobs").unwrap_or(slug);

    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => FALLBACK_CATEGORY.to_string(),
    }
}

use std::fs;
use std::path::Path;

use common::JobRecord;
use remoteok_scraper::{
    CategoryPage, Config, Extractor, PageSource, ReportOutcome, ScrapeError, derive_category, run,
};

const DEV_URL: &str = "https://remoteok.com/remote-dev-jobs";

fn fixture() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/remote-dev-jobs.html");
    fs::read_to_string(path).unwrap()
}

struct FixtureSource;

impl PageSource for FixtureSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        if url == DEV_URL {
            Ok(fixture())
        } else {
            Err(ScrapeError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::FORBIDDEN,
            })
        }
    }
}

#[test]
fn fixture_page_extracts_every_row() {
    let extractor = Extractor::new().unwrap();
    let jobs = extractor.extract(&fixture(), DEV_URL);

    assert_eq!(
        jobs,
        vec![
            JobRecord {
                category: "Dev".to_string(),
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Worldwide".to_string(),
                salary: "$80k".to_string(),
                link: "https://remoteok.com/job/123".to_string(),
            },
            JobRecord {
                category: "Dev".to_string(),
                title: "Senior Frontend Developer".to_string(),
                company: "Globex".to_string(),
                location: "🇪🇺 Europe".to_string(),
                salary: "💰 $60,000 - $90,000".to_string(),
                link: "https://remoteok.com/job/456".to_string(),
            },
            JobRecord {
                category: "Dev".to_string(),
                title: "Title Not Found".to_string(),
                company: "Company Not Found".to_string(),
                location: "Worldwide".to_string(),
                salary: "Not specified".to_string(),
                link: "https://remoteok.com".to_string(),
            },
        ]
    );
}

#[test]
fn category_is_derived_from_url() {
    assert_eq!(derive_category(DEV_URL), "Dev");
    assert_eq!(derive_category("https://remoteok.com/remote-writing-jobs"), "Writing");
}

#[test]
fn run_survives_failing_categories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("jobs_multi.xlsx");
    let config = Config {
        categories: vec![
            CategoryPage::from_slug("design"),
            CategoryPage::new(DEV_URL),
            CategoryPage::from_slug("sales"),
        ],
        output: output.clone(),
        ..Config::default()
    };

    let summary = run(&config, &FixtureSource).unwrap();

    assert_eq!(summary.pages, 3);
    assert_eq!(summary.failed_pages, 2);
    assert_eq!(summary.records, 3);
    assert_eq!(
        summary.outcome,
        ReportOutcome::Written {
            rows: 3,
            path: output.clone()
        }
    );
    assert!(output.exists());
}

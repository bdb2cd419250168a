use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::REMOTEOK_DOMAIN;

use crate::extract::derive_category;

pub const DEFAULT_OUTPUT: &str = "jobs_multi.xlsx";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CATEGORY_SLUGS: [&str; 5] = ["dev", "design", "marketing", "writing", "sales"];

/// One category listing page to scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub url: String,
}

impl CategoryPage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// `dev` becomes `https://remoteok.com/remote-dev-jobs`.
    pub fn from_slug(slug: &str) -> Self {
        Self::new(format!("{}/remote-{}-jobs", REMOTEOK_DOMAIN, slug))
    }

    pub fn label(&self) -> String {
        derive_category(&self.url)
    }
}

pub fn default_categories() -> Vec<CategoryPage> {
    DEFAULT_CATEGORY_SLUGS
        .iter()
        .map(|slug| CategoryPage::from_slug(slug))
        .collect()
}

/// Everything a run needs, passed explicitly into [`crate::run::run`].
#[derive(Debug, Clone)]
pub struct Config {
    pub categories: Vec<CategoryPage>,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            json_output: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "remoteok-scraper",
    about = "Scrape RemoteOK category pages into a styled spreadsheet",
    long_about = "Fetch each RemoteOK category listing page in order, extract job records, and save them to a single styled .xlsx file."
)]
pub struct Cli {
    #[arg(
        long,
        short,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        help = "Spreadsheet to write (overwritten if it exists)"
    )]
    pub output: PathBuf,
    #[arg(
        long = "category",
        value_name = "SLUG",
        help = "Category slug such as 'dev'; repeat as needed in scrape order [default: dev, design, marketing, writing, sales]"
    )]
    pub categories: Vec<String>,
    #[arg(long, value_name = "PATH", help = "Also save the records as JSON")]
    pub json: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_USER_AGENT, help = "User-Agent header sent with every request")]
    pub user_agent: String,
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Per-request timeout in seconds"
    )]
    pub timeout_secs: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let categories = if cli.categories.is_empty() {
            default_categories()
        } else {
            cli.categories
                .iter()
                .map(|slug| CategoryPage::from_slug(slug))
                .collect()
        };

        Self {
            categories,
            output: cli.output,
            json_output: cli.json,
            user_agent: cli.user_agent,
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_order() {
        let urls: Vec<String> = default_categories().into_iter().map(|c| c.url).collect();
        assert_eq!(
            urls,
            [
                "https://remoteok.com/remote-dev-jobs",
                "https://remoteok.com/remote-design-jobs",
                "https://remoteok.com/remote-marketing-jobs",
                "https://remoteok.com/remote-writing-jobs",
                "https://remoteok.com/remote-sales-jobs",
            ]
        );
    }

    #[test]
    fn test_category_label() {
        assert_eq!(CategoryPage::from_slug("marketing").label(), "Marketing");
    }

    #[test]
    fn test_cli_defaults() {
        let config = Config::from(Cli::parse_from(["remoteok-scraper"]));
        assert_eq!(config.categories, default_categories());
        assert_eq!(config.output, PathBuf::from("jobs_multi.xlsx"));
        assert_eq!(config.json_output, None);
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "remoteok-scraper",
            "--category",
            "sales",
            "--category",
            "dev",
            "-o",
            "out.xlsx",
            "--json",
            "data/jobs.json",
            "--timeout-secs",
            "5",
        ]);
        let config = Config::from(cli);
        assert_eq!(
            config.categories,
            [CategoryPage::from_slug("sales"), CategoryPage::from_slug("dev")]
        );
        assert_eq!(config.output, PathBuf::from("out.xlsx"));
        assert_eq!(config.json_output, Some(PathBuf::from("data/jobs.json")));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

use log::warn;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::{Config, DEFAULT_USER_AGENT};
use crate::error::{RunError, ScrapeError};

/// Where category page markup comes from.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Fetches pages over HTTP, one attempt per page.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, RunError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent).unwrap_or_else(|_| {
            warn!("Invalid User-Agent {:?}, using {}", config.user_agent, DEFAULT_USER_AGENT);
            HeaderValue::from_static(DEFAULT_USER_AGENT)
        });
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(RunError::Client)?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let fetch_error = |source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(fetch_error)
    }
}

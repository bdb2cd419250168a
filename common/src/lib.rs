use serde::{Deserialize, Serialize};

/// Site every relative job link is resolved against.
pub const REMOTEOK_DOMAIN: &str = "https://remoteok.com";

pub const TITLE_NOT_FOUND: &str = "Title Not Found";
pub const COMPANY_NOT_FOUND: &str = "Company Not Found";
pub const DEFAULT_LOCATION: &str = "Worldwide";
pub const DEFAULT_SALARY: &str = "Not specified";

/// One scraped listing. Every field is populated: extraction always ends in a
/// literal default when the page has nothing better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRecord {
    pub category: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub link: String,
}

impl JobRecord {
    /// Column names in report order.
    pub const COLUMNS: [&'static str; 6] =
        ["Category", "Title", "Company", "Location", "Salary", "Link"];

    /// Field values in the same order as [`JobRecord::COLUMNS`].
    pub fn values(&self) -> [&str; 6] {
        [
            &self.category,
            &self.title,
            &self.company,
            &self.location,
            &self.salary,
            &self.link,
        ]
    }
}

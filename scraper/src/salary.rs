use std::sync::LazyLock;

use regex::Regex;

// Numbers may have commas ("50,000") and a thousands suffix ("80k").
static SALARY_FIGURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?(\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?\s*([kK])?")
        .expect("salary pattern is a valid regex")
});

/// Extracts the lower bound from a salary string.
/// Returns the first figure of at least 1000 (after applying a `k` suffix).
pub fn salary_floor(salary: &str) -> Option<i64> {
    for cap in SALARY_FIGURE.captures_iter(salary) {
        let Some(matched) = cap.get(1) else {
            continue;
        };
        let digits: String = matched
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let Ok(mut value) = digits.parse::<i64>() else {
            continue;
        };
        if cap.get(2).is_some() {
            value = value.saturating_mul(1000);
        }
        if value >= 1000 {
            return Some(value);
        }
    }
    None
}

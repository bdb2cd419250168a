use std::fs;
use std::path::Path;

use common::JobRecord;
use log::info;
use serde::Serialize;

use crate::error::ExportError;
use crate::salary::salary_floor;

/// A record as it appears in the JSON export.
#[derive(Debug, Serialize)]
struct ExportedJob<'a> {
    #[serde(flatten)]
    record: &'a JobRecord,
    salary_min: Option<i64>,
}

/// Saves `records` as pretty JSON, creating the parent directory if needed.
pub fn export_json(records: &[JobRecord], path: &Path) -> Result<(), ExportError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            info!("Created directory {}", dir.display());
        }
    }

    let jobs: Vec<ExportedJob<'_>> = records
        .iter()
        .map(|record| ExportedJob {
            record,
            salary_min: salary_floor(&record.salary),
        })
        .collect();

    let json_output = serde_json::to_string_pretty(&jobs)?;
    fs::write(path, json_output)?;

    info!("Saved {} jobs to {}", records.len(), path.display());
    Ok(())
}

//! Styled spreadsheet output.
//!
//! Layout: one header row (solid blue fill, bold white text), one row per
//! record with alternating white/light-blue banding, thin borders on every
//! used cell, and an autofilter spanning the whole table.

use std::path::{Path, PathBuf};

use common::JobRecord;
use log::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};

use crate::error::ReportError;

pub const HEADER_FILL: u32 = 0x4F81BD;
pub const BAND_FILL: u32 = 0xD9E1F2;
pub const PLAIN_FILL: u32 = 0xFFFFFF;

const MIN_COLUMN_WIDTH: usize = 20;
const COLUMN_PADDING: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// No records; nothing was written.
    NothingToReport,
    Written { rows: usize, path: PathBuf },
}

/// Column width, in character units, for a column titled `header`.
pub fn column_width(header: &str) -> f64 {
    (header.chars().count() + COLUMN_PADDING).max(MIN_COLUMN_WIDTH) as f64
}

/// Background for a data row; `data_row` is 1-based and excludes the header.
///
/// Parity is taken on the data row, not the sheet row: the second data row
/// (sheet row 3) is shaded and the first is white. Older exports of this
/// report shaded even sheet rows instead; keep the data-row parity.
pub fn row_fill(data_row: usize) -> u32 {
    if data_row % 2 == 0 { BAND_FILL } else { PLAIN_FILL }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
}

fn row_format(fill: u32) -> Format {
    Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(fill))
        .set_border(FormatBorder::Thin)
}

/// Writes `records` to `path` as a styled workbook, replacing any existing file.
///
/// An empty slice touches nothing on disk and returns
/// [`ReportOutcome::NothingToReport`].
pub fn report(
    records: &[JobRecord],
    path: impl AsRef<Path>,
) -> Result<ReportOutcome, ReportError> {
    let path = path.as_ref();
    if records.is_empty() {
        return Ok(ReportOutcome::NothingToReport);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header = header_format();
    for (col, name) in JobRecord::COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *name, &header)?;
        worksheet.set_column_width(col, column_width(name))?;
    }

    let banded = row_format(BAND_FILL);
    let plain = row_format(PLAIN_FILL);
    for (index, job) in records.iter().enumerate() {
        let data_row = index + 1;
        let format = if row_fill(data_row) == BAND_FILL { &banded } else { &plain };
        for (col, value) in job.values().iter().enumerate() {
            worksheet.write_string_with_format(data_row as u32, col as u16, *value, format)?;
        }
    }

    let last_row = records.len() as u32;
    let last_col = (JobRecord::COLUMNS.len() - 1) as u16;
    worksheet.autofilter(0, 0, last_row, last_col)?;

    workbook.save(path)?;
    info!("Wrote {} rows to {}", records.len(), path.display());

    Ok(ReportOutcome::Written {
        rows: records.len(),
        path: path.to_path_buf(),
    })
}

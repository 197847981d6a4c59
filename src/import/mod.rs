//! Table loading: workbook or CSV file → normalized `RawTable`.

mod cell;
mod csv_file;
pub mod headers;
mod workbook;

pub use cell::cell_to_string;

use crate::errors::{AppError, AppResult};
use crate::models::RawTable;
use headers::build_columns;
use log::debug;
use std::path::Path;

/// Kind of input file, chosen from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Workbook,
    Csv,
}

impl InputKind {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods" => Ok(InputKind::Workbook),
            "csv" => Ok(InputKind::Csv),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load `sheet_name` from `path`, taking headers from the 0-based `header_row`.
pub fn load_table(path: &Path, sheet_name: &str, header_row: usize) -> AppResult<RawTable> {
    let rows = match InputKind::from_path(path)? {
        InputKind::Workbook => workbook::read_sheet_rows(path, sheet_name)?,
        InputKind::Csv => csv_file::read_csv_rows(path)?,
    };

    let table = build_table(sheet_name, rows, header_row)?;
    debug!(
        "loaded {} rows and {} columns from '{}'",
        table.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Split physical rows into a header row and data rows.
///
/// Rows before `header_row` are discarded and fully empty data rows skipped.
pub fn build_table(
    sheet_name: &str,
    mut rows: Vec<Vec<String>>,
    header_row: usize,
) -> AppResult<RawTable> {
    if header_row >= rows.len() {
        return Err(AppError::HeaderRowOutOfRange {
            sheet: sheet_name.to_string(),
            row: header_row,
            rows: rows.len(),
        });
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let data = rows.split_off(header_row + 1);
    let mut header = rows.pop().unwrap_or_default();
    header.resize(width, String::new());

    let mut table = RawTable::new(sheet_name, build_columns(&header));
    for cells in data {
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        table.push_row(cells);
    }

    Ok(table)
}

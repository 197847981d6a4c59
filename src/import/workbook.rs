use crate::errors::{AppError, AppResult};
use crate::import::cell::cell_to_string;
use calamine::{Reader, open_workbook_auto};
use std::path::Path;

/// Read a sheet as rows of strings anchored at A1.
///
/// calamine ranges start at the first used cell, so leading empty rows and
/// columns are put back to keep row offsets physical.
pub(crate) fn read_sheet_rows(path: &Path, sheet_name: &str) -> AppResult<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)?;

    let available = workbook.sheet_names();
    if !available.iter().any(|s| s == sheet_name) {
        return Err(AppError::SheetNotFound {
            name: sheet_name.to_string(),
            available,
        });
    }

    let range = workbook.worksheet_range(sheet_name)?;
    let Some((start_row, start_col)) = range.start() else {
        return Ok(Vec::new());
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }

    Ok(rows)
}

use crate::errors::AppResult;
use std::path::Path;

/// Read every CSV record as a physical row; no header interpretation.
pub(crate) fn read_csv_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

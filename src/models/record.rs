use crate::models::{Category, ParsedDuration, ParsedTimestamp};

/// One data row of the input sheet.
///
/// `cells[i]` holds the value of `RawTable::columns[i]`; an empty cell is an
/// empty string. Records are never modified after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 0-based position of the row among the data rows.
    pub position: usize,
    pub cells: Vec<String>,
}

impl RawRecord {
    pub fn new(position: usize, cells: Vec<String>) -> Self {
        Self { position, cells }
    }

    /// Cell value at `col`, or "" when the row is shorter than the header.
    pub fn cell(&self, col: usize) -> &str {
        self.cells.get(col).map(String::as_str).unwrap_or("")
    }
}

/// Normalized input table: header names plus string-typed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<RawRecord>,
}

impl RawTable {
    pub fn new(sheet_name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        let position = self.rows.len();
        self.rows.push(RawRecord::new(position, cells));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Working view of a record: the parsed fields and the bucket it falls in.
/// Never written to the original-data sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub position: usize,
    pub timestamp: ParsedTimestamp,
    pub duration: ParsedDuration,
    pub category: Category,
}

impl ClassifiedRecord {
    /// Day of month of the entry timestamp, `None` when it failed to parse.
    pub fn day(&self) -> Option<u32> {
        self.timestamp.day()
    }
}

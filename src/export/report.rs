//! Logical layout of the output workbook.

use crate::core::Analysis;
use crate::models::{Category, RawRecord, RawTable};

/// Sheet holding the day × category pivot.
pub const PIVOT_SHEET: &str = "Planilha2";
/// First column of the pivot sheet.
pub const DAY_HEADER: &str = "DAY";

#[derive(Debug, Clone, PartialEq)]
pub enum ReportCell {
    Text(String),
    Number(f64),
    Empty,
}

impl ReportCell {
    pub fn text(s: &str) -> Self {
        if s.is_empty() {
            ReportCell::Empty
        } else {
            ReportCell::Text(s.to_string())
        }
    }

    /// Value as shown in a plain-text rendering.
    pub fn display(&self) -> String {
        match self {
            ReportCell::Text(s) => s.clone(),
            ReportCell::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            ReportCell::Number(n) => n.to_string(),
            ReportCell::Empty => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<ReportCell>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub sheets: Vec<ReportSheet>,
}

impl Report {
    pub fn sheet(&self, name: &str) -> Option<&ReportSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Build the sheet list: original data, pivot, then one detail sheet per category.
///
/// Data sheets carry only the input columns; parsed fields stay in `analysis`.
pub fn assemble_report(table: &RawTable, analysis: &Analysis) -> Report {
    let mut sheets = Vec::with_capacity(2 + Category::ALL.len());

    sheets.push(data_sheet(&table.sheet_name, table, table.rows.iter()));
    sheets.push(pivot_sheet(analysis));

    for cat in Category::ALL {
        let rows = analysis
            .positions_in(cat)
            .filter_map(|pos| table.rows.get(pos));
        sheets.push(data_sheet(&cat.detail_sheet_name(), table, rows));
    }

    Report { sheets }
}

fn data_sheet<'a>(
    name: &str,
    table: &RawTable,
    rows: impl Iterator<Item = &'a RawRecord>,
) -> ReportSheet {
    ReportSheet {
        name: name.to_string(),
        headers: table.columns.clone(),
        rows: rows
            .map(|r| r.cells.iter().map(|c| ReportCell::text(c)).collect())
            .collect(),
    }
}

fn pivot_sheet(analysis: &Analysis) -> ReportSheet {
    let mut headers = vec![DAY_HEADER.to_string()];
    headers.extend(Category::ALL.iter().map(|c| c.label().to_string()));

    let rows = analysis
        .pivot
        .days
        .iter()
        .map(|d| {
            let mut row = vec![ReportCell::Number(f64::from(d.day))];
            row.extend(Category::ALL.iter().map(|c| ReportCell::Number(d.count(*c) as f64)));
            row
        })
        .collect();

    ReportSheet {
        name: PIVOT_SHEET.to_string(),
        headers,
        rows,
    }
}

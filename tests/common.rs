#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;
use tcreport::import::cell_to_string;
use tcreport::models::RawTable;

pub const SHEET: &str = "Recuperada_Planilha1";
pub const HEADER_ROW: u32 = 14;

pub fn tc() -> Command {
    cargo_bin_cmd!("tcreport")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tcreport.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Path of a config file that does not exist, so defaults are used.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
        .to_string_lossy()
        .to_string()
}

/// Headers like the legacy export: newlines and padding inside the names.
pub fn legacy_headers() -> Vec<&'static str> {
    vec!["Contêiner", " Dt.Entrada\n(Gate) ", "Placa", "Tempo\nPermanência"]
}

/// Write a workbook with a title block, headers on `HEADER_ROW` and string cells.
pub fn write_input(path: &PathBuf, headers: &[&str], rows: &[Vec<&str>]) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name(SHEET).expect("sheet name");

    ws.write_string(0, 0, "RELATÓRIO DE ENTRADAS").expect("title");
    ws.write_string(1, 0, "Terminal: TC").expect("subtitle");

    for (c, h) in headers.iter().enumerate() {
        ws.write_string(HEADER_ROW, c as u16, *h).expect("header");
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            if !v.is_empty() {
                ws.write_string(HEADER_ROW + 1 + r as u32, c as u16, *v)
                    .expect("cell");
            }
        }
    }
    wb.save(path).expect("save input workbook");
}

/// Four-column sample with two records on day 5 and one on day 12.
pub fn sample_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["MSCU1234567", "2024-03-05 08:10:00", "ABC1D23", "0:30"],
        vec!["MSCU7654321", "2024-03-05 09:00:00", "XYZ9K88", "0:50"],
        vec!["TGHU0000001", "2024-03-12 14:00:00", "QWE4R56", "2:05"],
    ]
}

/// Read a whole sheet as strings, starting at the sheet's first used cell.
pub fn read_sheet(path: &PathBuf, sheet: &str) -> Vec<Vec<String>> {
    let mut wb = open_workbook_auto(path).expect("open report");
    let range = wb.worksheet_range(sheet).expect("sheet present");
    range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect()
}

pub fn sheet_names(path: &PathBuf) -> Vec<String> {
    let wb = open_workbook_auto(path).expect("open report");
    wb.sheet_names()
}

/// In-memory table with the given columns and rows.
pub fn table(columns: &[&str], rows: &[Vec<&str>]) -> RawTable {
    let mut t = RawTable::new(SHEET, columns.iter().map(|c| c.to_string()).collect());
    for r in rows {
        t.push_row(r.iter().map(|c| c.to_string()).collect());
    }
    t
}

//! Unified application error type.
//! All modules (import, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook reading / writing
    // ---------------------------
    #[error("Workbook read error: {0}")]
    WorkbookRead(#[from] calamine::Error),

    #[error("Workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input layout errors (fatal, abort before processing)
    // ---------------------------
    #[error(
        "Could not find the expected columns.\nLooked for something like {} in: {}",
        quoted(.missing),
        list(.available)
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Sheet '{name}' not found. Available sheets: {}", list(.available))]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Header row {row} is beyond the end of sheet '{sheet}' ({rows} rows)")]
    HeaderRowOutOfRange { sheet: String, row: usize, rows: usize },

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid thresholds: {first} min must be lower than {second} min")]
    InvalidThresholds { first: u32, second: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export cancelled: existing file '{0}' not overwritten")]
    ExportCancelled(String),

    #[error("Output '{0}' is the input file; choose a different output path")]
    OutputIsInput(String),
}

pub type AppResult<T> = Result<T, AppError>;

fn list(items: &[String]) -> String {
    format!("{items:?}")
}

fn quoted(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}

//! Pipeline entry point: resolve → parse → classify → aggregate → report.

use crate::core::aggregate::{aggregate_by_day, months_spanned};
use crate::core::classify::Thresholds;
use crate::core::columns::{ResolvedColumns, resolve_columns};
use crate::core::fields::{parse_duration, parse_timestamp};
use crate::errors::AppResult;
use crate::export::report::{Report, assemble_report};
use crate::export::xlsx::write_report;
use crate::import::load_table;
use crate::models::{Category, ClassifiedRecord, PivotTable, RawTable};
use log::debug;
use std::path::PathBuf;

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub sheet_name: String,
    /// 0-based row holding the column headers.
    pub header_row: usize,
    pub thresholds: Thresholds,
}

/// Result of running components 1–4 over a loaded table.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub columns: ResolvedColumns,
    pub records: Vec<ClassifiedRecord>,
    pub pivot: PivotTable,
}

impl Analysis {
    /// Positions of the records falling in `category`, in input order.
    pub fn positions_in(&self, category: Category) -> impl Iterator<Item = usize> + '_ {
        self.records
            .iter()
            .filter(move |r| r.category == category)
            .map(|r| r.position)
    }

    pub fn missing_timestamps(&self) -> usize {
        self.records.iter().filter(|r| r.timestamp.is_missing()).count()
    }

    pub fn zero_durations(&self) -> usize {
        self.records.iter().filter(|r| r.duration.is_fallback()).count()
    }

    /// (year, month) pairs seen; more than one means day rows merge months.
    pub fn months(&self) -> Vec<(i32, u32)> {
        months_spanned(&self.records)
    }
}

/// Resolve columns, parse and classify every record, then build the pivot.
///
/// Fails only when a required column is missing; bad cells degrade to
/// sentinel values.
pub fn analyze(table: &RawTable, thresholds: &Thresholds) -> AppResult<Analysis> {
    thresholds.validate()?;
    let columns = resolve_columns(&table.columns)?;

    let records: Vec<ClassifiedRecord> = table
        .rows
        .iter()
        .map(|row| {
            let raw_ts = row.cell(columns.date_entry);
            let raw_dur = row.cell(columns.duration);

            let timestamp = parse_timestamp(raw_ts);
            if timestamp.is_missing() {
                debug!("row {}: unparsable entry timestamp {:?}", row.position, raw_ts);
            }
            let duration = parse_duration(raw_dur);
            if duration.is_fallback() {
                debug!("row {}: unparsable duration {:?}, using 0", row.position, raw_dur);
            }

            ClassifiedRecord {
                position: row.position,
                timestamp,
                duration,
                category: thresholds.classify(duration),
            }
        })
        .collect();

    let pivot = aggregate_by_day(&records);

    Ok(Analysis {
        columns,
        records,
        pivot,
    })
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub table: RawTable,
    pub analysis: Analysis,
    pub report: Report,
}

/// Load the input, analyze it and write the report.
///
/// The report is assembled completely before the output file is created.
pub fn run_pipeline(cfg: &PipelineConfig) -> AppResult<RunSummary> {
    let table = load_table(&cfg.input_path, &cfg.sheet_name, cfg.header_row)?;
    let analysis = analyze(&table, &cfg.thresholds)?;
    let report = assemble_report(&table, &analysis);

    write_report(&report, &cfg.output_path)?;

    Ok(RunSummary {
        table,
        analysis,
        report,
    })
}

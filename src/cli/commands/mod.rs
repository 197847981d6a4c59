pub mod config;
pub mod convert;
pub mod init;
pub mod process;
pub mod summary;

use crate::cli::parser::InputArgs;
use crate::config::Overrides;
use crate::core::{Analysis, Thresholds};
use crate::models::{Category, RawTable};
use crate::ui::messages::{info, warning};

impl From<&InputArgs> for Overrides {
    fn from(a: &InputArgs) -> Self {
        Overrides {
            input: a.input.clone(),
            sheet: a.sheet.clone(),
            header_row: a.header_row,
            ..Overrides::default()
        }
    }
}

/// Category labels are fixed, so non-default bounds no longer match their wording.
pub(crate) fn warn_custom_thresholds(thresholds: &Thresholds) {
    if thresholds.is_default() {
        return;
    }
    warning(format!(
        "Custom thresholds {}/{} min in use; category labels still read {}",
        thresholds.up_to_minutes,
        thresholds.up_to_hour_minutes,
        Category::ALL
            .iter()
            .map(|c| format!("'{}'", c.label()))
            .collect::<Vec<_>>()
            .join(", ")
    ));
}

/// Print resolved columns and every silent fallback the run went through.
pub(crate) fn print_diagnostics(table: &RawTable, analysis: &Analysis) {
    info(format!(
        "Columns: date entry '{}', duration '{}' ({} records)",
        table.columns[analysis.columns.date_entry],
        table.columns[analysis.columns.duration],
        table.len()
    ));

    if table.is_empty() {
        warning("No data rows found below the header row; the report only carries headers");
    }

    let missing = analysis.missing_timestamps();
    if missing > 0 {
        warning(format!(
            "{missing} record(s) with an unreadable entry date were left out of the day summary"
        ));
    }

    let zero = analysis.zero_durations();
    if zero > 0 {
        warning(format!(
            "{zero} record(s) with an unreadable duration were counted as 0 minutes"
        ));
    }

    let months = analysis.months();
    if months.len() > 1 {
        let list: Vec<String> = months
            .iter()
            .map(|(y, m)| format!("{y}-{m:02}"))
            .collect();
        warning(format!(
            "Entries span several months ({}); days with the same number are merged",
            list.join(", ")
        ));
    }
}

//! Column discovery over noisy, normalized header names.

use crate::errors::{AppError, AppResult};
use log::info;

/// Logical role of a column the pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKey {
    DateEntry,
    Duration,
}

impl HeaderKey {
    /// Fragment searched for inside the lower-cased, whitespace-free header.
    pub fn fragment(&self) -> &'static str {
        match self {
            HeaderKey::DateEntry => "dt.entrada",
            HeaderKey::Duration => "tempo",
        }
    }

    /// Human-readable form used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            HeaderKey::DateEntry => "Dt.Entrada",
            HeaderKey::Duration => "Tempo",
        }
    }
}

/// Columns located for one input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub date_entry: usize,
    pub duration: usize,
}

/// Lower-case `name` and drop every whitespace character.
pub fn compact_header(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Index of the first column whose compacted name contains `fragment`.
///
/// Matching follows column order, so with several candidates the leftmost wins.
pub fn find_column(columns: &[String], fragment: &str) -> Option<usize> {
    let needle = fragment.to_lowercase();
    columns
        .iter()
        .position(|c| compact_header(c).contains(&needle))
}

/// Locate the date-entry and duration columns, or fail listing every column found.
pub fn resolve_columns(columns: &[String]) -> AppResult<ResolvedColumns> {
    let date_entry = find_column(columns, HeaderKey::DateEntry.fragment());
    let duration = find_column(columns, HeaderKey::Duration.fragment());

    match (date_entry, duration) {
        (Some(date_entry), Some(duration)) => {
            info!(
                "date entry column: {:?}, duration column: {:?}",
                columns[date_entry], columns[duration]
            );
            Ok(ResolvedColumns {
                date_entry,
                duration,
            })
        }
        _ => {
            let missing = [
                (HeaderKey::DateEntry, date_entry),
                (HeaderKey::Duration, duration),
            ]
            .into_iter()
            .filter(|(_, found)| found.is_none())
            .map(|(key, _)| key.display_name().to_string())
            .collect();

            Err(AppError::MissingColumns {
                missing,
                available: columns.to_vec(),
            })
        }
    }
}

//! Day-of-month × category aggregation.

use crate::models::{ClassifiedRecord, DaySummary, PivotTable};
use chrono::Datelike;
use std::collections::{BTreeMap, BTreeSet};

/// Count records per (day of month, category).
///
/// Only the day number is used: the 5th of March and the 5th of April share a
/// row. Records without a timestamp are left out and counted in `skipped`.
/// Every row carries all three categories, absent ones as 0.
pub fn aggregate_by_day(records: &[ClassifiedRecord]) -> PivotTable {
    let mut by_day: BTreeMap<u32, DaySummary> = BTreeMap::new();
    let mut skipped = 0;

    for rec in records {
        match rec.day() {
            Some(day) => {
                by_day
                    .entry(day)
                    .or_insert_with(|| DaySummary::new(day))
                    .counts[rec.category.index()] += 1;
            }
            None => skipped += 1,
        }
    }

    PivotTable {
        days: by_day.into_values().collect(),
        skipped,
    }
}

/// Distinct (year, month) pairs among the parsed timestamps.
pub fn months_spanned(records: &[ClassifiedRecord]) -> Vec<(i32, u32)> {
    records
        .iter()
        .filter_map(|r| r.timestamp.value())
        .map(|dt| (dt.year(), dt.month()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

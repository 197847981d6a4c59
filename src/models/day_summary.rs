use crate::models::Category;
use serde::Serialize;

/// Per-category counts for one day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: u32,
    /// Counts indexed by `Category::index()`.
    pub counts: [usize; 3],
}

impl DaySummary {
    pub fn new(day: u32) -> Self {
        Self { day, counts: [0; 3] }
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Serialized form of a pivot row, keys in report column order.
#[derive(Debug, Serialize)]
pub struct PivotRow {
    #[serde(rename = "DAY")]
    pub day: u32,
    #[serde(rename = "ATÉ 45 MIN")]
    pub up_to_45_min: usize,
    #[serde(rename = "46 MIN até 1H")]
    pub up_to_1_hour: usize,
    #[serde(rename = "> 1h")]
    pub over_one_hour: usize,
}

impl From<&DaySummary> for PivotRow {
    fn from(d: &DaySummary) -> Self {
        Self {
            day: d.day,
            up_to_45_min: d.count(Category::UpTo45Min),
            up_to_1_hour: d.count(Category::UpTo1Hour),
            over_one_hour: d.count(Category::OverOneHour),
        }
    }
}

/// Day × category table, rows sorted by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PivotTable {
    pub days: Vec<DaySummary>,
    /// Records left out because their entry timestamp is missing.
    pub skipped: usize,
}

impl PivotTable {
    pub fn day(&self, day: u32) -> Option<&DaySummary> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Column totals over all days, in canonical category order.
    pub fn totals(&self) -> [usize; 3] {
        let mut out = [0; 3];
        for d in &self.days {
            for (acc, c) in out.iter_mut().zip(d.counts) {
                *acc += c;
            }
        }
        out
    }

    pub fn rows(&self) -> Vec<PivotRow> {
        self.days.iter().map(PivotRow::from).collect()
    }
}

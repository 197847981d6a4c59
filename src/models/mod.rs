pub mod category;
pub mod day_summary;
pub mod parsed;
pub mod record;

pub use category::Category;
pub use day_summary::{DaySummary, PivotRow, PivotTable};
pub use parsed::{ParsedDuration, ParsedTimestamp};
pub use record::{ClassifiedRecord, RawRecord, RawTable};

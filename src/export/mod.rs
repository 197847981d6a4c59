// src/export/mod.rs

pub mod convert;
pub mod fs_utils;
pub mod report;
pub mod xlsx;

pub use convert::convert_workbook;
pub use fs_utils::ensure_writable;
pub use report::{Report, ReportCell, ReportSheet, assemble_report};
pub use xlsx::write_report;

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for written files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} completed: {}", path.display()));
}

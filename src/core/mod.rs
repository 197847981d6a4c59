pub mod aggregate;
pub mod classify;
pub mod columns;
pub mod fields;
pub mod pipeline;

pub use classify::{Thresholds, classify};
pub use pipeline::{Analysis, PipelineConfig, RunSummary, analyze, run_pipeline};

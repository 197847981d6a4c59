//! Validation of an on-disk configuration file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const TOP_LEVEL_KEYS: [&str; 5] = [
    "input_path",
    "output_path",
    "sheet_name",
    "header_row",
    "thresholds",
];
const THRESHOLD_KEYS: [&str; 2] = ["up_to_minutes", "up_to_hour_minutes"];

/// Findings of a configuration check; keys use `a.b` notation for nesting.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty() && self.problems.is_empty()
    }
}

/// Compare the YAML in `path` with the known keys and validate its values.
///
/// Missing keys are not errors: defaults fill them in at load time.
pub fn check_config_file(path: &Path) -> AppResult<CheckReport> {
    let content = fs::read_to_string(path)?;
    check_config_str(&content)
}

pub fn check_config_str(content: &str) -> AppResult<CheckReport> {
    let value: Value = serde_yaml::from_str(content)?;
    let mut report = CheckReport::default();

    let empty = Mapping::new();
    let root = match &value {
        Value::Mapping(m) => m,
        Value::Null => &empty,
        _ => {
            return Err(AppError::Config(
                "configuration root must be a mapping".to_string(),
            ));
        }
    };

    compare_keys(root, &TOP_LEVEL_KEYS, "", &mut report);

    match root.get("thresholds") {
        Some(Value::Mapping(t)) => compare_keys(t, &THRESHOLD_KEYS, "thresholds.", &mut report),
        Some(_) => report
            .problems
            .push("thresholds must be a mapping".to_string()),
        None => {}
    }

    if report.problems.is_empty() {
        match serde_yaml::from_value::<Config>(value) {
            Ok(cfg) => {
                if let Err(e) = cfg.thresholds.validate() {
                    report.problems.push(e.to_string());
                }
            }
            Err(e) => report.problems.push(e.to_string()),
        }
    }

    Ok(report)
}

fn compare_keys(map: &Mapping, known: &[&str], prefix: &str, report: &mut CheckReport) {
    for key in known {
        if !map.contains_key(*key) {
            report.missing.push(format!("{prefix}{key}"));
        }
    }
    for key in map.keys() {
        let name = key.as_str().map(str::to_string).unwrap_or_else(|| format!("{key:?}"));
        if !known.contains(&name.as_str()) {
            report.unknown.push(format!("{prefix}{name}"));
        }
    }
}

use crate::core::{PipelineConfig, Thresholds};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::expand_tilde;
use crate::utils::path::with_xlsx_extension;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// 0-based row of the column headers in the input sheet.
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_input_path() -> String {
    "TC.xlsx".to_string()
}
fn default_output_path() -> String {
    "TC_output.xlsx".to_string()
}
fn default_sheet_name() -> String {
    "Recuperada_Planilha1".to_string()
}
fn default_header_row() -> usize {
    14
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            sheet_name: default_sheet_name(),
            header_row: default_header_row(),
            thresholds: Thresholds::default(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<String>,
    pub output: Option<String>,
    pub sheet: Option<String>,
    pub header_row: Option<usize>,
    pub first_threshold: Option<u32>,
    pub second_threshold: Option<u32>,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        }
        .unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("tcreport")
        } else {
            base.join(".tcreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tcreport.conf")
    }

    /// Load configuration from `path` (or the standard file), defaults if absent.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse '{}': {e}", path.display()))
        })?;
        cfg.thresholds.validate()?;
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the configuration file with defaults unless it already exists.
    pub fn init_file(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if path.exists() {
            success(format!("Config file already present: {}", path.display()));
        } else {
            Self::default().save(&path)?;
            success(format!("Config file: {}", path.display()));
        }
        Ok(path)
    }

    /// Merge command-line overrides into an explicit pipeline configuration.
    pub fn pipeline_config(&self, ov: &Overrides) -> AppResult<PipelineConfig> {
        let input = ov.input.as_deref().unwrap_or(&self.input_path);
        let output = ov.output.as_deref().unwrap_or(&self.output_path);

        let thresholds = Thresholds::new(
            ov.first_threshold.unwrap_or(self.thresholds.up_to_minutes),
            ov.second_threshold
                .unwrap_or(self.thresholds.up_to_hour_minutes),
        )?;

        Ok(PipelineConfig {
            input_path: expand_tilde(input),
            output_path: with_xlsx_extension(expand_tilde(output)),
            sheet_name: ov.sheet.clone().unwrap_or_else(|| self.sheet_name.clone()),
            header_row: ov.header_row.unwrap_or(self.header_row),
            thresholds,
        })
    }
}

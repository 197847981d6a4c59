use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_config_file;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, item, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_file(path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(path, editor.clone());
        }
    }

    Ok(())
}

fn check_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {}; defaults are in use (run `tcreport init`)",
            path.display()
        ));
        return Ok(());
    }

    let report = check_config_file(path)?;
    if report.is_clean() {
        success(format!("Configuration file is complete: {}", path.display()));
        return Ok(());
    }

    if !report.missing.is_empty() {
        warning("Missing fields (defaults will be used):");
        report.missing.iter().for_each(item);
    }
    if !report.unknown.is_empty() {
        warning("Unknown fields (ignored):");
        report.unknown.iter().for_each(item);
    }
    if !report.problems.is_empty() {
        error("Invalid values:");
        report.problems.iter().for_each(item);
    }
    Ok(())
}

fn edit_file(path: &Path, requested_editor: Option<String>) {
    // Default editor based on platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{default_editor}'"
                    ));
                }
            }
        }
    }
}

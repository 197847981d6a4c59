// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that `output` may receive a generated workbook read from `input`.
///
/// - `output` resolving to the same file as `input` → always refused
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user
pub fn ensure_writable(input: &Path, output: &Path, force: bool) -> AppResult<()> {
    if same_file(input, output) {
        return Err(AppError::OutputIsInput(output.display().to_string()));
    }

    if !output.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", output.display()));
    if confirm("Overwrite? [y/N]: ")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::ExportCancelled(output.display().to_string()))
    }
}

/// Both paths canonicalize when the files exist; otherwise compare them as given.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

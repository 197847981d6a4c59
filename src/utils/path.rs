//! Path utilities: expand ~ in configured paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Give `path` the `.xlsx` extension when it has none.
pub fn with_xlsx_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("xlsx")
    } else {
        path
    }
}

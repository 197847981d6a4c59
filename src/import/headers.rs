//! Header normalization applied at load time.

use std::collections::HashSet;

/// Replace embedded newlines with a space, then trim.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\n', " ").trim().to_string()
}

/// Turn a header row into column names the way pandas does, then normalize.
///
/// Empty cells become `Unnamed: <index>` and a repeated raw name gets `.1`,
/// `.2`, … before normalization. Names that differ only in surrounding
/// whitespace therefore collapse to the same column name, and a
/// whitespace-only cell ends up as an empty name.
pub fn build_columns(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());

    for (idx, cell) in raw.iter().enumerate() {
        let mut name = if cell.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            cell.clone()
        };

        if seen.contains(&name) {
            let base = name.clone();
            let mut n = 1;
            while seen.contains(&name) {
                name = format!("{base}.{n}");
                n += 1;
            }
        }

        seen.insert(name.clone());
        out.push(normalize_header(&name));
    }

    out
}

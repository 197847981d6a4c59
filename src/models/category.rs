use std::fmt;

/// Dwell-time bucket of a record.
///
/// Variants are declared in canonical report order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    UpTo45Min,
    UpTo1Hour,
    OverOneHour,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::UpTo45Min,
        Category::UpTo1Hour,
        Category::OverOneHour,
    ];

    /// Label used as pivot column header and in detail sheet names.
    pub fn label(&self) -> &'static str {
        match self {
            Category::UpTo45Min => "ATÉ 45 MIN",
            Category::UpTo1Hour => "46 MIN até 1H",
            Category::OverOneHour => "> 1h",
        }
    }

    /// Position in `Category::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Category::UpTo45Min => 0,
            Category::UpTo1Hour => 1,
            Category::OverOneHour => 2,
        }
    }

    /// Name of the per-category detail sheet (`Detalhe_ATÉ_45_MIN`, ...).
    pub fn detail_sheet_name(&self) -> String {
        format!("Detalhe_{}", self.label().replace(' ', "_"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

use std::path::PathBuf;

/// A single path that could not be processed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedEntry {
    pub path: PathBuf,
    pub error: String,
}

/// Per-pass counters for one case form of the token.
#[derive(Debug, Clone)]
pub struct VariantSummary {
    pub search: String,
    pub replace: String,
    pub files_seen: usize,
    pub files_rewritten: usize,
    pub files_renamed: usize,
    pub dirs_renamed: usize,
    pub failures: Vec<FailedEntry>,
}

impl VariantSummary {
    pub fn changes(&self) -> usize {
        self.files_rewritten + self.files_renamed + self.dirs_renamed
    }
}

/// Aggregate outcome of a full rename across all variant passes.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub variants: Vec<VariantSummary>,
}

impl RunSummary {
    pub fn total_changes(&self) -> usize {
        self.variants.iter().map(VariantSummary::changes).sum()
    }

    pub fn total_failures(&self) -> usize {
        self.variants.iter().map(|v| v.failures.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_failures() == 0
    }
}

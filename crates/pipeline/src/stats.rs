use serde::{Deserialize, Serialize};

/// Statistics about a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestStats {
    /// Number of files processed
    pub files: usize,

    /// Number of function candidates accepted
    pub functions: usize,

    /// Files skipped (already harvested on a previous run)
    pub skipped_files: usize,

    /// Total lines scanned
    pub total_lines: usize,

    /// Errors encountered
    pub errors: Vec<String>,
}

impl HarvestStats {
    pub fn new() -> Self {
        Self {
            files: 0,
            functions: 0,
            skipped_files: 0,
            total_lines: 0,
            errors: Vec::new(),
        }
    }

    pub fn add_file(&mut self, lines: usize) {
        self.files += 1;
        self.total_lines += lines;
    }

    pub fn add_functions(&mut self, count: usize) {
        self.functions += count;
    }

    pub fn add_skipped(&mut self) {
        self.skipped_files += 1;
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Fold another run's counters into this one
    pub fn merge(&mut self, other: HarvestStats) {
        self.files += other.files;
        self.functions += other.functions;
        self.skipped_files += other.skipped_files;
        self.total_lines += other.total_lines;
        self.errors.extend(other.errors);
    }
}

impl Default for HarvestStats {
    fn default() -> Self {
        Self::new()
    }
}

use serde::Serialize;

use crate::domain::{CategoryCount, StatusCount};

/// Outcome of one sort run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Summary {
    pub listings: usize,
    pub statuses: Vec<StatusCount>,
    /// Data rows read from, and written back to, the mapping table.
    pub rows: usize,
    /// Files moved (or, on a dry run, that would have moved).
    pub moved: usize,
    /// Rows whose image was not present in the source directory.
    pub missing: usize,
    pub source_removed: bool,
    pub dry_run: bool,
    pub categories: Vec<CategoryCount>,
}

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SortError};

pub const SOURCE_DIR: &str = "gorseller";
pub const LISTINGS_FILE: &str = "ilanlar_tumu.csv";
pub const MAPPING_FILE: &str = "gorsel_eslestirme.csv";
pub const STATUS_COLUMN: &str = "Durum";
pub const FALLBACK_CATEGORY: &str = "Kapali";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SortOptions {
    /// Directory (relative to base) holding the images still to be sorted.
    pub source_dir: String,
    pub listings_file: String,
    pub mapping_file: String,
    /// Listings column carrying the status label.
    pub status_column: String,
    /// One destination directory per entry, created under base.
    pub categories: Vec<String>,
    /// Category for listing ids with no status; also the directory for unknown statuses.
    pub fallback: String,
    /// Extensions counted by the post-run census, without the dot.
    pub counted_extensions: Vec<String>,
    /// Compute moves and counts without touching the filesystem.
    pub dry_run: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            source_dir: SOURCE_DIR.into(),
            listings_file: LISTINGS_FILE.into(),
            mapping_file: MAPPING_FILE.into(),
            status_column: STATUS_COLUMN.into(),
            categories: vec!["Satilik".into(), "Kiralik".into(), FALLBACK_CATEGORY.into()],
            fallback: FALLBACK_CATEGORY.into(),
            counted_extensions: vec!["jpg".into(), "png".into()],
            dry_run: false,
        }
    }
}

impl SortOptions {
    /// Read options from a TOML file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let opts: SortOptions = toml::from_str(&text)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(SortError::Config("categories must not be empty".into()));
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(SortError::Config("category names must not be empty".into()));
        }
        if !self.categories.contains(&self.fallback) {
            return Err(SortError::Config(format!(
                "fallback `{}` is not one of the categories",
                self.fallback
            )));
        }
        for (key, value) in [
            ("source_dir", &self.source_dir),
            ("listings_file", &self.listings_file),
            ("mapping_file", &self.mapping_file),
            ("status_column", &self.status_column),
        ] {
            if value.trim().is_empty() {
                return Err(SortError::Config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

use std::path::{Path, PathBuf};

use crate::options::SortOptions;

/// Resolved paths for one base directory.
#[derive(Clone, Debug)]
pub struct Layout {
    pub base: PathBuf,
    pub source_dir: PathBuf,
    pub listings_path: PathBuf,
    pub mapping_path: PathBuf,
    category_dirs: Vec<(String, PathBuf)>,
    fallback_dir: PathBuf,
}

impl Layout {
    pub fn new(base: &Path, opts: &SortOptions) -> Self {
        Self {
            base: base.to_path_buf(),
            source_dir: base.join(&opts.source_dir),
            listings_path: base.join(&opts.listings_file),
            mapping_path: base.join(&opts.mapping_file),
            category_dirs: opts
                .categories
                .iter()
                .map(|c| (c.clone(), base.join(c)))
                .collect(),
            fallback_dir: base.join(&opts.fallback),
        }
    }

    pub fn category_dirs(&self) -> &[(String, PathBuf)] {
        &self.category_dirs
    }

    /// Directory a file of `category` lands in; unknown labels share the fallback's.
    pub fn dir_for(&self, category: &str) -> &Path {
        self.category_dirs
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, dir)| dir.as_path())
            .unwrap_or(&self.fallback_dir)
    }
}

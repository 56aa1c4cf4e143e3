use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::CategoryCount;
use crate::error::Result;
use crate::layout::Layout;
use crate::options::SortOptions;

/// Count images per category directory under `base`.
pub fn census(base: &Path, opts: &SortOptions) -> Result<Vec<CategoryCount>> {
    opts.validate()?;
    count_categories(&Layout::new(base, opts), &opts.counted_extensions)
}

pub(crate) fn count_categories(layout: &Layout, exts: &[String]) -> Result<Vec<CategoryCount>> {
    layout
        .category_dirs()
        .iter()
        .map(|(name, dir)| {
            Ok(CategoryCount {
                category: name.clone(),
                images: count_images(dir, exts)?,
            })
        })
        .collect()
}

/// Regular files directly inside `dir` whose extension is in `exts` (ASCII case-insensitive).
/// A missing directory holds nothing.
pub fn count_images(dir: &Path, exts: &[String]) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut n = 0;
    for e in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let e = e.map_err(io::Error::from)?;
        if !e.file_type().is_file() {
            continue;
        }
        let matched = e
            .path()
            .extension()
            .and_then(|x| x.to_str())
            .is_some_and(|x| exts.iter().any(|want| want.eq_ignore_ascii_case(x)));
        if matched {
            n += 1;
        }
    }
    Ok(n)
}

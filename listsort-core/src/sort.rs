use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::census::count_categories;
use crate::domain::CategorizedRow;
use crate::error::Result;
use crate::fsops::{contained_path, ensure_dir, move_file, try_remove_dir};
use crate::layout::Layout;
use crate::options::SortOptions;
use crate::stats::Summary;
use crate::table::listings::ListingIndex;
use crate::table::mapping::{MappingReader, write_mapping};

/// Sort the images under `base` into category directories and rewrite the mapping table.
///
/// Listing `n` in the mapping table is the n-th data row of the listings table.
/// Rows whose listing has no status get `opts.fallback`. The mapping table is
/// only rewritten once every row has been processed, so a fatal error part way
/// leaves it untouched while earlier moves stay done.
pub fn sort(base: &Path, opts: &SortOptions) -> Result<Summary> {
    opts.validate()?;
    let layout = Layout::new(base, opts);

    if !opts.dry_run {
        for (_, dir) in layout.category_dirs() {
            ensure_dir(dir)?;
        }
    }

    let listings = ListingIndex::read(&layout.listings_path, &opts.status_column)?;
    info!(listings = listings.len(), "listings loaded");

    let mut summary = Summary {
        listings: listings.len(),
        statuses: listings.status_counts().to_vec(),
        dry_run: opts.dry_run,
        ..Default::default()
    };

    // a dry run leaves sources in place; repeats must not count twice
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut rewritten = Vec::new();
    for row in MappingReader::open(&layout.mapping_path)? {
        let row = row?;
        let category = listings.category(row.listing_id, &opts.fallback);

        if let Some(rel) = contained_path(&row.file) {
            let src = layout.source_dir.join(&rel);
            let dst = layout.dir_for(category).join(&rel);
            let fresh = !opts.dry_run || claimed.insert(rel);
            if fresh && src.is_file() {
                if !opts.dry_run {
                    if let Some(parent) = dst.parent() {
                        ensure_dir(parent)?;
                    }
                    move_file(&src, &dst)?;
                }
                debug!(file = %row.file, category, "moved");
                summary.moved += 1;
            } else {
                debug!(file = %row.file, "source image absent");
                summary.missing += 1;
            }
        } else {
            warn!(line = row.line, file = %row.file, "image name escapes its directory, not moved");
            summary.missing += 1;
        }

        rewritten.push(CategorizedRow::from_row(row, category));
    }
    summary.rows = rewritten.len();
    info!(rows = summary.rows, moved = summary.moved, missing = summary.missing, "mapping processed");

    if !opts.dry_run {
        write_mapping(&layout.mapping_path, &rewritten)?;
        summary.source_removed = try_remove_dir(&layout.source_dir);
    }

    summary.categories = count_categories(&layout, &opts.counted_extensions)?;
    Ok(summary)
}

use std::path::PathBuf;

use listsort_core::Summary;
use listsort_core::domain::CategoryCount;
use listsort_core::error::Result;
use listsort_core::{SortOptions, census, sort};

fn options_from_args(config: Option<PathBuf>) -> Result<SortOptions> {
    match config {
        Some(path) => SortOptions::load(&path),
        None => Ok(SortOptions::default()),
    }
}

pub fn handle_sort(
    base: PathBuf,
    config: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let mut opts = options_from_args(config)?;
    opts.dry_run |= dry_run;
    let summary = sort(&base, &opts)?;

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{text}");
    } else {
        print_summary(&summary);
    }
    Ok(())
}

pub fn handle_count(base: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let opts = options_from_args(config)?;
    print_counts(&census(&base, &opts)?);
    Ok(())
}

fn print_summary(s: &Summary) {
    println!("Total listings: {}", s.listings);
    let statuses: Vec<String> = s
        .statuses
        .iter()
        .map(|c| format!("{}={}", c.status, c.listings))
        .collect();
    println!("Statuses: {}", statuses.join(", "));
    println!();
    if s.dry_run {
        println!("dry run: {} of {} images would move", s.moved, s.rows);
    } else {
        println!("{} of {} images moved", s.moved, s.rows);
    }
    if s.source_removed {
        println!("Removed empty source folder");
    }
    println!();
    println!("--- SUMMARY ---");
    print_counts(&s.categories);
}

fn print_counts(counts: &[CategoryCount]) {
    for c in counts {
        println!("{}: {} images", c.category, c.images);
    }
}

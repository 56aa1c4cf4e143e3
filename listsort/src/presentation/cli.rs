use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Sort listing images into category folders", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Move images into category folders and rewrite the mapping table
    Sort {
        /// directory holding gorseller/, ilanlar_tumu.csv and gorsel_eslestirme.csv
        base: PathBuf,

        /// TOML file overriding directory, file and category names
        #[arg(long)]
        config: Option<PathBuf>,

        /// report what would move without touching any file
        #[arg(long)]
        dry_run: bool,

        /// print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count images in each category folder
    Count {
        base: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

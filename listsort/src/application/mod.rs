pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use listsort_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    match cli.command {
        Commands::Sort {
            base,
            config,
            dry_run,
            json,
        } => handlers::handle_sort(base, config, dry_run, json),
        Commands::Count { base, config } => handlers::handle_count(base, config),
    }
}

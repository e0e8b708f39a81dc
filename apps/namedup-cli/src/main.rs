//! namedup - find probable duplicate person names
//!
//! Reads names one per line and prints each duplicate next to the
//! first-seen name it matches.

mod cli;
mod report;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use clap::Parser;
use namedup_core::{DetectorConfig, DuplicateDetector, NicknameTable};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays a clean report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DetectorConfig::from_path(path)?,
        None => DetectorConfig::default(),
    };

    let mut nicknames =
        NicknameTable::load_standard(cli.project_root.as_deref(), !cli.no_builtin)?;
    if let Some(path) = &cli.nicknames {
        nicknames.merge_file(path)?;
    }
    let names = match cli.input.as_deref() {
        None => report::read_names(io::stdin().lock())?,
        Some(path) if path == Path::new("-") => report::read_names(io::stdin().lock())?,
        Some(path) => report::read_names(BufReader::new(File::open(path)?))?,
    };

    let detector = DuplicateDetector::with_config(nicknames, config)?;
    debug!(
        nicknames = detector.nicknames().len(),
        config = ?detector.config(),
        "detector ready"
    );
    let pairs = detector.check_duplicates(&names)?;

    report::write_report(io::stdout().lock(), &pairs, cli.format)?;
    Ok(())
}

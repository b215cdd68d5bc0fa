//! CLI entry point for the hole filling tool

use clap::Parser;
use holefill::io::cli::{Cli, FileProcessor};

fn main() -> holefill::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}

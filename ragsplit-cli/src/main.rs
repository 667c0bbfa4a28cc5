//! ragsplit command-line entry point

use anyhow::Result;
use clap::Parser;
use ragsplit_cli::commands::Commands;

/// Split documents into retrieval-sized chunks
#[derive(Debug, Parser)]
#[command(name = "ragsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

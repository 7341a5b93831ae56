//! Kugiri command-line entry point

use clap::Parser;
use kugiri_cli::commands::Commands;
use kugiri_cli::CliResult;

/// Dictionary-based word segmentation for Chinese, Japanese and Korean text
#[derive(Debug, Parser)]
#[command(name = "kugiri", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

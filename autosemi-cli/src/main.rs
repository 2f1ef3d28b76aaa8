//! Command-line entry point for autosemi

use autosemi_cli::commands::Commands;
use clap::Parser;

/// Automatic semicolon insertion for whitespace-insensitive source code
#[derive(Debug, Parser)]
#[command(name = "autosemi", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

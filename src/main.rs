mod aggregate;
mod charts;
mod cli;
mod error;
mod fmt;
mod loader;
mod models;
mod summary;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect => cli::inspect::run(),
        Commands::Plot => cli::plot::run(),
        Commands::Anomalies => cli::anomalies::run(),
        Commands::Demo => cli::demo::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

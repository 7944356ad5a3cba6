pub mod anomalies;
pub mod demo;
pub mod inspect;
pub mod plot;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gatewatch",
    about = "Payment-gateway CSV analytics: inspect exports, chart checkout and transaction activity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview checkout_2.csv and transactions.csv and summarize their columns.
    Inspect,
    /// Render the checkout comparison, per-status panels, and hourly stacked charts.
    Plot,
    /// Report transaction counts by status for the hours of interest and chart them.
    Anomalies,
    /// Write sample checkout_2.csv and transactions.csv to explore gatewatch.
    Demo,
}

use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::aggregate::{HourlyGrid, ANOMALY_HOURS};
use crate::charts;
use crate::error::Result;
use crate::fmt;
use crate::loader::{self, TRANSACTIONS_FILE};

pub fn run() -> Result<()> {
    let transactions = loader::load_transactions(Path::new(TRANSACTIONS_FILE))?;
    let grid = HourlyGrid::filtered(&transactions, &ANOMALY_HOURS);

    charts::render_anomaly_grouped(&grid, Path::new(charts::ANOMALY_CHART))?;
    println!("Wrote {}", charts::ANOMALY_CHART.green());
    println!();

    println!(
        "{}",
        "Transaction Count by Time and Status".bold()
    );
    if grid.is_empty() {
        println!("No transactions in the hours of interest.");
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["Hour".to_string()];
    header.extend(grid.statuses().iter().cloned());
    table.set_header(header);
    for &hour in grid.hours() {
        let mut row = vec![Cell::new(fmt::hour_label(hour))];
        for status in grid.statuses() {
            row.push(Cell::new(grid.get(hour, status)));
        }
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "{} transactions across {} hours of interest",
        fmt::count(grid.total()),
        grid.hours().len()
    );

    Ok(())
}

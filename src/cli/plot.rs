use std::path::Path;

use colored::Colorize;

use crate::aggregate::{series_for, HourlyGrid};
use crate::charts;
use crate::error::Result;
use crate::loader::{self, CHECKOUT_FILE, TRANSACTIONS_FILE};
use crate::models::ALL_STATUSES;

pub fn run() -> Result<()> {
    let checkouts = loader::load_checkouts(Path::new(CHECKOUT_FILE))?;
    charts::render_checkout_comparison(&checkouts, Path::new(charts::CHECKOUT_CHART))?;
    println!("Wrote {}", charts::CHECKOUT_CHART.green());

    let transactions = loader::load_transactions(Path::new(TRANSACTIONS_FILE))?;

    let panels: Vec<_> = ALL_STATUSES
        .iter()
        .map(|status| (*status, series_for(&transactions, *status)))
        .collect();
    charts::render_status_panels(&panels, Path::new(charts::STATUS_PANELS_CHART))?;
    println!("Wrote {}", charts::STATUS_PANELS_CHART.green());

    // The stacked aggregate groups by whatever status values are present,
    // not the fixed five the panels use.
    let grid = HourlyGrid::from_transactions(&transactions);
    charts::render_hourly_stacked(&grid, Path::new(charts::HOURLY_CHART))?;
    println!("Wrote {}", charts::HOURLY_CHART.green());

    Ok(())
}

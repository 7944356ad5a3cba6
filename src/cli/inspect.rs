use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt;
use crate::loader::{CHECKOUT_FILE, TRANSACTIONS_FILE};
use crate::summary::{summarize, FileSummary};

const PREVIEW_ROWS: usize = 5;

pub fn run() -> Result<()> {
    print_file(Path::new(CHECKOUT_FILE), "Checkout Data")?;
    println!();
    print_file(Path::new(TRANSACTIONS_FILE), "Transactions Data")?;
    Ok(())
}

fn print_file(path: &Path, title: &str) -> Result<()> {
    let summary = summarize(path, PREVIEW_ROWS)?;
    println!("{}", format!("{title} Head:").bold());
    print_preview(&summary);
    println!();
    println!("{}", format!("{title} Info:").bold());
    print_info(&summary);
    Ok(())
}

fn print_preview(summary: &FileSummary) {
    let mut table = Table::new();
    table.set_header(summary.headers.clone());
    for row in &summary.preview {
        table.add_row(row.clone());
    }
    println!("{table}");
}

fn print_info(summary: &FileSummary) {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Type", "Non-empty"]);
    for col in &summary.columns {
        table.add_row(vec![
            Cell::new(&col.name),
            Cell::new(col.dtype.name()),
            Cell::new(fmt::count(col.non_empty as u64)),
        ]);
    }
    println!("{table}");
    println!(
        "{} data rows, {} columns",
        fmt::count(summary.row_count as u64),
        summary.columns.len()
    );
}

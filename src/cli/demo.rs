use std::path::Path;

use colored::Colorize;

use crate::error::{GatewatchError, Result};
use crate::loader::{CHECKOUT_FILE, TRANSACTIONS_FILE};

const DEMO_DATE: &str = "2025-03-14";

/// Checkout rows: time label, today, yesterday, same_day_last_week,
/// avg_last_week, avg_last_month.
const CHECKOUT_ROWS: &[(&str, f64, f64, f64, f64, f64)] = &[
    ("08:00", 118.0, 96.0, 108.0, 104.5, 100.2),
    ("09:00", 142.0, 121.0, 133.0, 127.0, 122.4),
    ("10:00", 165.0, 148.0, 157.0, 151.5, 146.9),
    ("11:00", 181.0, 167.0, 172.0, 168.0, 161.3),
    ("12:00", 204.0, 189.0, 196.0, 190.5, 184.0),
    ("13:00", 198.0, 185.0, 190.0, 186.0, 180.7),
    ("14:00", 176.0, 170.0, 168.0, 169.5, 165.2),
    ("15:00", 158.0, 152.0, 149.0, 151.0, 147.8),
    ("16:00", 147.0, 139.0, 141.0, 140.0, 136.5),
    ("17:00", 139.0, 131.0, 134.0, 132.5, 129.1),
    ("18:00", 128.0, 122.0, 124.0, 123.0, 119.6),
    ("19:00", 112.0, 108.0, 107.0, 107.5, 104.3),
    ("20:00", 64.0, 93.0, 92.0, 92.5, 90.0),
];

/// Baseline approved counts per hour of day.
const APPROVED_BY_HOUR: [u64; 24] = [
    12, 8, 5, 4, 3, 4, 9, 18, 34, 42, 47, 52, 58, 54, 49, 44, 40, 38, 35, 30, 26, 22, 18, 14,
];

/// Hours where denials and failures spike in the sample data.
const SPIKE_HOURS: [u32; 4] = [8, 9, 15, 20];

fn checkout_csv() -> String {
    let mut out =
        String::from("time,today,yesterday,same_day_last_week,avg_last_week,avg_last_month\n");
    for (time, today, yesterday, last_week, avg_week, avg_month) in CHECKOUT_ROWS {
        out.push_str(&format!(
            "{time},{today},{yesterday},{last_week},{avg_week},{avg_month}\n"
        ));
    }
    out
}

fn push_row(out: &mut String, hour: u32, minute: u32, status: &str, count: u64) {
    out.push_str(&format!(
        "{DEMO_DATE} {hour:02}:{minute:02}:00,{status},{count}\n"
    ));
}

fn transactions_csv() -> String {
    let mut out = String::from("timestamp,status,count\n");
    for hour in 0..24u32 {
        let approved = APPROVED_BY_HOUR[hour as usize];
        let spike = SPIKE_HOURS.contains(&hour);

        let quarter = approved / 4;
        push_row(&mut out, hour, 0, "approved", approved - 3 * quarter);
        push_row(&mut out, hour, 15, "approved", quarter);
        push_row(&mut out, hour, 30, "approved", quarter);
        push_row(&mut out, hour, 45, "approved", quarter);

        let denied = approved / 8 + if spike { approved / 2 } else { 0 };
        if denied > 0 {
            push_row(&mut out, hour, 10, "denied", denied);
        }
        let refunded = approved / 12;
        if refunded > 0 {
            push_row(&mut out, hour, 20, "refunded", refunded);
        }
        let failed = approved / 15 + if spike { approved / 3 } else { 0 };
        if failed > 0 {
            push_row(&mut out, hour, 50, "failed", failed);
        }
        let reversed = approved / 20;
        if reversed > 0 {
            push_row(&mut out, hour, 5, "reversed", reversed);
        }
    }
    // A status outside the known five: it gets no panel of its own but still
    // shows up as a column in the hourly aggregates.
    push_row(&mut out, 9, 25, "chargeback", 2);
    push_row(&mut out, 15, 25, "chargeback", 3);
    out
}

pub fn run() -> Result<()> {
    for name in [CHECKOUT_FILE, TRANSACTIONS_FILE] {
        if Path::new(name).exists() {
            return Err(GatewatchError::Other(format!(
                "{name} already exists — remove it before loading demo data"
            )));
        }
    }
    std::fs::write(CHECKOUT_FILE, checkout_csv())?;
    std::fs::write(TRANSACTIONS_FILE, transactions_csv())?;
    println!(
        "Wrote {} and {}",
        CHECKOUT_FILE.green(),
        TRANSACTIONS_FILE.green()
    );
    println!("Try `gatewatch inspect`, `gatewatch plot`, or `gatewatch anomalies`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{HourlyGrid, ANOMALY_HOURS};
    use crate::loader::{load_checkouts, load_transactions};

    #[test]
    fn test_checkout_csv_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkout_2.csv");
        std::fs::write(&path, checkout_csv()).unwrap();
        let rows = load_checkouts(&path).unwrap();
        assert_eq!(rows.len(), CHECKOUT_ROWS.len());
        assert_eq!(rows[0].time, "08:00");
    }

    #[test]
    fn test_transactions_csv_loads_and_covers_every_hour() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(&path, transactions_csv()).unwrap();
        let rows = load_transactions(&path).unwrap();
        let grid = HourlyGrid::from_transactions(&rows);
        assert_eq!(grid.hours().len(), 24);
        assert!(grid.statuses().contains(&"approved".to_string()));
        assert!(grid.statuses().contains(&"chargeback".to_string()));
    }

    #[test]
    fn test_transactions_csv_spikes_in_anomaly_hours() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(&path, transactions_csv()).unwrap();
        let rows = load_transactions(&path).unwrap();
        let grid = HourlyGrid::filtered(&rows, &ANOMALY_HOURS);
        // Spike hours carry more denials than a neighboring quiet hour.
        assert!(grid.get(9, "denied") > grid.get(10, "denied"));
        assert!(grid.get(15, "failed") > grid.get(14, "failed"));
    }
}

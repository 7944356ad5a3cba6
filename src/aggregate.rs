use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;

use crate::models::{Status, Transaction};

/// Hours of interest for the anomaly report. All other hours are dropped
/// entirely, not shown as zero rows.
pub const ANOMALY_HOURS: [u32; 10] = [8, 9, 10, 11, 12, 13, 14, 15, 16, 20];

// ---------------------------------------------------------------------------
// Per-status partitioning
// ---------------------------------------------------------------------------

/// Timestamp-indexed series for one of the five known statuses, matched by
/// exact string comparison. Rows with any other status value are excluded
/// here but still take part in the hourly aggregate below.
pub fn series_for(rows: &[Transaction], status: Status) -> Vec<(NaiveDateTime, u64)> {
    rows.iter()
        .filter(|t| t.status == status.key())
        .map(|t| (t.timestamp, t.count))
        .collect()
}

// ---------------------------------------------------------------------------
// Hourly grid
// ---------------------------------------------------------------------------

/// Summed counts keyed by (hour, status). Rows are the hours observed, sorted
/// ascending; columns are the status strings observed, sorted ascending;
/// absent combinations read as zero.
pub struct HourlyGrid {
    hours: Vec<u32>,
    statuses: Vec<String>,
    cells: BTreeMap<u32, BTreeMap<String, u64>>,
}

impl HourlyGrid {
    /// Aggregate every row by (hour, status).
    pub fn from_transactions(rows: &[Transaction]) -> Self {
        Self::build(rows, None)
    }

    /// Aggregate only rows whose hour is in `hours`.
    pub fn filtered(rows: &[Transaction], hours: &[u32]) -> Self {
        Self::build(rows, Some(hours))
    }

    fn build(rows: &[Transaction], allow: Option<&[u32]>) -> Self {
        let mut cells: BTreeMap<u32, BTreeMap<String, u64>> = BTreeMap::new();
        let mut statuses = BTreeSet::new();
        for t in rows {
            let hour = t.hour();
            if let Some(allow) = allow {
                if !allow.contains(&hour) {
                    continue;
                }
            }
            *cells
                .entry(hour)
                .or_default()
                .entry(t.status.clone())
                .or_insert(0) += t.count;
            statuses.insert(t.status.clone());
        }
        let hours = cells.keys().copied().collect();
        Self {
            hours,
            statuses: statuses.into_iter().collect(),
            cells,
        }
    }

    /// Hours observed, sorted ascending.
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Status columns observed, sorted ascending.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Summed count for (hour, status); zero when no row matched.
    pub fn get(&self, hour: u32, status: &str) -> u64 {
        self.cells
            .get(&hour)
            .and_then(|row| row.get(status))
            .copied()
            .unwrap_or(0)
    }

    /// Sum across all statuses for one hour.
    pub fn row_total(&self, hour: u32) -> u64 {
        self.cells
            .get(&hour)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }

    /// Largest per-hour total. Sizes the y-axis of stacked charts.
    pub fn max_row_total(&self) -> u64 {
        self.hours
            .iter()
            .map(|&h| self.row_total(h))
            .max()
            .unwrap_or(0)
    }

    /// Largest single cell. Sizes the y-axis of grouped charts.
    pub fn max_cell(&self) -> u64 {
        self.cells
            .values()
            .flat_map(|row| row.values())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Sum over the whole grid.
    pub fn total(&self) -> u64 {
        self.hours.iter().map(|&h| self.row_total(h)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

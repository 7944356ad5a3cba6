use std::path::Path;

use chrono::NaiveDateTime;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::aggregate::HourlyGrid;
use crate::error::{GatewatchError, Result};
use crate::models::{CheckoutRecord, Status};

/// Fixed output filenames, overwritten on each run.
pub const CHECKOUT_CHART: &str = "checkout_comparison.png";
pub const STATUS_PANELS_CHART: &str = "transactions_by_status.png";
pub const HOURLY_CHART: &str = "hourly_transactions.png";
pub const ANOMALY_CHART: &str = "hourly_status_counts_anomalous.png";

fn chart_err<E: std::fmt::Display>(e: E) -> GatewatchError {
    GatewatchError::Chart(e.to_string())
}

/// Category colors cycled across status series in the bar charts.
const SERIES_PALETTE: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

fn series_color(idx: usize) -> RGBColor {
    SERIES_PALETTE[idx % SERIES_PALETTE.len()]
}

fn status_color(status: Status) -> RGBColor {
    match status {
        Status::Approved => RGBColor(31, 119, 180),
        Status::Refunded => RGBColor(255, 140, 0),
        Status::Denied => RGBColor(214, 39, 40),
        Status::Failed => RGBColor(128, 0, 128),
        Status::Reversed => RGBColor(139, 69, 19),
    }
}

// ---------------------------------------------------------------------------
// Checkout comparison line chart
// ---------------------------------------------------------------------------

/// One chart, five series over the time-of-day labels: today, yesterday and
/// same-day-last-week as solid lines with markers, the two averages as dashed
/// and dotted lines. Dotted is rendered as a fine dash.
pub fn render_checkout_comparison(rows: &[CheckoutRecord], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let n = rows.len().max(1) as i32;
    let y_max = rows
        .iter()
        .flat_map(|r| {
            [
                r.today,
                r.yesterday,
                r.same_day_last_week,
                r.avg_last_week,
                r.avg_last_month,
            ]
        })
        .fold(0.0f64, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Checkout Comparison: Today vs. Historical Data",
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n, 0f64..y_max * 1.05)
        .map_err(chart_err)?;

    let labels: Vec<String> = rows.iter().map(|r| r.time.clone()).collect();
    chart
        .configure_mesh()
        .x_desc("Time of Day")
        .y_desc("Checkout Count")
        .x_labels(rows.len().clamp(1, 30))
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(chart_err)?;

    let points = |f: fn(&CheckoutRecord) -> f64| -> Vec<(i32, f64)> {
        rows.iter()
            .enumerate()
            .map(|(i, r)| (i as i32, f(r)))
            .collect()
    };

    let today = points(|r| r.today);
    chart
        .draw_series(LineSeries::new(today.iter().cloned(), &BLUE))
        .map_err(chart_err)?
        .label("Today")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));
    chart
        .draw_series(today.iter().map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())))
        .map_err(chart_err)?;

    let yesterday = points(|r| r.yesterday);
    chart
        .draw_series(LineSeries::new(yesterday.iter().cloned(), &RED))
        .map_err(chart_err)?
        .label("Yesterday")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));
    chart
        .draw_series(yesterday.iter().map(|&(x, y)| Cross::new((x, y), 4, RED.filled())))
        .map_err(chart_err)?;

    let last_week = points(|r| r.same_day_last_week);
    chart
        .draw_series(LineSeries::new(last_week.iter().cloned(), &GREEN))
        .map_err(chart_err)?
        .label("Same Day Last Week")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], GREEN));
    chart
        .draw_series(
            last_week
                .iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), 4, GREEN.filled())),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            points(|r| r.avg_last_week),
            8,
            6,
            MAGENTA.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("Avg. Last Week")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], MAGENTA));

    chart
        .draw_series(DashedLineSeries::new(
            points(|r| r.avg_last_month),
            2,
            5,
            BLACK.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("Avg. Last Month")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLACK));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-status panel grid
// ---------------------------------------------------------------------------

/// A 3x2 grid of line-chart panels, one per known status in the given order.
/// Five panels are used, the sixth cell stays blank. Each panel plots its
/// timestamp-indexed series in file order.
pub fn render_status_panels(
    panels: &[(Status, Vec<(NaiveDateTime, u64)>)],
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1500, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let areas = root.split_evenly((3, 2));

    for (idx, (status, series)) in panels.iter().enumerate() {
        let area = match areas.get(idx) {
            Some(a) => a,
            None => break,
        };
        let n = series.len().max(1) as i32;
        let y_max = series.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("{} Transactions Over Time", status.label()),
                ("sans-serif", 22),
            )
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(50)
            .build_cartesian_2d(0..n, 0f64..y_max * 1.1)
            .map_err(chart_err)?;

        let stamps: Vec<String> = series
            .iter()
            .map(|(ts, _)| ts.format("%m-%d %H:%M").to_string())
            .collect();
        chart
            .configure_mesh()
            .x_desc("Timestamp")
            .y_desc("Count")
            .x_labels(8)
            .x_label_formatter(&|x| stamps.get(*x as usize).cloned().unwrap_or_default())
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()
            .map_err(chart_err)?;

        let color = status_color(*status);
        chart
            .draw_series(LineSeries::new(
                series
                    .iter()
                    .enumerate()
                    .map(|(i, &(_, c))| (i as i32, c as f64)),
                color.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label(status.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Hourly stacked bars
// ---------------------------------------------------------------------------

/// Stacked bar chart of summed counts per status across all 24 hours. Every
/// status string observed in the data gets a segment, not just the five the
/// panel grid knows about.
pub fn render_hourly_stacked(grid: &HourlyGrid, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1500, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_max = grid.max_row_total().max(1) as f64 * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .caption("Hourly Transaction Counts by Status", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.6f64..23.6f64, 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Hour of Day")
        .y_desc("Total Transaction Count")
        .x_labels(24)
        .x_label_formatter(&|x| {
            let h = x.round();
            if (x - h).abs() < 0.05 && (0.0..=23.0).contains(&h) {
                format!("{h:.0}")
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(chart_err)?;

    let mut bottoms = [0u64; 24];
    for (idx, status) in grid.statuses().iter().enumerate() {
        let color = series_color(idx);
        let mut bars = Vec::new();
        for hour in 0..24u32 {
            let value = grid.get(hour, status);
            if value == 0 {
                continue;
            }
            let y0 = bottoms[hour as usize] as f64;
            let y1 = y0 + value as f64;
            bottoms[hour as usize] += value;
            bars.push(Rectangle::new(
                [(hour as f64 - 0.4, y0), (hour as f64 + 0.4, y1)],
                color.filled(),
            ));
        }
        chart
            .draw_series(bars)
            .map_err(chart_err)?
            .label(status.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Anomaly grouped bars
// ---------------------------------------------------------------------------

/// Grouped (non-stacked) bar chart over the grid's hour rows: one bar per
/// status within each hour slot.
pub fn render_anomaly_grouped(grid: &HourlyGrid, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1500, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let n = grid.hours().len().max(1);
    let y_max = grid.max_cell().max(1) as f64 * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Transaction Count by Status at Selected Times",
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.6f64..(n as f64 - 0.4), 0f64..y_max)
        .map_err(chart_err)?;

    let hours: Vec<u32> = grid.hours().to_vec();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Time of day")
        .y_desc("Total Transaction Count")
        .x_labels(n)
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 0.05 && i >= 0.0 && (i as usize) < hours.len() {
                hours[i as usize].to_string()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(chart_err)?;

    let group_width = 0.8f64;
    let bar_width = group_width / grid.statuses().len().max(1) as f64;
    for (j, status) in grid.statuses().iter().enumerate() {
        let color = series_color(j);
        let mut bars = Vec::new();
        for (i, &hour) in grid.hours().iter().enumerate() {
            let value = grid.get(hour, status);
            if value == 0 {
                continue;
            }
            let x0 = i as f64 - group_width / 2.0 + j as f64 * bar_width;
            bars.push(Rectangle::new(
                [(x0, 0.0), (x0 + bar_width * 0.92, value as f64)],
                color.filled(),
            ));
        }
        chart
            .draw_series(bars)
            .map_err(chart_err)?
            .label(status.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    fn sample_checkouts() -> Vec<CheckoutRecord> {
        vec![
            CheckoutRecord {
                time: "08:00".to_string(),
                today: 120.0,
                yesterday: 98.0,
                same_day_last_week: 110.0,
                avg_last_week: 105.5,
                avg_last_month: 101.2,
            },
            CheckoutRecord {
                time: "08:30".to_string(),
                today: 135.0,
                yesterday: 110.0,
                same_day_last_week: 128.0,
                avg_last_week: 118.0,
                avg_last_month: 112.8,
            },
        ]
    }

    fn sample_grid() -> HourlyGrid {
        let rows = vec![
            Transaction {
                timestamp: chrono::NaiveDate::from_ymd_opt(2025, 3, 14)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
                status: "approved".to_string(),
                count: 40,
            },
            Transaction {
                timestamp: chrono::NaiveDate::from_ymd_opt(2025, 3, 14)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap(),
                status: "denied".to_string(),
                count: 6,
            },
        ];
        HourlyGrid::from_transactions(&rows)
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_PALETTE.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_checkout_comparison_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHECKOUT_CHART);
        render_checkout_comparison(&sample_checkouts(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_status_panels_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATUS_PANELS_CHART);
        let ts = chrono::NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let panels: Vec<_> = crate::models::ALL_STATUSES
            .iter()
            .map(|s| (*s, vec![(ts, 5u64)]))
            .collect();
        render_status_panels(&panels, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_bar_charts_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let grid = sample_grid();
        let stacked = dir.path().join(HOURLY_CHART);
        let grouped = dir.path().join(ANOMALY_CHART);
        render_hourly_stacked(&grid, &stacked).unwrap();
        render_anomaly_grouped(&grid, &grouped).unwrap();
        assert!(stacked.exists());
        assert!(grouped.exists());
    }
}

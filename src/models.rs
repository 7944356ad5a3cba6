use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

/// One row of the checkout export: a time-of-day label, today's count, and
/// four historical reference columns.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRecord {
    pub time: String,
    pub today: f64,
    pub yesterday: f64,
    pub same_day_last_week: f64,
    pub avg_last_week: f64,
    pub avg_last_month: f64,
}

/// A transactions row exactly as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub timestamp: String,
    pub status: String,
    pub count: u64,
}

/// A transactions row with its timestamp parsed. The status stays a free
/// string: rows whose status is outside the five known values keep their
/// original label and still take part in hourly aggregation.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub timestamp: NaiveDateTime,
    pub status: String,
    pub count: u64,
}

impl Transaction {
    /// Hour-of-day bucket, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// The five statuses the per-status breakout knows about. Any other status
/// value gets no panel of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Approved,
    Refunded,
    Denied,
    Failed,
    Reversed,
}

pub const ALL_STATUSES: &[Status] = &[
    Status::Approved,
    Status::Refunded,
    Status::Denied,
    Status::Failed,
    Status::Reversed,
];

impl Status {
    /// The literal value matched against the CSV `status` column.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Refunded => "refunded",
            Self::Denied => "denied",
            Self::Failed => "failed",
            Self::Reversed => "reversed",
        }
    }

    /// Capitalized form for chart titles and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Refunded => "Refunded",
            Self::Denied => "Denied",
            Self::Failed => "Failed",
            Self::Reversed => "Reversed",
        }
    }

    #[allow(dead_code)]
    pub fn from_key(key: &str) -> Option<Status> {
        ALL_STATUSES.iter().find(|s| s.key() == key).copied()
    }
}

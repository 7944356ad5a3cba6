use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::loader::parse_timestamp;

// ---------------------------------------------------------------------------
// Column type inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    DateTime,
    Text,
}

impl ColumnType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::DateTime => "datetime",
            Self::Text => "text",
        }
    }
}

/// Per-column accumulator. A column is int if every non-empty value parses as
/// an integer, float if every non-empty value parses as a number, datetime if
/// every non-empty value parses as a timestamp, text otherwise.
struct TypeProbe {
    non_empty: usize,
    all_int: bool,
    all_float: bool,
    all_datetime: bool,
}

impl TypeProbe {
    fn new() -> Self {
        Self {
            non_empty: 0,
            all_int: true,
            all_float: true,
            all_datetime: true,
        }
    }

    fn observe(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.non_empty += 1;
        if value.parse::<i64>().is_err() {
            self.all_int = false;
        }
        if value.parse::<f64>().is_err() {
            self.all_float = false;
        }
        if parse_timestamp(value).is_err() {
            self.all_datetime = false;
        }
    }

    fn resolve(&self) -> ColumnType {
        if self.non_empty == 0 {
            ColumnType::Text
        } else if self.all_int {
            ColumnType::Int
        } else if self.all_float {
            ColumnType::Float
        } else if self.all_datetime {
            ColumnType::DateTime
        } else {
            ColumnType::Text
        }
    }
}

// ---------------------------------------------------------------------------
// File summary
// ---------------------------------------------------------------------------

pub struct ColumnSummary {
    pub name: String,
    pub dtype: ColumnType,
    pub non_empty: usize,
}

pub struct FileSummary {
    pub headers: Vec<String>,
    pub preview: Vec<Vec<String>>,
    pub row_count: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Read a CSV file and produce a preview of its first rows plus a per-column
/// type and non-empty-count summary. The file is read in full; missing or
/// malformed input is fatal.
pub fn summarize(path: &Path, preview_rows: usize) -> Result<FileSummary> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut probes: Vec<TypeProbe> = headers.iter().map(|_| TypeProbe::new()).collect();

    let mut preview = Vec::new();
    let mut row_count = 0usize;
    for result in rdr.records() {
        let record = result?;
        if row_count < preview_rows {
            preview.push(record.iter().map(str::to_string).collect());
        }
        for (i, field) in record.iter().enumerate() {
            if let Some(probe) = probes.get_mut(i) {
                probe.observe(field);
            }
        }
        row_count += 1;
    }

    let columns = headers
        .iter()
        .zip(probes.iter())
        .map(|(name, probe)| ColumnSummary {
            name: name.clone(),
            dtype: probe.resolve(),
            non_empty: probe.non_empty,
        })
        .collect();

    Ok(FileSummary {
        headers,
        preview,
        row_count,
        columns,
    })
}

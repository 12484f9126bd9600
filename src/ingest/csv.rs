use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

/// A record that failed the typed schema of its table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("missing value for column `{0}`")]
    Missing(&'static str),
    #[error("unknown food group id `{0}`")]
    UnknownFoodGroup(String),
    #[error("unknown gender `{0}`")]
    UnknownGender(String),
}

/// One data line, keyed by the expected column names that the header row
/// could place. Values are trimmed; empty cells are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRecord {
    fields: HashMap<&'static str, String>,
}

impl CsvRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn require(&self, column: &'static str) -> Result<&str, RowError> {
        self.get(column).ok_or(RowError::Missing(column))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A reference table row with a fixed column schema.
pub trait CsvRow: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn from_record(record: &CsvRecord) -> Result<Self, RowError>;
}

/// Maps `text` onto `columns`. The header row decides where each column lives
/// (case-insensitive, any order); expected columns missing from the header are
/// absent from every record. Blank lines are skipped and input with fewer than
/// two lines yields nothing.
pub fn parse_csv(text: &str, columns: &[&'static str]) -> Vec<CsvRecord> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let header = split_line(lines[0]);
    let positions: Vec<(&'static str, usize)> = columns
        .iter()
        .filter_map(|&column| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .map(|idx| (column, idx))
        })
        .collect();

    let mut records = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cells = split_line(line);
        let mut record = CsvRecord::default();
        for &(column, idx) in &positions {
            if let Some(value) = cells.get(idx).map(|c| c.trim()) {
                if !value.is_empty() {
                    record.fields.insert(column, value.to_string());
                }
            }
        }
        records.push(record);
    }
    records
}

/// Splits one line on commas outside double quotes. Quote characters only
/// toggle the quoted state and are dropped from the output.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
}

/// Parses a whole table into typed rows, dropping rows that fail the schema.
pub fn parse_table<T: CsvRow>(text: &str) -> Vec<T> {
    let records = parse_csv(text, T::COLUMNS);
    let total = records.len();
    let mut rows = Vec::with_capacity(total);
    for (line, record) in records.iter().enumerate() {
        match T::from_record(record) {
            Ok(row) => rows.push(row),
            Err(e) => warn!(table = T::TABLE, line = line + 2, error = %e, "dropping record"),
        }
    }
    info!(table = T::TABLE, rows = rows.len(), rejected = total - rows.len(), "table parsed");
    rows
}

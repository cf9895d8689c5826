//! CSV import: text → loosely-typed rows.
//!
//! The format is deliberately minimal and matches what the exporter writes:
//!   id,date,description,amount
//!   t1,2024-01-15,"STARBUCKS, 5TH AVE",-4.50
//!
//! Quotes are stripped, never interpreted, so a quoted field containing a
//! comma is split into two values. Blank lines are dropped before numbering.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tally_core::{FieldValue, Record, coerce_number, trim_field};
use tracing::{debug, warn};

use crate::types::IMPORTED_ID_PREFIX;

/// Parse CSV text, stamping synthesized ids with the current wall clock.
pub fn parse_csv(text: &str) -> Vec<Record> {
    parse_csv_at(text, Utc::now())
}

/// Parse CSV text using `imported_at` for any synthesized ids.
///
/// Returns an empty list when there is no header or no data row.
pub fn parse_csv_at(text: &str, imported_at: DateTime<Utc>) -> Vec<Record> {
    let lines: Vec<&str> = text.split('\n').filter(|l| !trim_field(l).is_empty()).collect();
    if lines.len() < 2 {
        debug!(lines = lines.len(), "csv has no data rows");
        return Vec::new();
    }

    let headers = split_fields(lines[0]);
    let stamp = imported_at.timestamp_millis();
    let mut rows = Vec::with_capacity(lines.len() - 1);

    for (i, line) in lines.iter().enumerate().skip(1) {
        let values = split_fields(line);
        if values.len() != headers.len() {
            warn!(
                line = i,
                expected = headers.len(),
                found = values.len(),
                "csv row width differs from header"
            );
        }

        let mut row = Record::new();
        for (idx, header) in headers.iter().enumerate() {
            let raw = values.get(idx).cloned().unwrap_or_default();
            let value = if header == "amount" {
                match coerce_number(&raw) {
                    Some(n) => FieldValue::Number(n),
                    None => FieldValue::Text(raw),
                }
            } else {
                FieldValue::Text(raw)
            };
            row.insert(header.as_str(), value);
        }

        if !row.get("id").is_some_and(FieldValue::is_truthy) {
            row.insert("id", format!("{IMPORTED_ID_PREFIX}_{stamp}_{i}"));
        }

        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "parsed csv");
    rows
}

/// Read and parse a CSV file from disk.
pub fn read_csv_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_csv(&text))
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| trim_field(f).replace('"', "")).collect()
}

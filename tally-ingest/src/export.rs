//! CSV export: rows → text → download artifact.

use anyhow::Result;
use tally_core::{FieldValue, Record};
use tracing::debug;

use crate::sink::DownloadSink;
use crate::types::{CsvArtifact, DEFAULT_EXPORT_FILENAME};

/// Serialize rows to CSV text, or `None` when there is nothing to write.
///
/// The header is the first row's keys in order; later rows are written
/// against that header only. Text containing a comma is wrapped in quotes,
/// nothing else is escaped.
pub fn to_csv_string(rows: &[Record]) -> Option<String> {
    let first = rows.first()?;
    let headers: Vec<&str> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let fields: Vec<String> = headers.iter().map(|h| encode_field(row.get(h))).collect();
        lines.push(fields.join(","));
    }

    Some(lines.join("\n"))
}

fn encode_field(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(s)) if s.contains(',') => format!("\"{s}\""),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Serialize `rows` and hand the file to `sink` under `filename`.
///
/// Empty input is a no-op: the sink is never called.
pub fn export_to_csv<S>(rows: &[Record], filename: &str, sink: &mut S) -> Result<()>
where
    S: DownloadSink + ?Sized,
{
    let Some(content) = to_csv_string(rows) else {
        debug!("no rows to export");
        return Ok(());
    };

    debug!(rows = rows.len(), filename, "exporting csv");
    sink.deliver(CsvArtifact::new(filename, content))
}

/// [`export_to_csv`] with the default `transactions.csv` name.
pub fn export_to_csv_default<S>(rows: &[Record], sink: &mut S) -> Result<()>
where
    S: DownloadSink + ?Sized,
{
    export_to_csv(rows, DEFAULT_EXPORT_FILENAME, sink)
}

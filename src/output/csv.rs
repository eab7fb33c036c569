//! CSV rendering of records.
//!
//! The header is the sorted union of every record's keys, error records
//! included. Cells are looked up by column name; a missing key is an empty
//! cell.

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use crate::metadata::{Record, field_union};

/// Render records as CSV with `\r\n` line terminators.
///
/// # Errors
///
/// Fails only if the in-memory writer cannot be flushed or produces invalid
/// UTF-8, neither of which happens for string cells.
pub fn render_csv(records: &[Record]) -> Result<String> {
    let columns: Vec<String> = field_union(records).into_iter().collect();

    let mut writer =
        csv::WriterBuilder::new().terminator(csv::Terminator::CRLF).from_writer(Vec::new());

    writer.write_record(&columns).context("Failed to write CSV header")?;
    for record in records {
        let row = columns.iter().map(|column| cell(record.get(column)));
        writer.write_record(row).context("Failed to write CSV row")?;
    }

    let bytes = writer.into_inner().map_err(|err| anyhow::anyhow!("{}", err.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Text for one cell.
///
/// Strings are written raw, `null` and missing values are empty, and
/// everything else uses its compact JSON spelling.
fn cell(value: Option<&JsonValue>) -> String {
    match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

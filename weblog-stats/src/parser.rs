use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::{error::CsvError, models::LogRecord, report::Diagnostics};

/// Longest field, in characters, the reader will take.
pub const FIELD_LIMIT: usize = 131_072;

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Parses headerless CSV into records, dropping rows with fewer than three columns.
///
/// A reader error stops parsing; whatever was read before it is returned.
pub fn parse_records<D: Diagnostics>(content: &str, diag: &mut D) -> Vec<LogRecord> {
    if content.is_empty() {
        diag.notice("No CSV content to process.");
        return Vec::new();
    }

    let content = normalize_line_breaks(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = match row.map_err(CsvError::from).and_then(check_field_sizes) {
            Ok(row) => row,
            Err(e) => {
                diag.notice(format!("Error processing CSV data: {e}"));
                break;
            }
        };
        match LogRecord::from_row(&row) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }
    debug!(kept = records.len(), dropped, "parsed CSV rows");
    records
}

/// Every line terminator becomes `\n`, so quoted fields spanning lines keep plain `\n`.
fn normalize_line_breaks(content: &str) -> String {
    content.replace("\r\n", "\n").replace(LINE_BREAKS, "\n")
}

fn check_field_sizes(row: StringRecord) -> Result<StringRecord, CsvError> {
    if row.iter().any(|field| field.chars().count() > FIELD_LIMIT) {
        return Err(CsvError::FieldTooLarge { limit: FIELD_LIMIT });
    }
    Ok(row)
}

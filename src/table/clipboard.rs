//! Clipboard payloads and cell text sanitising
//!
//! Payloads use the tab-separated format spreadsheet applications put on
//! the clipboard: one row per line, cells separated by tabs, fields quoted
//! only when they contain a tab, quote or line break.

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::edf::codec::encode_cp1252_char;

const DELIMITER: u8 = b'\t';

/// Serialize rows of cells into a clipboard payload
pub fn to_payload(rows: &[Vec<String>]) -> String {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        if let Err(e) = writer.write_record(row) {
            tracing::warn!("Skipping clipboard row: {}", e);
        }
    }

    match writer.into_inner() {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!("Failed to finish clipboard payload: {}", e);
            String::new()
        }
    }
}

/// Parse a clipboard payload into rows of cells.
///
/// Rows may be ragged. A blank line is a row holding one empty cell, the
/// way spreadsheets copy an empty cell of a single column, so the rows
/// after it keep their offsets. A record the parser rejects becomes a row
/// with no cells rather than failing the whole paste.
pub fn parse_payload(text: &str) -> Vec<Vec<String>> {
    split_records(text)
        .into_iter()
        .enumerate()
        .map(|(line_num, record)| {
            if record.is_empty() {
                return vec![String::new()];
            }
            parse_record(record).unwrap_or_else(|e| {
                tracing::warn!("Ignoring clipboard record {}: {}", line_num + 1, e);
                Vec::new()
            })
        })
        .collect()
}

/// Split `text` at line breaks outside quoted fields. A final terminator
/// does not start another record.
///
/// Quoting follows the csv reader: a quote opens a quoted field only at the
/// start of a field, and `""` inside one is an escaped quote.
fn split_records(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if in_quotes {
            if byte == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
        } else {
            match byte {
                b'"' if field_start => in_quotes = true,
                DELIMITER => {
                    field_start = true;
                    i += 1;
                    continue;
                }
                b'\r' | b'\n' => {
                    records.push(&text[start..i]);
                    if byte == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    start = i + 1;
                    field_start = true;
                    i += 1;
                    continue;
                }
                _ => {}
            }
            field_start = false;
        }
        i += 1;
    }

    if start < bytes.len() {
        records.push(&text[start..]);
    }
    records
}

fn parse_record(record: &str) -> csv::Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(record.as_bytes());

    let mut fields = StringRecord::new();
    reader.read_record(&mut fields)?;
    Ok(fields.iter().map(str::to_string).collect())
}

/// Make `value` storable in a single data file line: line breaks collapse
/// to one space and characters outside Windows-1252 become `?`.
pub fn sanitize(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push(' ');
            }
            '\n' => result.push(' '),
            _ if encode_cp1252_char(ch).is_some() => result.push(ch),
            _ => result.push('?'),
        }
    }

    result
}

//! CSV file operations
//!
//! Tables are plain rows of strings. No header handling, no type coercion,
//! rows may differ in length. Output uses minimal quoting and `\r\n` record
//! terminators. A row with no fields is a blank line, both ways.

use std::path::Path;

use ::csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};

use super::{read_decoded, write_encoded, WriteMode};

/// Read every row of a CSV file as strings.
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `encoding` - Text encoding of the file
/// * `delimiter` - Field delimiter, usually `b','`
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidCsv` - If a record cannot be parsed
/// * `Decode` - If the file is not valid in `encoding`
pub fn read_csv(path: &Path, encoding: TextEncoding, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let content = read_decoded(path, encoding)?;

    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).delimiter(delimiter);

    let mut rows = Vec::new();
    for line in split_records(&content, delimiter) {
        // The csv reader skips blank lines
        if line.is_empty() {
            rows.push(Vec::new());
            continue;
        }

        let mut reader = builder.from_reader(line.as_bytes());
        for record in reader.records() {
            let record = record.map_err(|e| {
                FilekitError::InvalidCsv(format!("{}: {}", path.display(), e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
    }

    Ok(rows)
}

/// Overwrite a CSV file with the given rows.
///
/// # Errors
/// * `Encode` - If a field cannot be represented in `encoding`
/// * `Io` - If there's an error writing the file
pub fn write_csv<R, F>(rows: &[R], path: &Path, encoding: TextEncoding, delimiter: u8) -> Result<()>
where
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    let content = to_csv_string(rows, delimiter)?;
    write_encoded(path, &content, encoding, WriteMode::Overwrite)
}

/// Append rows after the existing content of a CSV file, creating it if absent.
///
/// The existing content is neither read nor validated.
pub fn append_csv<R, F>(rows: &[R], path: &Path, encoding: TextEncoding, delimiter: u8) -> Result<()>
where
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    let content = to_csv_string(rows, delimiter)?;
    write_encoded(path, &content, encoding, WriteMode::Append)
}

fn to_csv_string<R, F>(rows: &[R], delimiter: u8) -> Result<String>
where
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .terminator(Terminator::CRLF);

    let mut buf = Vec::new();
    for row in rows {
        let fields = row.as_ref();
        // The csv writer would emit `""` for an empty record
        if fields.is_empty() {
            buf.extend_from_slice(b"\r\n");
            continue;
        }

        let mut writer = builder.from_writer(&mut buf);
        writer
            .write_record(fields.iter().map(|field| field.as_ref()))
            .map_err(|e| FilekitError::InvalidCsv(e.to_string()))?;
        writer.flush()?;
    }

    String::from_utf8(buf).map_err(|e| FilekitError::InvalidCsv(e.to_string()))
}

/// Split CSV text into one slice per record, terminators removed.
///
/// `\r\n`, `\n` and `\r` end a record unless they sit inside a quoted
/// field. A blank line yields an empty slice; a final terminator does not
/// start another record.
fn split_records(content: &str, delimiter: u8) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut field_start = true;

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
        } else if b == b'"' && field_start {
            in_quotes = true;
            field_start = false;
        } else if b == b'\r' || b == b'\n' {
            records.push(&content[start..i]);
            if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            start = i + 1;
            field_start = true;
        } else {
            field_start = b == delimiter;
        }
        i += 1;
    }

    if start < bytes.len() {
        records.push(&content[start..]);
    }
    records
}

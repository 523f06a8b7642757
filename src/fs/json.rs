//! JSON file operations
//!
//! Documents are written with 4-space indentation and read with strict parsing.
//! Files hold pure ASCII: non-ASCII characters are written as `\uXXXX` escapes,
//! so any ASCII-compatible encoding can store any document.

use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;

use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};

use super::{read_decoded, write_encoded, WriteMode};

const INDENT: &[u8] = b"    ";

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
/// * `encoding` - Text encoding of the file
///
/// # Returns
/// The deserialized value, usually a `serde_json::Value`
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match `T`
/// * `Decode` - If the file is not valid in `encoding`
pub fn read_json<T: DeserializeOwned>(path: &Path, encoding: TextEncoding) -> Result<T> {
    let content = read_decoded(path, encoding)?;

    serde_json::from_str(&content).map_err(|e| {
        FilekitError::InvalidJson(format!("{}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with 4-space indentation.
///
/// Non-ASCII characters in strings and keys are escaped, so the file is pure
/// ASCII. The value is serialized before the file is opened. The write itself
/// is not atomic: an I/O failure part-way through can leave a truncated file.
///
/// # Arguments
/// * `data` - The value to serialize and write
/// * `path` - Path to the JSON file
/// * `encoding` - Text encoding of the file
///
/// # Errors
/// * `InvalidJson` - If the value cannot be serialized
/// * `Io` - If there's an error writing the file
pub fn write_json<T: Serialize + ?Sized>(data: &T, path: &Path, encoding: TextEncoding) -> Result<()> {
    let content = serialize_with(data, AsciiFormatter::new())?;
    write_encoded(path, &content, encoding, WriteMode::Overwrite)
}

/// Append objects to the array stored in a JSON file.
///
/// `items` must serialize to an array of objects. A missing file or a file
/// holding malformed JSON counts as an empty array. When the file holds
/// anything other than an array, the items are dropped and the existing
/// document is written back unchanged.
///
/// # Errors
/// * `InvalidInput` - If `items` is not an array of objects; the file is not touched
/// * `Decode` / `Io` - If the existing file cannot be read
/// * `Io` - If the result cannot be written
pub fn append_json<T: Serialize + ?Sized>(
    items: &T,
    path: &Path,
    encoding: TextEncoding,
) -> Result<()> {
    let items = serde_json::to_value(items).map_err(|e| {
        FilekitError::InvalidJson(format!("Cannot serialize items for {}: {}", path.display(), e))
    })?;
    let items = expect_array_of_objects(items)?;

    let existing = match read_json::<Value>(path, encoding) {
        Ok(value) => value,
        Err(FilekitError::FileNotFound(_)) => Value::Array(Vec::new()),
        Err(FilekitError::InvalidJson(reason)) => {
            tracing::warn!(path = %path.display(), %reason, "discarding malformed JSON before append");
            Value::Array(Vec::new())
        }
        Err(e) => return Err(e),
    };

    let updated = match existing {
        Value::Array(mut entries) => {
            entries.extend(items);
            Value::Array(entries)
        }
        other => {
            tracing::warn!(
                path = %path.display(),
                kind = kind_of(&other),
                dropped = items.len(),
                "existing JSON document is not an array, items not appended"
            );
            other
        }
    };

    write_json(&updated, path, encoding)
}

/// Pretty JSON for display, with non-ASCII characters left as is.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serialize_with(data, PrettyFormatter::with_indent(INDENT))
}

fn serialize_with<T, F>(data: &T, formatter: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .map_err(|e| FilekitError::InvalidJson(format!("Cannot serialize to JSON: {}", e)))?;

    String::from_utf8(buf).map_err(|e| FilekitError::InvalidJson(e.to_string()))
}

/// Pretty formatter that escapes every non-ASCII character as `\uXXXX`,
/// using UTF-16 surrogate pairs outside the basic plane.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        AsciiFormatter {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}

fn expect_array_of_objects(items: Value) -> Result<Vec<Value>> {
    let entries = match items {
        Value::Array(entries) => entries,
        other => {
            return Err(FilekitError::InvalidInput(format!(
                "append_json expects an array of objects, got {}",
                kind_of(&other)
            )))
        }
    };

    if let Some((index, entry)) = entries.iter().enumerate().find(|(_, v)| !v.is_object()) {
        return Err(FilekitError::InvalidInput(format!(
            "append_json expects an array of objects, element {} is {}",
            index,
            kind_of(entry)
        )));
    }

    Ok(entries)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

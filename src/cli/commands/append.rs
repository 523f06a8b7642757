//! Append command - Append a payload to a file

use std::path::Path;

use serde_json::Value;

use super::{parse_payload, read_payload, resolve_target, Overrides, Target};
use crate::errors::{FilekitError, Result};
use crate::fs;
use crate::schemas::Format;

/// Append the payload from `--data` or stdin to a file
pub fn run(cwd: Option<&Path>, path: &Path, data: Option<&str>, overrides: &Overrides) -> Result<()> {
    let target = resolve_target(cwd, path, overrides)?;
    let payload = read_payload(data)?;
    apply(&target, &payload)?;

    tracing::info!(path = %target.path.display(), format = %target.format, "appended to file");
    Ok(())
}

/// Append a payload using the target format's append operation.
///
/// JSON payloads must be arrays of objects. CSV payloads are JSON arrays of
/// string arrays. Text payloads are appended verbatim. YAML has no append.
pub fn apply(target: &Target, payload: &str) -> Result<()> {
    match target.format {
        Format::Text => fs::append_txt(payload, &target.path, target.encoding),
        Format::Json => {
            let items: Value = parse_payload(payload, "a JSON array of objects")?;
            fs::append_json(&items, &target.path, target.encoding)
        }
        Format::Csv => {
            let rows: Vec<Vec<String>> = parse_payload(payload, "an array of string arrays")?;
            fs::append_csv(&rows, &target.path, target.encoding, target.delimiter)
        }
        Format::Yaml => Err(FilekitError::UnsupportedFormat(
            "yaml files cannot be appended to".to_string(),
        )),
    }
}

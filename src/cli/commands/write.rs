//! Write command - Overwrite a file with a payload

use std::path::Path;

use serde_json::Value;

use super::{parse_payload, read_payload, resolve_target, write_yaml_value, Overrides, Target};
use crate::errors::Result;
use crate::fs;
use crate::schemas::Format;

/// Overwrite a file with the payload from `--data` or stdin
pub fn run(cwd: Option<&Path>, path: &Path, data: Option<&str>, overrides: &Overrides) -> Result<()> {
    let target = resolve_target(cwd, path, overrides)?;
    let payload = read_payload(data)?;
    apply(&target, &payload)?;

    tracing::info!(path = %target.path.display(), format = %target.format, "wrote file");
    Ok(())
}

/// Write a payload in the target's format.
///
/// Text payloads are written verbatim. JSON and YAML payloads are JSON
/// documents. CSV payloads are JSON arrays of string arrays.
pub fn apply(target: &Target, payload: &str) -> Result<()> {
    match target.format {
        Format::Text => fs::write_txt(payload, &target.path, target.encoding),
        Format::Json => {
            let value: Value = parse_payload(payload, "a JSON document")?;
            fs::write_json(&value, &target.path, target.encoding)
        }
        Format::Yaml => {
            let value: Value = parse_payload(payload, "a JSON document")?;
            write_yaml_value(target, &value)
        }
        Format::Csv => {
            let rows: Vec<Vec<String>> = parse_payload(payload, "an array of string arrays")?;
            fs::write_csv(&rows, &target.path, target.encoding, target.delimiter)
        }
    }
}

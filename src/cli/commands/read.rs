//! Read command - Print the contents of a file

use std::path::Path;

use serde_json::Value;

use super::{read_yaml_value, resolve_target, Overrides, Target};
use crate::errors::Result;
use crate::fs;
use crate::schemas::Format;

/// Print the contents of a file to stdout
pub fn run(cwd: Option<&Path>, path: &Path, overrides: &Overrides) -> Result<()> {
    let target = resolve_target(cwd, path, overrides)?;
    let output = render(&target)?;

    match target.format {
        Format::Text => print!("{}", output),
        _ => println!("{}", output),
    }
    Ok(())
}

/// Render a file for display: structured formats as indented JSON, text verbatim
pub fn render(target: &Target) -> Result<String> {
    match target.format {
        Format::Json => {
            let value: Value = fs::read_json(&target.path, target.encoding)?;
            fs::to_pretty_json(&value)
        }
        Format::Yaml => fs::to_pretty_json(&read_yaml_value(target)?),
        Format::Csv => {
            let rows = fs::read_csv(&target.path, target.encoding, target.delimiter)?;
            fs::to_pretty_json(&rows)
        }
        Format::Text => fs::read_txt(&target.path, target.encoding),
    }
}

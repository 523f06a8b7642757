//! CLI command implementations

pub mod append;
pub mod formats;
pub mod read;
pub mod write;

use std::io::Read as _;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::{load_options, Capabilities};
use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};
use crate::schemas::Format;

/// Settings given on the command line that take precedence over filekit.json
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub encoding: Option<TextEncoding>,
    pub delimiter: Option<char>,
    pub format: Option<Format>,
}

/// A file together with everything needed to operate on it
#[derive(Debug, Clone)]
pub struct Target {
    pub path: PathBuf,
    pub format: Format,
    pub encoding: TextEncoding,
    pub delimiter: u8,
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Work out the path, format and options for a command.
///
/// Precedence: command-line overrides, then filekit.json, then defaults.
///
/// # Errors
/// * `UnsupportedFormat` - If the format cannot be detected or is not compiled in
/// * `InvalidInput` - If the delimiter is not ASCII
/// * `Wrapped` - If filekit.json is unreadable
pub fn resolve_target(cwd: Option<&Path>, path: &Path, overrides: &Overrides) -> Result<Target> {
    let dir = resolve_cwd(cwd);
    let path = dir.join(path);

    let format = match overrides.format {
        Some(format) => format,
        None => Format::from_path(&path)?,
    };
    Capabilities::detect().require(format)?;

    let mut options = load_options(&dir, &path)?;
    if let Some(encoding) = overrides.encoding {
        options = options.with_encoding(encoding);
    }
    if let Some(delimiter) = overrides.delimiter {
        options = options.with_delimiter(delimiter);
    }

    Ok(Target {
        path,
        format,
        encoding: options.encoding,
        delimiter: options.delimiter_byte()?,
    })
}

/// Use the `--data` payload, or read it from stdin.
pub fn read_payload(data: Option<&str>) -> Result<String> {
    match data {
        Some(data) => Ok(data.to_string()),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse a JSON payload into the shape a format expects.
pub fn parse_payload<T: DeserializeOwned>(payload: &str, expected: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| {
        FilekitError::InvalidInput(format!("Payload must be {}: {}", expected, e))
    })
}

#[cfg(feature = "yaml")]
fn read_yaml_value(target: &Target) -> Result<serde_json::Value> {
    crate::fs::read_yaml(&target.path, target.encoding)
}

#[cfg(not(feature = "yaml"))]
fn read_yaml_value(_target: &Target) -> Result<serde_json::Value> {
    Err(yaml_not_compiled())
}

#[cfg(feature = "yaml")]
fn write_yaml_value(target: &Target, value: &serde_json::Value) -> Result<()> {
    crate::fs::write_yaml(value, &target.path, target.encoding)
}

#[cfg(not(feature = "yaml"))]
fn write_yaml_value(_target: &Target, _value: &serde_json::Value) -> Result<()> {
    Err(yaml_not_compiled())
}

#[cfg(not(feature = "yaml"))]
fn yaml_not_compiled() -> FilekitError {
    FilekitError::UnsupportedFormat("yaml support is not compiled into this build".to_string())
}

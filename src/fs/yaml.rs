//! YAML file operations
//!
//! Only compiled with the `yaml` feature.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};

use super::{read_decoded, write_encoded, WriteMode};

/// Read and deserialize a YAML file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidYaml` - If the file contains invalid YAML or does not match `T`
/// * `Decode` - If the file is not valid in `encoding`
pub fn read_yaml<T: DeserializeOwned>(path: &Path, encoding: TextEncoding) -> Result<T> {
    let content = read_decoded(path, encoding)?;

    serde_yaml::from_str(&content).map_err(|e| {
        FilekitError::InvalidYaml(format!("{}: {}", path.display(), e))
    })
}

/// Serialize a value as YAML and overwrite the file with it.
///
/// # Errors
/// * `InvalidYaml` - If the value cannot be serialized
/// * `Io` - If there's an error writing the file
pub fn write_yaml<T: Serialize + ?Sized>(data: &T, path: &Path, encoding: TextEncoding) -> Result<()> {
    let content = serde_yaml::to_string(data)
        .map_err(|e| FilekitError::InvalidYaml(format!("Cannot serialize to YAML: {}", e)))?;
    write_encoded(path, &content, encoding, WriteMode::Overwrite)
}

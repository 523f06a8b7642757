//! File system utilities for filekit
//!
//! Read, write and append operations for JSON, CSV, YAML and plain-text files.
//! Every operation opens its own handle, runs to completion and closes the
//! handle before returning. Nothing is cached between calls.

mod csv;
mod json;
mod text;
#[cfg(feature = "yaml")]
mod yaml;

#[cfg(test)]
mod property_tests;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};

pub use self::csv::{append_csv, read_csv, write_csv};
pub use self::json::{append_json, read_json, write_json};
pub(crate) use self::json::to_pretty_json;
pub use self::text::{append_txt, read_txt, write_txt};
#[cfg(feature = "yaml")]
pub use self::yaml::{read_yaml, write_yaml};

/// How [`write_encoded`] opens its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteMode {
    /// Create or truncate
    Overwrite,
    /// Create if absent, write after existing content
    Append,
}

/// Read a whole file and decode it.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `Decode` - If the bytes are not valid in `encoding`
/// * `Io` - Any other read failure
pub(crate) fn read_decoded(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            FilekitError::FileNotFound(path.display().to_string())
        } else {
            FilekitError::Io(e)
        }
    })?;

    let text = encoding.decode(&bytes).map_err(|_| {
        FilekitError::Decode(format!(
            "{} is not valid {} text",
            path.display(),
            encoding.name()
        ))
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), %encoding, "read file");
    Ok(text)
}

/// Encode text and write it to a file.
///
/// Encoding happens before the file is opened, so an unrepresentable
/// character never truncates the target.
///
/// # Errors
/// * `Encode` - If `text` cannot be represented in `encoding`
/// * `Io` - If the file cannot be opened or written
pub(crate) fn write_encoded(
    path: &Path,
    text: &str,
    encoding: TextEncoding,
    mode: WriteMode,
) -> Result<()> {
    let bytes = encoding.encode(text).map_err(|_| {
        FilekitError::Encode(format!(
            "Cannot write {}: text is not representable in {}",
            path.display(),
            encoding.name()
        ))
    })?;

    let mut file = match mode {
        WriteMode::Overwrite => fs::File::create(path)?,
        WriteMode::Append => fs::OpenOptions::new().create(true).append(true).open(path)?,
    };
    file.write_all(&bytes)?;
    file.flush()?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), %encoding, ?mode, "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_decoded_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");

        let err = read_decoded(&path, TextEncoding::utf8()).unwrap_err();
        assert!(matches!(err, FilekitError::FileNotFound(_)));
        assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
    }

    #[test]
    fn test_read_decoded_directory_is_io_error() {
        let temp = TempDir::new().unwrap();

        let err = read_decoded(temp.path(), TextEncoding::utf8()).unwrap_err();
        assert!(matches!(err, FilekitError::Io(_)));
    }

    #[test]
    fn test_read_decoded_invalid_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.txt");
        fs::write(&path, [0xC3, 0x28]).unwrap();

        let err = read_decoded(&path, TextEncoding::utf8()).unwrap_err();
        assert!(matches!(err, FilekitError::Decode(_)));
    }

    #[test]
    fn test_write_encoded_modes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        write_encoded(&path, "one", TextEncoding::utf8(), WriteMode::Overwrite).unwrap();
        write_encoded(&path, "two", TextEncoding::utf8(), WriteMode::Append).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "onetwo");

        write_encoded(&path, "three", TextEncoding::utf8(), WriteMode::Overwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "three");
    }

    #[test]
    fn test_encode_failure_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keep.txt");
        fs::write(&path, "original").unwrap();

        let cp1251: TextEncoding = "windows-1251".parse().unwrap();
        let err = write_encoded(&path, "漢字", cp1251, WriteMode::Overwrite).unwrap_err();
        assert!(matches!(err, FilekitError::Encode(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no").join("such").join("dir.txt");

        let err = write_encoded(&path, "x", TextEncoding::utf8(), WriteMode::Overwrite).unwrap_err();
        assert!(matches!(err, FilekitError::Io(_)));
    }
}

//! Plain-text file operations
//!
//! Text is read and written as a single string. No line splitting and no
//! newline normalization.

use std::path::Path;

use crate::encoding::TextEncoding;
use crate::errors::Result;

use super::{read_decoded, write_encoded, WriteMode};

/// Read a whole text file into a string.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `Decode` - If the file is not valid in `encoding`
/// * `Io` - Any other read failure
pub fn read_txt(path: &Path, encoding: TextEncoding) -> Result<String> {
    read_decoded(path, encoding)
}

/// Overwrite a text file with the given string, creating it if absent.
pub fn write_txt(text: &str, path: &Path, encoding: TextEncoding) -> Result<()> {
    write_encoded(path, text, encoding, WriteMode::Overwrite)
}

/// Append a string to the end of a text file, creating it if absent.
pub fn append_txt(text: &str, path: &Path, encoding: TextEncoding) -> Result<()> {
    write_encoded(path, text, encoding, WriteMode::Append)
}

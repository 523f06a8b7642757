//! Options schema - Encoding and delimiter used by the file operations

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};

/// Options shared by the read/write/append operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOptions {
    /// Text encoding of the file contents
    #[serde(default)]
    pub encoding: TextEncoding,

    /// Field delimiter for CSV files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    ','
}

impl Default for FileOptions {
    fn default() -> Self {
        FileOptions {
            encoding: TextEncoding::default(),
            delimiter: default_delimiter(),
        }
    }
}

impl FileOptions {
    /// Default options for a path: tab-delimited for `.tsv`, comma otherwise
    pub fn for_path(path: &Path) -> Self {
        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));

        if is_tsv {
            FileOptions::default().with_delimiter('\t')
        } else {
            FileOptions::default()
        }
    }

    /// Return new options with the given encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Return new options with the given delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The delimiter as a single byte, as the CSV reader and writer need it.
    ///
    /// # Errors
    /// * `InvalidInput` - If the delimiter is not an ASCII character
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(FilekitError::InvalidInput(format!(
                "CSV delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )))
        }
    }
}

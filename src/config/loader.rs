//! Options loading with defaults

use std::path::Path;

use serde::Deserialize;

use crate::encoding::TextEncoding;
use crate::errors::{FilekitError, Result};
use crate::fs;
use crate::schemas::FileOptions;

/// Name of the options file looked up in the working directory
pub const OPTIONS_FILE_NAME: &str = "filekit.json";

/// Contents of `filekit.json`; absent fields fall through to the defaults
#[derive(Debug, Deserialize)]
struct OptionsFile {
    encoding: Option<TextEncoding>,
    delimiter: Option<char>,
}

impl OptionsFile {
    fn layer_over(self, defaults: FileOptions) -> FileOptions {
        FileOptions {
            encoding: self.encoding.unwrap_or(defaults.encoding),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
        }
    }
}

/// Load file options from a directory, falling back to defaults.
///
/// Fields set in `filekit.json` win over the defaults for `target`
/// (tab-delimited for `.tsv`); fields it leaves out, or a missing file,
/// keep those defaults.
///
/// # Arguments
/// * `dir` - Directory containing `filekit.json`
/// * `target` - The file the options will be used for
///
/// # Errors
/// * `Wrapped` - If the options file exists but cannot be read or parsed
pub fn load_options(dir: &Path, target: &Path) -> Result<FileOptions> {
    let defaults = FileOptions::for_path(target);
    let path = dir.join(OPTIONS_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no options file, using defaults");
        return Ok(defaults);
    }

    let file: OptionsFile = fs::read_json(&path, TextEncoding::utf8())
        .map_err(|e| FilekitError::wrap(e, format!("Failed to load {}", path.display())))?;
    Ok(file.layer_over(defaults))
}

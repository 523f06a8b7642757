//! Format schema - Supported file formats

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{FilekitError, Result};

/// File format handled by filekit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON document (mapping or sequence)
    Json,
    /// Delimited rows of strings
    Csv,
    /// Plain text blob
    Text,
    /// YAML document (requires the `yaml` feature)
    Yaml,
}

impl Format {
    /// All formats, in display order
    pub const ALL: [Format; 4] = [Format::Json, Format::Csv, Format::Text, Format::Yaml];

    /// Detect the format from a file extension.
    ///
    /// # Errors
    /// * `UnsupportedFormat` - If the path has no extension or an unknown one
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| {
                FilekitError::UnsupportedFormat(format!(
                    "Cannot detect format of {} (no extension)",
                    path.display()
                ))
            })?;

        match ext.as_str() {
            "json" => Ok(Format::Json),
            "csv" | "tsv" => Ok(Format::Csv),
            "txt" | "text" | "log" | "md" => Ok(Format::Text),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(FilekitError::UnsupportedFormat(format!(
                "Unknown extension .{} for {}",
                other,
                path.display()
            ))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Text => write!(f, "text"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = FilekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            "text" | "txt" => Ok(Format::Text),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(FilekitError::UnsupportedFormat(format!("Unknown format: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("data.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("table.CSV")).unwrap(), Format::Csv);
        assert_eq!(Format::from_path(Path::new("table.tsv")).unwrap(), Format::Csv);
        assert_eq!(Format::from_path(Path::new("notes.txt")).unwrap(), Format::Text);
        assert_eq!(Format::from_path(Path::new("a/b/app.log")).unwrap(), Format::Text);
        assert_eq!(Format::from_path(Path::new("settings.yml")).unwrap(), Format::Yaml);
    }

    #[test]
    fn test_from_path_unknown() {
        let err = Format::from_path(Path::new("archive.zip")).unwrap_err();
        assert!(matches!(err, FilekitError::UnsupportedFormat(_)));

        let err = Format::from_path(Path::new("Makefile")).unwrap_err();
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for format in Format::ALL {
            let parsed: Format = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
        assert_eq!("TXT".parse::<Format>().unwrap(), Format::Text);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_serialization() {
        assert_eq!(serde_json::to_string(&Format::Json).unwrap(), "\"json\"");
        assert_eq!(serde_json::to_string(&Format::Text).unwrap(), "\"text\"");
    }
}

//! Optional format support compiled into this build

use serde::Serialize;

use crate::errors::{FilekitError, Result};
use crate::schemas::Format;

/// Which formats this build can handle.
///
/// JSON, CSV and text are always available. YAML depends on the `yaml`
/// cargo feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// YAML read/write support
    pub yaml: bool,
}

impl Capabilities {
    /// Capabilities of the running binary
    pub fn detect() -> Self {
        Capabilities {
            yaml: cfg!(feature = "yaml"),
        }
    }

    /// Whether `format` can be read and written
    pub fn supports(&self, format: Format) -> bool {
        match format {
            Format::Json | Format::Csv | Format::Text => true,
            Format::Yaml => self.yaml,
        }
    }

    /// Fail with `UnsupportedFormat` unless `format` is available
    pub fn require(&self, format: Format) -> Result<()> {
        if self.supports(format) {
            Ok(())
        } else {
            Err(FilekitError::UnsupportedFormat(format!(
                "{} support is not compiled into this build",
                format
            )))
        }
    }
}

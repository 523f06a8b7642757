//! Formats command - List supported formats

use serde::Serialize;

use crate::config::Capabilities;
use crate::errors::Result;
use crate::fs;
use crate::schemas::Format;

/// Availability of one format in this build
#[derive(Debug, Clone, Serialize)]
pub struct FormatStatus {
    pub format: Format,
    pub available: bool,
}

/// Print each format and whether it is available
pub fn run(json: bool) -> Result<()> {
    let statuses = list(&Capabilities::detect());

    if json {
        println!("{}", fs::to_pretty_json(&statuses)?);
    } else {
        for status in &statuses {
            let label = if status.available { "available" } else { "not compiled in" };
            println!("{:<6} {}", status.format.to_string(), label);
        }
    }
    Ok(())
}

/// Status of every format under the given capabilities
pub fn list(capabilities: &Capabilities) -> Vec<FormatStatus> {
    Format::ALL
        .iter()
        .map(|&format| FormatStatus {
            format,
            available: capabilities.supports(format),
        })
        .collect()
}

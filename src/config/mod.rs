//! Configuration for filekit
//!
//! Options loading for the CLI and detection of optional format support.

mod capabilities;
mod loader;

pub use capabilities::Capabilities;
pub use loader::{load_options, OPTIONS_FILE_NAME};

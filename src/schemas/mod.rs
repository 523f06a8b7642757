//! Schema types for filekit
//!
//! Small serde types shared by the file operations, the options loader and the CLI.

mod format;
mod options;

pub use format::Format;
pub use options::FileOptions;

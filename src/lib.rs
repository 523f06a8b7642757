//! Filekit - Convenience functions for reading, writing and appending files
//!
//! This library provides:
//! - JSON, CSV, YAML and plain-text read/write/append operations
//! - Named text encodings for decoding and encoding file contents
//! - Typed errors with stable codes for every failure
//! - A small CLI over the same operations

pub mod cli;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use encoding::TextEncoding;
pub use errors::{FilekitError, Result};
pub use schemas::{FileOptions, Format};

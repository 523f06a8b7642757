//! Error types for filekit
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for filekit operations
pub type Result<T> = std::result::Result<T, FilekitError>;

/// Main error type for all filekit operations
#[derive(Debug, Error)]
pub enum FilekitError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid JSON content or unserializable value
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// CSV dialect error
    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),

    /// Invalid YAML content or unserializable value
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    /// Caller passed data of the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown text encoding label
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Unknown file format, or a format that was not compiled in
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File bytes are not valid in the requested encoding
    #[error("Decode error: {0}")]
    Decode(String),

    /// Text contains characters the requested encoding cannot represent
    #[error("Encode error: {0}")]
    Encode(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl FilekitError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            FilekitError::FileNotFound(_) => "FILE_NOT_FOUND",
            FilekitError::InvalidJson(_) => "INVALID_JSON",
            FilekitError::InvalidCsv(_) => "INVALID_CSV",
            FilekitError::InvalidYaml(_) => "INVALID_YAML",
            FilekitError::InvalidInput(_) => "INVALID_INPUT",
            FilekitError::UnsupportedEncoding(_) => "UNSUPPORTED_ENCODING",
            FilekitError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            FilekitError::Decode(_) => "DECODE_ERROR",
            FilekitError::Encode(_) => "ENCODE_ERROR",
            FilekitError::Io(_) => "IO_ERROR",
            FilekitError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        FilekitError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(_error: &FilekitError) -> i32 {
    1
}

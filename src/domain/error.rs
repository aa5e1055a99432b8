//! Error types for the dialpick plugin.
//!
//! The picker core (dataset, filtering, selection) is total and never fails.
//! Errors only come from the ambient edges: reading theme files, parsing
//! configuration strings, encoding notices and writing trace files.

use thiserror::Error;

/// The main error type for dialpick operations.
///
/// # Examples
///
/// ```
/// use dialpick::domain::DialpickError;
///
/// fn parse_level(raw: &str) -> Result<(), DialpickError> {
///     Err(DialpickError::Config(format!("unknown level: {raw}")))
/// }
/// assert!(parse_level("loud").is_err());
/// ```
#[derive(Debug, Error)]
pub enum DialpickError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is malformed.
    ///
    /// Raised for style strings such as `text_style "bold,fg=#zz0000"`.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A selection notice could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for dialpick operations.
pub type Result<T> = std::result::Result<T, DialpickError>;

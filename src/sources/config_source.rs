//! Configuration source trait.

use crate::error::Result;
use std::fmt;

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML, the native format of image customization documents.
    Yaml,
    /// JSON.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("yaml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Trait for configuration sources.
///
/// Implement this trait to read documents from somewhere other than a file or
/// an in-memory string.
pub trait ConfigSource: Send + Sync {
    /// Read the raw document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn read(&self) -> Result<String>;

    /// The format the document text is written in.
    fn format(&self) -> Format;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;
}

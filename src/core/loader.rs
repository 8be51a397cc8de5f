//! Configuration loader: read, deserialize, validate.

use crate::api::Config;
use crate::core::Validate;
use crate::error::{ConfigError, Result};
use crate::sources::{ConfigSource, Format};
use tracing::debug;

/// Loads configuration documents and rejects invalid ones.
///
/// # Examples
///
/// ```rust
/// use imagecustomizer_config::prelude::*;
/// use imagecustomizer_config::sources::InlineSource;
///
/// let source = InlineSource::yaml(
///     r#"
/// resetPartitionsUuidsType: reset-all
/// os:
///   resetBootLoaderType: hard-reset
/// "#,
/// );
///
/// let config = ConfigLoader::new().load(&source).unwrap();
/// assert!(config.storage.is_none());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self
    }

    /// Deserialize a document without validating it.
    ///
    /// # Errors
    ///
    /// Returns `DeserializationError` if the text is not a well-formed document,
    /// including unknown keys and unknown enum values, or `FeatureNotEnabled`
    /// if the format's cargo feature is off.
    pub fn parse(&self, text: &str, format: Format) -> Result<Config> {
        match format {
            #[cfg(feature = "yaml")]
            Format::Yaml => serde_yaml::from_str(text)
                .map_err(|e| ConfigError::DeserializationError(e.to_string())),
            #[cfg(not(feature = "yaml"))]
            Format::Yaml => Err(ConfigError::FeatureNotEnabled("yaml")),

            #[cfg(feature = "json")]
            Format::Json => serde_json::from_str(text)
                .map_err(|e| ConfigError::DeserializationError(e.to_string())),
            #[cfg(not(feature = "json"))]
            Format::Json => Err(ConfigError::FeatureNotEnabled("json")),
        }
    }

    /// Read, deserialize and validate a document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source cannot be read
    /// - Deserialization fails
    /// - Validation fails (`ConfigError::ValidationError` carries the first
    ///   violated rule)
    pub fn load(&self, source: &dyn ConfigSource) -> Result<Config> {
        debug!(source = %source.name(), format = %source.format(), "loading config");

        let text = source.read().map_err(|e| match e {
            ConfigError::IoError(io) => ConfigError::LoadError(format!(
                "Failed to read source '{}': {}",
                source.name(),
                io
            )),
            other => other,
        })?;

        let config = self.parse(&text, source.format())?;
        config.validate()?;

        Ok(config)
    }
}

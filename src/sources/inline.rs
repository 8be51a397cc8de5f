//! In-memory configuration source.

use super::{ConfigSource, Format};
use crate::error::Result;

/// A document held in memory, e.g. received over an API or embedded in a test.
///
/// # Examples
///
/// ```rust
/// use imagecustomizer_config::sources::{ConfigSource, Format, InlineSource};
///
/// let source = InlineSource::yaml("os:\n  resetBootLoaderType: hard-reset\n");
/// assert_eq!(source.format(), Format::Yaml);
/// ```
pub struct InlineSource {
    text: String,
    format: Format,
    name: String,
}

impl InlineSource {
    /// Create an inline source with an explicit format.
    pub fn new(text: impl Into<String>, format: Format) -> Self {
        Self {
            text: text.into(),
            format,
            name: "inline".to_string(),
        }
    }

    /// Create an inline YAML source.
    pub fn yaml(text: impl Into<String>) -> Self {
        Self::new(text, Format::Yaml)
    }

    /// Create an inline JSON source.
    pub fn json(text: impl Into<String>) -> Self {
        Self::new(text, Format::Json)
    }

    /// Set the name used in logs and error messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl ConfigSource for InlineSource {
    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn format(&self) -> Format {
        self.format
    }

    fn name(&self) -> String {
        format!("inline:{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_returns_text() {
        let source = InlineSource::json("{}");
        assert_eq!(source.read().unwrap(), "{}");
        assert_eq!(source.format(), Format::Json);
    }

    #[test]
    fn test_with_name() {
        let source = InlineSource::yaml("").with_name("request-42");
        assert_eq!(source.name(), "inline:request-42");
    }
}
